use userhub_auth::{api::request::VerifyOtpRequest, AuthClient, AuthClientExt};
use userhub_core::{session::SessionTokens, Client};

use crate::{message::error_message, rules::required, Route};

/// Field values of the OTP entry form.
#[derive(Debug, Default, Clone)]
pub struct OtpForm {
    /// The code typed from the authenticator app.
    pub otp: String,
}

/// State behind the OTP screen, both plain entry and first-time setup.
pub struct OtpController {
    auth: AuthClient,
    tokens: SessionTokens,
    /// Provisioning QR image handed over by the login screen, present only
    /// when the account still needs authenticator enrollment.
    pub otp_qr_code_base64: Option<String>,
    /// Current form field values.
    pub form: OtpForm,
    /// Message shown under the form after a failed submit.
    pub error_message: Option<String>,
}

impl OtpController {
    /// Creates the controller, capturing the provisioning image when the
    /// login route carried one.
    pub fn activate(client: &Client, otp_qr_code_base64: Option<String>) -> Self {
        Self {
            auth: client.auth(),
            tokens: client.internal.tokens().clone(),
            otp_qr_code_base64,
            form: OtpForm::default(),
            error_message: None,
        }
    }

    /// Verifies the entered code.
    ///
    /// On success the fresh, MFA-satisfied token replaces the stored one and
    /// the user proceeds home. On failure the token store is untouched.
    pub async fn verify_otp(&mut self) -> Option<Route> {
        if let Err(message) = required(&self.form.otp, "Please enter a valid OTP code") {
            self.error_message = Some(message);
            return None;
        }

        let request = VerifyOtpRequest {
            code: self.form.otp.clone(),
        };

        match self.auth.verify_otp(&request).await {
            Ok(response) if response.success => {
                if let Some(token) = response.access_token {
                    self.tokens.set(token);
                }
                self.error_message = None;
                Some(Route::Home)
            }
            Ok(response) => {
                self.error_message = Some(
                    response
                        .message
                        .unwrap_or_else(|| "Invalid OTP code".to_string()),
                );
                None
            }
            Err(error) => {
                self.error_message = Some(error_message(
                    &error,
                    "An error occurred while verifying OTP",
                ));
                None
            }
        }
    }
}
