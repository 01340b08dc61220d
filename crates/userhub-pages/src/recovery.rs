use userhub_auth::{api::request::VerifyRecoveryOtpRequest, AuthClient, AuthClientExt};
use userhub_core::Client;

use crate::{message::error_message, Route};

/// State behind the recovery-codes screen.
pub struct RecoveryController {
    auth: AuthClient,
    /// Recovery codes fetched at activation, cached for display.
    pub recovery_codes: Vec<String>,
    /// Message shown when fetching or verifying fails.
    pub error_message: Option<String>,
}

impl RecoveryController {
    /// Creates the controller and immediately fetches the recovery codes,
    /// as the screen does on entry.
    pub async fn activate(client: &Client) -> Self {
        let mut controller = Self {
            auth: client.auth(),
            recovery_codes: Vec::new(),
            error_message: None,
        };
        controller.download_recovery_otp().await;
        controller
    }

    /// Fetches the account's recovery codes into the local cache.
    pub async fn download_recovery_otp(&mut self) {
        match self.auth.download_recovery_otp().await {
            Ok(response) if response.success => {
                self.recovery_codes = response.list_otp_recovery.unwrap_or_default();
                self.error_message = None;
            }
            Ok(response) => {
                self.error_message = Some(
                    response
                        .message
                        .unwrap_or_else(|| "Failed to get recovery codes".to_string()),
                );
            }
            Err(error) => {
                self.error_message = Some(error_message(
                    &error,
                    "An error occurred while getting recovery codes",
                ));
            }
        }
    }

    /// Verifies a recovery code in place of a lost authenticator.
    pub async fn verify_recovery_otp(&mut self, code: &str) -> Option<Route> {
        if code.is_empty() {
            self.error_message = Some("Please enter a recovery code".to_string());
            return None;
        }

        let request = VerifyRecoveryOtpRequest {
            code: code.to_string(),
        };

        match self.auth.verify_recovery_otp(&request).await {
            Ok(response) if response.success => {
                self.error_message = None;
                Some(Route::Home)
            }
            Ok(response) => {
                self.error_message = Some(
                    response
                        .message
                        .unwrap_or_else(|| "Invalid recovery code".to_string()),
                );
                None
            }
            Err(error) => {
                self.error_message = Some(error_message(
                    &error,
                    "An error occurred while verifying code",
                ));
                None
            }
        }
    }
}
