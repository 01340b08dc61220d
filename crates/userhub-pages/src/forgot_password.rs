use userhub_auth::{api::request::ForgotPasswordRequest, AuthClient, AuthClientExt};
use userhub_core::Client;

use crate::{
    message::error_message,
    rules::{email, min_length, required},
    Route,
};

/// Field values of the forgot-password form.
#[derive(Debug, Default, Clone)]
pub struct ForgotPasswordForm {
    /// Username of the locked-out account.
    pub username: String,
    /// Email the reset is delivered to.
    pub email: String,
}

impl ForgotPasswordForm {
    fn validate(&self) -> Result<(), String> {
        required(&self.username, "Username is required")?;
        min_length(&self.username, 2, "Username must be at least 2 characters")?;
        required(&self.email, "Email is required")?;
        email(&self.email, "Please enter a valid email address")?;
        Ok(())
    }
}

/// State behind the forgot-password screen.
pub struct ForgotPasswordController {
    auth: AuthClient,
    /// Current form field values.
    pub form: ForgotPasswordForm,
    /// Message shown under the form after a failed submit.
    pub error_message: Option<String>,
}

impl ForgotPasswordController {
    /// Creates the controller with a blank form.
    pub fn activate(client: &Client) -> Self {
        Self {
            auth: client.auth(),
            form: ForgotPasswordForm::default(),
            error_message: None,
        }
    }

    /// Submits the form. Success routes back to the login screen.
    pub async fn submit(&mut self) -> Option<Route> {
        if let Err(message) = self.form.validate() {
            self.error_message = Some(message);
            return None;
        }

        let request = ForgotPasswordRequest {
            username: self.form.username.clone(),
            email: self.form.email.clone(),
        };

        match self.auth.forgot_password(&request).await {
            Ok(response) if response.success => {
                self.error_message = None;
                Some(Route::Login)
            }
            Ok(response) => {
                self.error_message = Some(
                    response
                        .message
                        .unwrap_or_else(|| "Password reset request failed".to_string()),
                );
                None
            }
            Err(error) => {
                self.error_message = Some(error_message(
                    &error,
                    "An error occurred while requesting password reset",
                ));
                None
            }
        }
    }
}
