use userhub_auth::{api::request::ChangePasswordRequest, AuthClient, AuthClientExt};
use userhub_core::Client;

use crate::{
    message::error_message,
    rules::{min_length, required},
    Route,
};

/// Field values of the change-password form.
#[derive(Debug, Default, Clone)]
pub struct ChangePasswordForm {
    /// The new password.
    pub password: String,
    /// Confirmation of the new password.
    pub password_confirm: String,
}

impl ChangePasswordForm {
    fn validate(&self) -> Result<(), String> {
        required(&self.password, "Password is required")?;
        min_length(&self.password, 6, "Password must be at least 6 characters")?;
        required(&self.password_confirm, "Password confirmation is required")?;
        min_length(
            &self.password_confirm,
            6,
            "Password confirmation must be at least 6 characters",
        )?;

        if self.password != self.password_confirm {
            return Err("Passwords do not match".to_string());
        }

        Ok(())
    }
}

/// State behind the change-password screen.
pub struct ChangePasswordController {
    auth: AuthClient,
    /// Current form field values.
    pub form: ChangePasswordForm,
    /// Message shown under the form after a failed submit.
    pub error_message: Option<String>,
}

impl ChangePasswordController {
    /// Creates the controller with a blank form.
    pub fn activate(client: &Client) -> Self {
        Self {
            auth: client.auth(),
            form: ChangePasswordForm::default(),
            error_message: None,
        }
    }

    /// Submits the form. Success routes back to the login screen so the
    /// user signs in with the new password.
    pub async fn submit(&mut self) -> Option<Route> {
        if let Err(message) = self.form.validate() {
            self.error_message = Some(message);
            return None;
        }

        let request = ChangePasswordRequest {
            password: self.form.password.clone(),
            password_confirm: self.form.password_confirm.clone(),
        };

        match self.auth.change_password(&request).await {
            Ok(response) if response.success => {
                self.error_message = None;
                Some(Route::Login)
            }
            Ok(response) => {
                self.error_message = Some(
                    response
                        .message
                        .unwrap_or_else(|| "Password change failed".to_string()),
                );
                None
            }
            Err(error) => {
                self.error_message = Some(error_message(
                    &error,
                    "An error occurred while changing password",
                ));
                None
            }
        }
    }
}
