use userhub_auth::{api::request::LoginRequest, AuthClient, AuthClientExt};
use userhub_core::{session::SessionTokens, Client};

use crate::{message::error_message, rules::required, Route};

/// Field values of the login form.
#[derive(Debug, Default, Clone)]
pub struct LoginForm {
    /// Username field.
    pub username: String,
    /// Password field.
    pub password: String,
}

impl LoginForm {
    fn validate(&self) -> Result<(), String> {
        required(&self.username, "Please fill in all required fields")?;
        required(&self.password, "Please fill in all required fields")?;
        Ok(())
    }
}

/// State behind the login screen.
pub struct LoginController {
    auth: AuthClient,
    tokens: SessionTokens,
    /// Current form field values.
    pub form: LoginForm,
    /// Message shown under the form after a failed submit.
    pub error_message: Option<String>,
}

impl LoginController {
    /// Creates the controller and drops any existing session, as the login
    /// screen does on entry.
    pub fn activate(client: &Client) -> Self {
        let tokens = client.internal.tokens().clone();
        tokens.clear();

        Self {
            auth: client.auth(),
            tokens,
            form: LoginForm::default(),
            error_message: None,
        }
    }

    /// Submits the form.
    ///
    /// On success the returned token is stored (not yet MFA-satisfied) and
    /// the user is routed to OTP entry, carrying the provisioning image when
    /// the server handed one out. On any failure the error message is set
    /// and the user stays on the form.
    pub async fn submit(&mut self) -> Option<Route> {
        if let Err(message) = self.form.validate() {
            self.error_message = Some(message);
            return None;
        }

        let request = LoginRequest {
            username: self.form.username.clone(),
            password: self.form.password.clone(),
        };

        match self.auth.login(&request).await {
            Ok(response) if response.success => {
                if let Some(token) = response.access_token {
                    self.tokens.set(token);
                }
                self.error_message = None;
                Some(Route::Otp {
                    otp_qr_code_base64: response.otp_qr_code_base64,
                })
            }
            Ok(response) => {
                self.error_message = Some(
                    response
                        .message
                        .unwrap_or_else(|| "Invalid username or password".to_string()),
                );
                None
            }
            Err(error) => {
                self.error_message =
                    Some(error_message(&error, "An error occurred during login"));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_form_never_reaches_the_network() {
        // Unroutable address: any request would fail loudly.
        let client = Client::new(Some(userhub_core::ClientSettings {
            api_url: "http://127.0.0.1:1".to_string(),
            user_agent: "UserHub Rust-SDK [TEST]".into(),
        }));

        let mut controller = LoginController::activate(&client);
        controller.form.username = "jdoe".into();

        let route = controller.submit().await;
        assert_eq!(route, None);
        assert_eq!(
            controller.error_message.as_deref(),
            Some("Please fill in all required fields")
        );
    }

    #[tokio::test]
    async fn test_activation_clears_existing_session() {
        let client = Client::new(None);
        client.internal.tokens().set("stale-token".to_string());

        let _controller = LoginController::activate(&client);
        assert_eq!(client.internal.tokens().get(), None);
    }
}
