use userhub_auth::{api::request::RegisterUserRequest, AuthClient, AuthClientExt};
use userhub_core::Client;

use crate::{
    message::error_message,
    rules::{at_least, at_most, email, min_length, required},
    Route,
};

/// Field values of the registration form.
#[derive(Debug, Default, Clone)]
pub struct RegisterForm {
    /// Login name of the new account.
    pub username: String,
    /// Initial password.
    pub password: String,
    /// Password confirmation.
    pub password_confirm: String,
    /// Contact email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Age in years; `None` while the field is blank.
    pub age: Option<i64>,
    /// Whether the new account gets the admin role.
    pub is_admin: bool,
}

impl RegisterForm {
    /// First failing message wins: required, then length/range, then
    /// format, fields in declaration order. The cross-field password match
    /// runs only once every field passes.
    fn validate(&self) -> Result<(), String> {
        required(&self.username, "Username is required")?;
        min_length(&self.username, 3, "Username must be at least 3 characters")?;
        required(&self.password, "Password is required")?;
        min_length(&self.password, 6, "Password must be at least 6 characters")?;
        required(&self.password_confirm, "Password confirmation is required")?;
        required(&self.email, "Email is required")?;
        email(&self.email, "Please enter a valid email address")?;
        required(&self.name, "Name is required")?;
        min_length(&self.name, 2, "Name must be at least 2 characters")?;

        let age = self.age.ok_or_else(|| "Age is required".to_string())?;
        at_least(age, 1, "Age must be at least 1")?;
        at_most(age, 150, "Age must be at most 150")?;

        if self.password != self.password_confirm {
            return Err("Passwords do not match".to_string());
        }

        Ok(())
    }
}

/// State behind the registration screen.
pub struct RegisterController {
    auth: AuthClient,
    /// Current form field values.
    pub form: RegisterForm,
    /// Message shown under the form after a failed submit.
    pub error_message: Option<String>,
}

impl RegisterController {
    /// Creates the controller with a blank form.
    pub fn activate(client: &Client) -> Self {
        Self {
            auth: client.auth(),
            form: RegisterForm::default(),
            error_message: None,
        }
    }

    /// Submits the form. A validation failure — including mismatched
    /// passwords — never reaches the network. Success routes to the user
    /// list.
    pub async fn submit(&mut self) -> Option<Route> {
        if let Err(message) = self.form.validate() {
            self.error_message = Some(message);
            return None;
        }

        let request = RegisterUserRequest {
            username: self.form.username.clone(),
            password: self.form.password.clone(),
            password_confirm: self.form.password_confirm.clone(),
            email: self.form.email.clone(),
            name: self.form.name.clone(),
            age: self.form.age.unwrap_or_default(),
            is_admin: self.form.is_admin,
        };

        match self.auth.register_user(&request).await {
            Ok(_) => {
                self.error_message = None;
                Some(Route::Users)
            }
            Err(error) => {
                self.error_message = Some(error_message(
                    &error,
                    "An error occurred during registration",
                ));
                None
            }
        }
    }
}
