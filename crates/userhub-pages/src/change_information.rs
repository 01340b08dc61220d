use userhub_core::Client;
use userhub_users::{api::UpdateUserRequest, UsersClient, UsersClientExt};

use crate::{
    message::error_message,
    rules::{between, email, min_length, required},
    Route,
};

/// Field values of the change-information form.
#[derive(Debug, Default, Clone)]
pub struct ChangeInformationForm {
    /// New display name.
    pub name: String,
    /// New age in years; `None` while the field is blank.
    pub age: Option<i64>,
    /// New contact email.
    pub email: String,
}

impl ChangeInformationForm {
    fn validate(&self) -> Result<(), String> {
        required(&self.name, "Name is required")?;
        min_length(&self.name, 2, "Name must be at least 2 characters")?;

        let age = self.age.ok_or_else(|| "Age is required".to_string())?;
        between(age, 1, 150, "Age must be between 1 and 150")?;

        required(&self.email, "Email is required")?;
        email(&self.email, "Please enter a valid email address")?;
        Ok(())
    }

    /// Builds the partial update body: blank fields are dropped so they are
    /// never sent as empty-string overwrites.
    fn to_update_request(&self) -> UpdateUserRequest {
        UpdateUserRequest {
            name: (!self.name.is_empty()).then(|| self.name.clone()),
            age: self.age,
            email: (!self.email.is_empty()).then(|| self.email.clone()),
        }
    }
}

/// State behind the change-information screen.
pub struct ChangeInformationController {
    users: UsersClient,
    /// Current form field values.
    pub form: ChangeInformationForm,
    /// Message shown under the form after a failed submit.
    pub error_message: Option<String>,
}

impl ChangeInformationController {
    /// Creates the controller with a blank form.
    pub fn activate(client: &Client) -> Self {
        Self {
            users: client.users(),
            form: ChangeInformationForm::default(),
            error_message: None,
        }
    }

    /// Submits the form. Success routes home.
    pub async fn submit(&mut self) -> Option<Route> {
        if let Err(message) = self.form.validate() {
            self.error_message = Some(message);
            return None;
        }

        match self.users.update(&self.form.to_update_request()).await {
            Ok(response) if response.success => {
                self.error_message = None;
                Some(Route::Home)
            }
            Ok(response) => {
                self.error_message = Some(
                    response
                        .message
                        .unwrap_or_else(|| "Update failed".to_string()),
                );
                None
            }
            Err(error) => {
                self.error_message = Some(error_message(
                    &error,
                    "An error occurred while updating information",
                ));
                None
            }
        }
    }
}
