use tracing::warn;
use userhub_auth::{api::response::UserProfile, AuthClient, AuthClientExt};
use userhub_core::Client;

/// State behind the landing screen: the signed-in user's profile.
pub struct HomeController {
    auth: AuthClient,
    /// The signed-in user, once fetched.
    pub user: Option<UserProfile>,
}

impl HomeController {
    /// Creates the controller and fetches the current user, as the screen
    /// does on entry.
    pub async fn activate(client: &Client) -> Self {
        let mut controller = Self {
            auth: client.auth(),
            user: None,
        };
        controller.get_current_user().await;
        controller
    }

    /// Fetches the signed-in user's profile for display.
    pub async fn get_current_user(&mut self) {
        match self.auth.current_user().await {
            Ok(response) => self.user = response.user,
            Err(error) => {
                warn!("failed to fetch current user: {error}");
            }
        }
    }
}
