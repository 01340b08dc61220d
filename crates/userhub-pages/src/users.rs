use tracing::warn;
use userhub_core::Client;
use userhub_users::{api::User, UsersClient, UsersClientExt};

/// State behind the user administration list.
pub struct UsersController {
    users_client: UsersClient,
    /// Records fetched from the directory; pruned locally after confirmed
    /// deletes.
    pub users: Vec<User>,
    /// Message shown when a directory call fails with a server-provided
    /// reason.
    pub error_message: Option<String>,
}

impl UsersController {
    /// Creates the controller and loads the directory, as the screen does
    /// on entry.
    pub async fn activate(client: &Client) -> Self {
        let mut controller = Self {
            users_client: client.users(),
            users: Vec::new(),
            error_message: None,
        };
        controller.load_users().await;
        controller
    }

    /// Fetches the directory listing into the local cache.
    pub async fn load_users(&mut self) {
        match self.users_client.list().await {
            Ok(response) => {
                self.users = response.users;
                self.error_message = None;
            }
            Err(error) => {
                warn!("failed to load users: {error}");
                self.error_message = error.server_message();
            }
        }
    }

    /// Deletes `id` remotely, then drops it from the local cache once the
    /// server confirms. There is no rollback; an unconfirmed delete leaves
    /// the cache untouched.
    pub async fn remove_user(&mut self, id: i64) {
        match self.users_client.delete(id).await {
            Ok(_) => {
                self.users.retain(|user| user.id != id);
            }
            Err(error) => {
                warn!(id, "failed to remove user: {error}");
                self.error_message = error.server_message();
            }
        }
    }
}
