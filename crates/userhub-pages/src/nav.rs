use userhub_auth::{AuthClient, AuthClientExt};
use userhub_core::{
    session::{SessionTokens, SessionWatcher},
    Client,
};

use crate::Route;

/// State behind the navigation bar.
///
/// The visible flags come from a [`SessionWatcher`]: read once from the
/// stored token at activation, then driven only by event-bus emissions.
pub struct NavController {
    auth: AuthClient,
    tokens: SessionTokens,
    watcher: SessionWatcher,
}

impl NavController {
    /// Initializes the visible session state from whatever token currently
    /// exists and subscribes to stay current.
    pub fn activate(client: &Client) -> Self {
        let tokens = client.internal.tokens().clone();
        let watcher = SessionWatcher::activate(&tokens);

        Self {
            auth: client.auth(),
            tokens,
            watcher,
        }
    }

    /// Whether a session is currently visible.
    pub fn is_logged_in(&self) -> bool {
        self.watcher.snapshot().is_logged_in
    }

    /// Whether the visible session carries the admin role.
    pub fn is_admin(&self) -> bool {
        self.watcher.snapshot().is_admin
    }

    /// Asks the server to end the session, then clears it locally and
    /// routes to login regardless of the network outcome.
    pub async fn logout(&self) -> Route {
        self.auth.logout().await;
        self.tokens.clear();
        Route::Login
    }
}
