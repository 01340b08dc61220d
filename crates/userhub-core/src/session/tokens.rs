use std::sync::Arc;

use tracing::{debug, warn};
use userhub_state::SessionStore;

use crate::session::{JwtToken, SessionEventBus};

/// Storage key for the bearer token. One slot per store: a new token
/// overwrites the previous one.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// The token store.
///
/// Owns the persisted bearer token and publishes every change to the
/// [`SessionEventBus`], so observers never read the store directly. Cheap to
/// clone; clones share the same store and bus.
#[derive(Clone)]
pub struct SessionTokens {
    store: Arc<dyn SessionStore>,
    bus: Arc<SessionEventBus>,
}

impl SessionTokens {
    pub(crate) fn new(store: Arc<dyn SessionStore>, bus: Arc<SessionEventBus>) -> Self {
        Self { store, bus }
    }

    /// The bus this store publishes to.
    pub fn bus(&self) -> &Arc<SessionEventBus> {
        &self.bus
    }

    /// Persists `token` and publishes the resulting session state.
    ///
    /// A token whose claims fail to decode is still stored and still counts
    /// as logged in; only the admin flag falls back to `false`.
    pub fn set(&self, token: String) {
        self.store.set(ACCESS_TOKEN_KEY, token.clone());

        let is_admin = match token.parse::<JwtToken>() {
            Ok(claims) => {
                debug!(sub = claims.sub, expires_at = ?claims.expires_at(), "storing access token");
                claims.is_admin
            }
            Err(e) => {
                warn!("failed to decode access token claims: {e}");
                false
            }
        };

        self.bus.login.emit(true);
        self.bus.admin.emit(is_admin);
    }

    /// Pure read of the persisted token.
    pub fn get(&self) -> Option<String> {
        self.store.get(ACCESS_TOKEN_KEY)
    }

    /// Removes the persisted token and publishes the logged-out state.
    pub fn clear(&self) {
        self.store.remove(ACCESS_TOKEN_KEY);
        self.bus.login.emit(false);
        self.bus.admin.emit(false);
    }

    /// The `Authorization` header value for API requests.
    ///
    /// With no token present this is the literal `Bearer ` with an empty
    /// token. The server already receives exactly that from existing
    /// clients, so the shape is kept rather than omitting the header.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.get().unwrap_or_default())
    }
}

impl std::fmt::Debug for SessionTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionTokens")
            .field("token_present", &self.get().is_some())
            .finish_non_exhaustive()
    }
}
