use std::sync::{Arc, RwLock};

use crate::session::{JwtToken, SessionTokens};

/// The visible session state derived from the stored token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Whether a bearer token is currently held.
    pub is_logged_in: bool,
    /// Whether the held token carries the admin claim.
    pub is_admin: bool,
}

/// Keeps a [`SessionSnapshot`] current for the lifetime of the process.
///
/// The initial state is computed exactly once, from whatever token exists at
/// activation; afterwards the watcher only moves on event-bus emissions.
/// Invariant: logged out implies not admin.
#[derive(Debug, Clone)]
pub struct SessionWatcher {
    state: Arc<RwLock<SessionSnapshot>>,
}

impl SessionWatcher {
    /// Reads the stored token, publishes the initial state, and subscribes
    /// to both bus channels.
    ///
    /// The bus does not buffer, so observers activated after a login missed
    /// the original publish; re-announcing here lets every observer start
    /// from the stored token.
    pub fn activate(tokens: &SessionTokens) -> Self {
        let initial = match tokens.get() {
            Some(token) => {
                let is_admin = token
                    .parse::<JwtToken>()
                    .map(|claims| claims.is_admin)
                    .unwrap_or(false);
                tokens.bus().login.emit(true);
                tokens.bus().admin.emit(is_admin);
                SessionSnapshot {
                    is_logged_in: true,
                    is_admin,
                }
            }
            None => SessionSnapshot::default(),
        };

        let state = Arc::new(RwLock::new(initial));

        {
            let state = state.clone();
            tokens.bus().login.subscribe(move |is_logged_in| {
                let mut snapshot = state.write().expect("RwLock is not poisoned");
                snapshot.is_logged_in = is_logged_in;
                if !is_logged_in {
                    snapshot.is_admin = false;
                }
            });
        }
        {
            let state = state.clone();
            tokens.bus().admin.subscribe(move |is_admin| {
                state.write().expect("RwLock is not poisoned").is_admin = is_admin;
            });
        }

        Self { state }
    }

    /// The current session state.
    pub fn snapshot(&self) -> SessionSnapshot {
        *self.state.read().expect("RwLock is not poisoned")
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use userhub_state::MemorySessionStore;

    use super::*;
    use crate::session::{test_util::make_token, SessionEventBus};

    fn test_tokens() -> SessionTokens {
        SessionTokens::new(
            Arc::new(MemorySessionStore::default()),
            Arc::new(SessionEventBus::default()),
        )
    }

    #[test]
    fn test_initial_state_without_token() {
        let tokens = test_tokens();
        let watcher = SessionWatcher::activate(&tokens);
        assert_eq!(watcher.snapshot(), SessionSnapshot::default());
    }

    #[test]
    fn test_initial_state_from_existing_token() {
        let tokens = test_tokens();
        tokens.set(make_token(true));

        let watcher = SessionWatcher::activate(&tokens);
        assert_eq!(
            watcher.snapshot(),
            SessionSnapshot {
                is_logged_in: true,
                is_admin: true,
            }
        );
    }

    #[test]
    fn test_snapshot_follows_set_and_clear_sequences() {
        let tokens = test_tokens();
        let watcher = SessionWatcher::activate(&tokens);

        tokens.set(make_token(false));
        assert_eq!(
            watcher.snapshot(),
            SessionSnapshot {
                is_logged_in: true,
                is_admin: false,
            }
        );

        tokens.set(make_token(true));
        assert_eq!(
            watcher.snapshot(),
            SessionSnapshot {
                is_logged_in: true,
                is_admin: true,
            }
        );

        tokens.clear();
        assert_eq!(watcher.snapshot(), SessionSnapshot::default());

        tokens.set(make_token(true));
        tokens.clear();
        tokens.set(make_token(false));
        assert_eq!(
            watcher.snapshot(),
            SessionSnapshot {
                is_logged_in: true,
                is_admin: false,
            }
        );
    }

    #[test]
    fn test_activation_reannounces_to_earlier_subscribers() {
        use std::sync::Mutex;

        let tokens = test_tokens();
        tokens.set(make_token(true));

        let seen = Arc::new(Mutex::new(Vec::new()));
        {
            let seen = seen.clone();
            tokens.bus().admin.subscribe(move |value| {
                seen.lock().expect("Mutex is not poisoned").push(value);
            });
        }

        let _watcher = SessionWatcher::activate(&tokens);
        assert_eq!(*seen.lock().expect("Mutex is not poisoned"), vec![true]);
    }
}
