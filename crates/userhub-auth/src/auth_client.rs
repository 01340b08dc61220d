use userhub_core::Client;

/// Sub-client containing auth functionality.
#[derive(Clone)]
pub struct AuthClient {
    pub(crate) client: Client,
}

impl AuthClient {
    /// Constructs a new `AuthClient` with the given `Client`.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

/// Extension trait for `Client` to provide access to the `AuthClient`.
pub trait AuthClientExt {
    /// Creates a new `AuthClient` instance.
    fn auth(&self) -> AuthClient;
}

impl AuthClientExt for Client {
    fn auth(&self) -> AuthClient {
        AuthClient {
            client: self.clone(),
        }
    }
}
