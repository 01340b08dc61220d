use std::sync::Arc;

use crate::session::SessionTokens;

/// Shared state behind [`Client`](crate::Client). All sub-clients hold a
/// clone of the same instance.
pub struct InternalClient {
    tokens: SessionTokens,
    api_config: Arc<userhub_api::Configuration>,

    /// Reqwest client useable for external integrations that must not carry
    /// the session bearer token.
    #[allow(unused)]
    external_http_client: reqwest::Client,
}

impl std::fmt::Debug for InternalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InternalClient")
            .field("tokens", &self.tokens)
            .field("base_path", &self.api_config.base_path)
            .finish_non_exhaustive()
    }
}

impl InternalClient {
    pub(crate) fn new(
        tokens: SessionTokens,
        api_config: userhub_api::Configuration,
        external_http_client: reqwest::Client,
    ) -> Self {
        Self {
            tokens,
            api_config: Arc::new(api_config),
            external_http_client,
        }
    }

    /// Handle to the session token store.
    pub fn tokens(&self) -> &SessionTokens {
        &self.tokens
    }

    /// Configuration for API requests. The bearer token is attached by
    /// middleware reading the live token store, so the configuration never
    /// changes after construction.
    pub fn get_api_configuration(&self) -> &Arc<userhub_api::Configuration> {
        &self.api_config
    }

    #[allow(missing_docs)]
    pub fn get_http_client(&self) -> &reqwest::Client {
        &self.external_http_client
    }
}
