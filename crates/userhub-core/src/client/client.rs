use std::sync::Arc;

use reqwest::header::{self, HeaderValue};
use userhub_state::{MemorySessionStore, SessionStore};

use crate::{
    client::{client_settings::ClientSettings, internal::InternalClient},
    session::{SessionEventBus, SessionTokenMiddleware, SessionTokens},
};

/// The main struct to interact with the UserHub SDK.
#[derive(Debug, Clone)]
pub struct Client {
    // Important: The [`Client`] struct requires its `Clone` implementation to return an owned
    // reference to the same instance, so sub-clients stay cheap to hand out. For this to happen,
    // any mutable state needs to be behind an Arc, as part of the existing [`InternalClient`]
    // struct.
    #[doc(hidden)]
    pub internal: Arc<InternalClient>,
}

impl Client {
    /// Create a new UserHub client with an in-memory session store and a
    /// fresh event bus.
    pub fn new(settings: Option<ClientSettings>) -> Self {
        Self::new_with_session(
            settings,
            Arc::new(MemorySessionStore::default()),
            Arc::new(SessionEventBus::default()),
        )
    }

    /// Create a new UserHub client over an application-provided session
    /// store and event bus, so the embedding application controls where the
    /// token lives and who observes session changes.
    pub fn new_with_session(
        settings_input: Option<ClientSettings>,
        store: Arc<dyn SessionStore>,
        bus: Arc<SessionEventBus>,
    ) -> Self {
        let settings = settings_input.unwrap_or_default();
        let tokens = SessionTokens::new(store, bus);

        let external_http_client = new_http_client_builder()
            .build()
            .expect("External HTTP Client build should not fail");

        let headers = build_default_headers(&settings);

        let http_client = new_http_client_builder()
            .default_headers(headers)
            .build()
            .expect("HTTP Client build should not fail");

        let http_client = reqwest_middleware::ClientBuilder::new(http_client)
            .with(SessionTokenMiddleware::new(tokens.clone()))
            .build();

        let api_config = userhub_api::Configuration {
            base_path: settings.api_url,
            user_agent: Some(settings.user_agent),
            client: http_client,
        };

        Self {
            internal: Arc::new(InternalClient::new(
                tokens,
                api_config,
                external_http_client,
            )),
        }
    }
}

fn new_http_client_builder() -> reqwest::ClientBuilder {
    use rustls::ClientConfig;
    use rustls_platform_verifier::ConfigVerifierExt;

    #[allow(unused_mut)]
    let mut client_builder = reqwest::Client::builder().use_preconfigured_tls(
        ClientConfig::with_platform_verifier().expect("Failed to create platform verifier"),
    );

    // Enforce HTTPS for all requests in non-debug builds
    #[cfg(not(debug_assertions))]
    {
        client_builder = client_builder.https_only(true);
    }

    client_builder
}

/// Build default headers for the UserHub HttpClient
fn build_default_headers(settings: &ClientSettings) -> header::HeaderMap {
    let mut headers = header::HeaderMap::new();

    headers.append(
        reqwest::header::USER_AGENT,
        HeaderValue::from_str(&settings.user_agent)
            .expect("User agent should be a valid header value"),
    );

    headers
}
