use userhub_api::Configuration;

/// Helper for testing the UserHub API using wiremock.
///
/// Warning: when using `Mock::expect` ensure `server` is not dropped before the test completes.
pub async fn start_api_mock(mocks: Vec<wiremock::Mock>) -> (wiremock::MockServer, Configuration) {
    // Ensure a process-level crypto provider is installed so the plain reqwest
    // client below can build its rustls config (production code installs this
    // via `with_platform_verifier`).
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let server = wiremock::MockServer::start().await;

    for mock in mocks {
        server.register(mock).await;
    }

    let config = Configuration {
        base_path: server.uri(),
        user_agent: Some("test-agent".to_string()),
        client: reqwest_middleware::ClientBuilder::new(reqwest::Client::new()).build(),
    };

    (server, config)
}
