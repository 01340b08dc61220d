use tracing::debug;

use crate::AuthClient;

impl AuthClient {
    /// Fire-and-forget server-side logout.
    ///
    /// The network outcome is intentionally ignored: the caller clears the
    /// local session regardless, so logout always locally succeeds.
    pub async fn logout(&self) {
        let config = self.client.internal.get_api_configuration();

        let result = config
            .client
            .post(format!("{}/auth/logout", config.base_path))
            .send()
            .await;

        if let Err(e) = result {
            debug!("logout request failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use userhub_core::{Client, ClientSettings};
    use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

    use crate::AuthClientExt;

    fn make_client(server_uri: String) -> Client {
        Client::new(Some(ClientSettings {
            api_url: server_uri,
            user_agent: "UserHub Rust-SDK [TEST]".into(),
        }))
    }

    #[tokio::test]
    async fn test_logout_posts_and_ignores_response() {
        let server = MockServer::start().await;
        Mock::given(matchers::method("POST"))
            .and(matchers::path("/auth/logout"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        // a failing response must not surface
        make_client(server.uri()).auth().logout().await;
    }

    #[tokio::test]
    async fn test_logout_swallows_connection_errors() {
        // Unroutable address: the request cannot be delivered.
        make_client("http://127.0.0.1:1".to_string())
            .auth()
            .logout()
            .await;
    }
}
