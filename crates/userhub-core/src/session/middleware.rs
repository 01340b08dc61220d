use userhub_api::AuthRequired;

use crate::session::SessionTokens;

/// Middleware that attaches the stored bearer token to requests flagged
/// with [`AuthRequired`].
///
/// The token is read from the store at send time, so a login or logout
/// between two requests is always reflected without rebuilding the client.
#[derive(Clone)]
pub struct SessionTokenMiddleware {
    tokens: SessionTokens,
}

impl SessionTokenMiddleware {
    /// Creates a middleware reading from `tokens`.
    pub fn new(tokens: SessionTokens) -> Self {
        Self { tokens }
    }
}

#[async_trait::async_trait]
impl reqwest_middleware::Middleware for SessionTokenMiddleware {
    async fn handle(
        &self,
        mut req: reqwest::Request,
        ext: &mut http::Extensions,
        next: reqwest_middleware::Next<'_>,
    ) -> Result<reqwest::Response, reqwest_middleware::Error> {
        if ext.get::<AuthRequired>().is_some() {
            match self.tokens.auth_header().parse() {
                Ok(header_value) => {
                    req.headers_mut()
                        .insert(http::header::AUTHORIZATION, header_value);
                }
                Err(e) => {
                    tracing::warn!("Failed to parse auth token for header: {e}");
                }
            }
        }

        next.run(req, ext).await
    }
}
