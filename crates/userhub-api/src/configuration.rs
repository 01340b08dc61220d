//! Configuration types for API clients.

/// Configuration for an API client.
///
/// This struct provides all the configuration options needed for making
/// authenticated HTTP requests to the UserHub API.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// Base URL path for the API (e.g., "<https://api.userhub.dev>").
    pub base_path: String,
    /// HTTP client with middleware support.
    pub client: reqwest_middleware::ClientWithMiddleware,
    /// User-Agent header value to be sent with requests.
    pub user_agent: Option<String>,
}
