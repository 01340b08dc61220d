//! Error types for API operations.

/// An HTTP error response returned by the server.
#[derive(Debug)]
pub struct ResponseContent {
    /// HTTP status code of the response.
    pub status: reqwest::StatusCode,
    /// Raw response body content.
    pub content: String,
}

/// An error returned by the API client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error from the underlying HTTP client.
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    /// Error from the HTTP middleware stack.
    #[error(transparent)]
    ReqwestMiddleware(#[from] reqwest_middleware::Error),

    /// A serialization or deserialization error.
    #[error(transparent)]
    Serde(#[from] serde_json::Error),

    /// An IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Server returned an HTTP error response.
    #[error("API error {}: {}", .0.status, .0.content)]
    ResponseError(ResponseContent),
}
