//! Utility functions for API operations.

use serde::de::DeserializeOwned;

use crate::{Error, ResponseContent};

/// Marker used for endpoints that require authentication.
/// It will be included in the request's extensions to signal to the
/// middleware that authentication is required.
#[derive(Debug, Clone, Copy)]
pub enum AuthRequired {
    /// Bearer token authentication.
    Bearer,
}

/// Sends `builder` and parses the response body as JSON.
///
/// Non-2xx responses are returned as [`Error::ResponseError`] carrying the
/// raw body, so callers can surface the server-provided message.
pub async fn send_json_request<R: DeserializeOwned>(
    builder: reqwest_middleware::RequestBuilder,
) -> Result<R, Error> {
    let response = builder
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let content = response.text().await?;
        return Err(Error::ResponseError(ResponseContent { status, content }));
    }

    Ok(response.json::<R>().await?)
}
