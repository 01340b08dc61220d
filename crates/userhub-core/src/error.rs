//! Errors that can occur when using this SDK

use reqwest::StatusCode;
use thiserror::Error;
use userhub_api::Error as BaseApiError;

/// Errors from performing network requests.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    ReqwestMiddleware(#[from] reqwest_middleware::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Received error message from server: [{}] {}", .status, .message)]
    ResponseContent { status: StatusCode, message: String },
}

impl From<BaseApiError> for ApiError {
    fn from(e: BaseApiError) -> Self {
        match e {
            BaseApiError::Reqwest(e) => Self::Reqwest(e),
            BaseApiError::ReqwestMiddleware(e) => Self::ReqwestMiddleware(e),
            BaseApiError::ResponseError(e) => Self::ResponseContent {
                status: e.status,
                message: e.content,
            },
            BaseApiError::Serde(e) => Self::Serde(e),
            BaseApiError::Io(e) => Self::Io(e),
        }
    }
}

impl ApiError {
    /// The `message` field of a JSON error body, when the server provided
    /// one. Transport errors and bodies without a `message` yield `None`,
    /// and callers fall back to a per-operation default.
    pub fn server_message(&self) -> Option<String> {
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            message: Option<String>,
        }

        match self {
            ApiError::ResponseContent { message, .. } => {
                serde_json::from_str::<ErrorBody>(message)
                    .ok()
                    .and_then(|body| body.message)
            }
            _ => None,
        }
    }
}

/// Missing required field.
#[derive(Debug, Error)]
#[error("The response received was missing a required field: {0}")]
pub struct MissingFieldError(pub &'static str);

/// This macro is used to require that a value is present or return an error otherwise.
/// It is equivalent to using `val.ok_or(Error::MissingFields)?`, but easier to use and
/// with a more descriptive error message.
/// Note that this macro will return early from the function if the value is not present.
#[macro_export]
macro_rules! require {
    ($val:expr) => {
        match $val {
            Some(val) => val,
            None => return Err($crate::MissingFieldError(stringify!($val)).into()),
        }
    };
}
