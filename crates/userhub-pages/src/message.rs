use userhub_core::ApiError;

/// Display message for a failed gateway call: the server-provided message
/// when present, else the screen's default for that operation.
pub(crate) fn error_message(error: &ApiError, default: &str) -> String {
    error
        .server_message()
        .unwrap_or_else(|| default.to_string())
}
