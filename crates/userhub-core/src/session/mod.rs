//! Client-side session state.
//!
//! The token store owns the persisted bearer token; every change is
//! published on the [`SessionEventBus`], and the [`SessionWatcher`] keeps a
//! derived [`SessionSnapshot`] current for observers such as the navigation
//! bar.

mod event_bus;
mod jwt_token;
mod middleware;
mod tokens;
mod watcher;

pub use event_bus::{SessionChannel, SessionEventBus};
pub use jwt_token::{JwtToken, JwtTokenParseError};
pub use middleware::SessionTokenMiddleware;
pub use tokens::{SessionTokens, ACCESS_TOKEN_KEY};
pub use watcher::{SessionSnapshot, SessionWatcher};

#[cfg(test)]
pub(crate) mod test_util {
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

    /// Builds an unsigned JWT carrying the given payload claims.
    pub(crate) fn make_jwt(payload: serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("{header}.{payload}.c2lnbmF0dXJl")
    }

    /// A token for user id 1 with the given admin claim.
    pub(crate) fn make_token(is_admin: bool) -> String {
        make_jwt(serde_json::json!({
            "exp": 4_102_444_800_i64,
            "username": "jdoe",
            "sub": 1,
            "is_admin": is_admin,
            "otp_expires": 4_102_444_800_i64,
        }))
    }
}
