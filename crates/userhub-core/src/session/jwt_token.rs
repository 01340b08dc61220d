use std::str::FromStr;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// The claims carried by the bearer token issued by the server.
///
/// The client decodes the payload segment without verifying the signature;
/// verification is the server's job. Claims only gate what the UI shows.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtToken {
    /// Expiration time, unix seconds.
    pub exp: i64,
    /// User id of the token's subject.
    pub sub: i64,
    /// Username of the token's subject.
    pub username: Option<String>,
    /// Whether the subject has the admin role. Absent means `false`.
    #[serde(default)]
    pub is_admin: bool,
    /// Deadline before which the OTP step must complete, unix seconds.
    pub otp_expires: Option<i64>,
}

impl JwtToken {
    /// Expiration time of the token, when `exp` is a representable instant.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.exp, 0)
    }
}

/// Parsing a bearer token failed before any claims could be read.
#[allow(missing_docs)]
#[derive(Debug, thiserror::Error)]
pub enum JwtTokenParseError {
    #[error("JWT must have 3 parts")]
    InvalidParts,
    #[error(transparent)]
    Decode(#[from] base64::DecodeError),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

impl FromStr for JwtToken {
    type Err = JwtTokenParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(JwtTokenParseError::InvalidParts);
        }

        let decoded = URL_SAFE_NO_PAD.decode(parts[1])?;
        Ok(serde_json::from_slice(&decoded)?)
    }
}
