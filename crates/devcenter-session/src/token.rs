//! JWT payload decoding.
//!
//! Tokens are decoded for display only. The signature is never checked, so
//! nothing read here may be used for an authorization decision.

use base64::Engine;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default tolerance subtracted from `now` when checking `exp`.
pub const DEFAULT_CLOCK_SKEW_SECS: i64 = 2;

/// Error returned when a token payload cannot be decoded.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token has no payload segment")]
    MissingPayload,

    #[error("payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Claims read from the token payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Username.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usr: Option<String>,
    /// Expiry, seconds since the Unix epoch. May be fractional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<f64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Decode the payload segment of `token` without verifying it.
///
/// The segment may use the URL-safe or standard alphabet, with or without
/// padding.
pub fn decode_payload(token: &str) -> Result<Claims, TokenError> {
    let segment = token
        .split('.')
        .nth(1)
        .map(|s| s.trim_end_matches('='))
        .filter(|s| !s.is_empty())
        .ok_or(TokenError::MissingPayload)?;

    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .or_else(|_| STANDARD_NO_PAD.decode(segment))?;

    Ok(serde_json::from_slice(&bytes)?)
}

/// Whether `claims` are expired at `now`.
///
/// Expired when `exp < now - skew_secs`. Claims without `exp` are expired.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn is_token_expired(claims: &Claims, now: DateTime<Utc>, skew_secs: i64) -> bool {
    let threshold = (now.timestamp_millis() - skew_secs * 1000) as f64 / 1000.0;
    claims.exp.is_none_or(|exp| exp < threshold)
}
