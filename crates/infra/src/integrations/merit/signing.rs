//! Request signing
//!
//! Every call carries `ApiId`, a UTC `timestamp` and a `signature` in the
//! query string. The signature is the base64 HMAC-SHA256 of
//! `api_id ∥ timestamp ∥ body` keyed with the API secret.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::errors::TransportError;

type HmacSha256 = Hmac<Sha256>;

const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Current UTC time as `YYYYMMDDHHMMSS`.
pub fn timestamp_now() -> String {
    format_timestamp(Utc::now())
}

pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Base64 (standard alphabet, padded) HMAC-SHA256 over
/// `api_id ∥ timestamp ∥ body`.
pub fn sign(
    api_id: &str,
    api_secret: &str,
    timestamp: &str,
    body: &[u8],
) -> Result<String, TransportError> {
    let mut mac = HmacSha256::new_from_slice(api_secret.as_bytes())
        .map_err(|err| TransportError::Encode(format!("signing key rejected: {err}")))?;
    mac.update(api_id.as_bytes());
    mac.update(timestamp.as_bytes());
    mac.update(body);
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

/// Percent-encode a signature for the query string (`+`, `/`, `=` escaped).
pub fn encode_signature(signature: &str) -> String {
    urlencoding::encode(signature).into_owned()
}
