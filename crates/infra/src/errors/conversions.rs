//! Conversions from external library errors into [`TransportError`].

use reqwest::Error as HttpError;

use super::TransportError;

/* -------------------------------------------------------------------------- */
/* reqwest::Error → TransportError */
/* -------------------------------------------------------------------------- */

impl From<HttpError> for TransportError {
    fn from(err: HttpError) -> Self {
        if err.is_timeout() {
            return TransportError::Timeout;
        }
        if err.is_decode() {
            return TransportError::Decode(err.to_string());
        }
        if let Some(status) = err.status() {
            return TransportError::Status { status: status.as_u16(), body: err.to_string() };
        }
        if err.is_builder() {
            return TransportError::Encode(err.to_string());
        }
        TransportError::Network(err.to_string())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → TransportError */
/* -------------------------------------------------------------------------- */

/// Classify a serde_json failure on the outbound side.
pub fn encode_error(err: serde_json::Error) -> TransportError {
    TransportError::Encode(err.to_string())
}

/// Classify a serde_json failure on the inbound side.
pub fn decode_error(err: serde_json::Error) -> TransportError {
    TransportError::Decode(err.to_string())
}
