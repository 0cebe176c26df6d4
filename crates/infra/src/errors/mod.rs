//! Infrastructure error types

pub mod conversions;

use thiserror::Error;

/// Failure of one signed HTTP exchange.
///
/// Carries what happened on the wire and nothing more; mapping status codes
/// onto domain sentinels is the job of each provider adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The backend answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    /// The request payload could not be serialised.
    #[error("failed to encode request: {0}")]
    Encode(String),

    /// The 2xx response body was not the expected JSON.
    #[error("failed to decode response: {0}")]
    Decode(String),
}
