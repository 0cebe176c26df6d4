//! Error types used throughout the gateway
//!
//! Every failure surfaces as an [`AccountingError`]. Adapter calls wrap the
//! underlying error in [`AccountingError::Provider`] so callers learn which
//! backend operation failed, while [`AccountingError::kind`] looks through that
//! wrapping to expose the sentinel category structurally.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for LedgerBridge
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum AccountingError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported provider: {0}")]
    UnsupportedProvider(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Operation cancelled")]
    Cancelled,

    /// Non-2xx response that did not map onto a sentinel.
    #[error("API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Malformed JSON or base64 in a response.
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Internal error: {0}")]
    Internal(String),

    /// Error raised inside a provider adapter, tagged with the operation.
    #[error("{provider}: {operation}: {source}")]
    Provider { provider: String, operation: String, source: Box<AccountingError> },
}

/// Sentinel category of an [`AccountingError`], independent of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    AuthFailed,
    RateLimit,
    InvalidInput,
    UnsupportedProvider,
    Config,
    Cancelled,
    Api,
    Network,
    Timeout,
    Decode,
    Internal,
}

impl AccountingError {
    /// Wrap `source` with the provider and operation that produced it.
    pub fn in_operation(
        provider: impl Into<String>,
        operation: impl Into<String>,
        source: AccountingError,
    ) -> Self {
        Self::Provider {
            provider: provider.into(),
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// Sentinel category, looking through any provider wrapping.
    pub fn kind(&self) -> ErrorKind {
        match self.root() {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::AuthFailed(_) => ErrorKind::AuthFailed,
            Self::RateLimit(_) => ErrorKind::RateLimit,
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::UnsupportedProvider(_) => ErrorKind::UnsupportedProvider,
            Self::Config(_) => ErrorKind::Config,
            Self::Cancelled => ErrorKind::Cancelled,
            Self::Api { .. } => ErrorKind::Api,
            Self::Network(_) => ErrorKind::Network,
            Self::Timeout(_) => ErrorKind::Timeout,
            Self::Decode(_) => ErrorKind::Decode,
            // root() never returns a Provider variant
            Self::Internal(_) | Self::Provider { .. } => ErrorKind::Internal,
        }
    }

    /// Innermost error once every provider wrapper is peeled off.
    pub fn root(&self) -> &AccountingError {
        let mut current = self;
        while let Self::Provider { source, .. } = current {
            current = source;
        }
        current
    }

    /// Operation name of the outermost provider wrapper, if any.
    pub fn operation(&self) -> Option<&str> {
        match self {
            Self::Provider { operation, .. } => Some(operation),
            _ => None,
        }
    }

    /// Provider name of the outermost provider wrapper, if any.
    pub fn provider(&self) -> Option<&str> {
        match self {
            Self::Provider { provider, .. } => Some(provider),
            _ => None,
        }
    }

    /// HTTP status carried by an unclassified API error.
    pub fn status(&self) -> Option<u16> {
        match self.root() {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    pub fn is_auth_failed(&self) -> bool {
        self.kind() == ErrorKind::AuthFailed
    }

    pub fn is_rate_limit(&self) -> bool {
        self.kind() == ErrorKind::RateLimit
    }

    pub fn is_cancelled(&self) -> bool {
        self.kind() == ErrorKind::Cancelled
    }
}

/// Result type alias for LedgerBridge operations
pub type Result<T> = std::result::Result<T, AccountingError>;
