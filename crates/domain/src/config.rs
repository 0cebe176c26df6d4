//! Gateway configuration
//!
//! Supplied by the configuration loader (or built by hand) and handed to the
//! client facade at construction. Nothing here is process-global.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PROVIDER, DEFAULT_REGION, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::errors::{AccountingError, Result};

/// Connection settings for one accounting backend.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Provider name, e.g. `"merit"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// API identifier issued by the backend.
    pub api_id: String,
    /// API secret used as the HMAC key.
    pub api_secret: String,
    /// Regional endpoint selector (`"ee"`, `"pl"`, ...).
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    /// Explicit base URL; takes precedence over `region` when set.
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_provider() -> String {
    DEFAULT_PROVIDER.to_string()
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl GatewayConfig {
    /// Configuration for the default provider and region.
    pub fn new(api_id: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            provider: default_provider(),
            api_id: api_id.into(),
            api_secret: api_secret.into(),
            region: default_region(),
            request_timeout_secs: default_timeout(),
            base_url: None,
        }
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Reject configurations that could never authenticate.
    pub fn validate(&self) -> Result<()> {
        if self.api_id.trim().is_empty() {
            return Err(AccountingError::Config("api_id must not be empty".into()));
        }
        if self.api_secret.is_empty() {
            return Err(AccountingError::Config("api_secret must not be empty".into()));
        }
        if self.request_timeout_secs == 0 {
            return Err(AccountingError::Config(
                "request_timeout_secs must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

// The secret must never end up in logs.
impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("provider", &self.provider)
            .field("api_id", &self.api_id)
            .field("api_secret", &"<redacted>")
            .field("region", &self.region)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("base_url", &self.base_url)
            .finish()
    }
}
