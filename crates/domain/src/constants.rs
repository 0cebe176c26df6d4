//! Gateway constants
//!
//! Centralized location for domain-level constants shared by the services and
//! the provider adapters.

// Provider selection
pub const PROVIDER_MERIT: &str = "merit";
pub const DEFAULT_PROVIDER: &str = PROVIDER_MERIT;

// Regions
pub const DEFAULT_REGION: &str = "ee";

// Batch invoice creation: maximum create calls in flight at once
pub const BATCH_CONCURRENCY: usize = 5;

// HTTP
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
