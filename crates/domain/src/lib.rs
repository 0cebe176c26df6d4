//! # LedgerBridge Domain
//!
//! Provider-neutral accounting types for LedgerBridge.
//!
//! This crate contains:
//! - Neutral entities and input shapes (invoices, customers, payments, ...)
//! - The error taxonomy and Result definition
//! - Gateway configuration
//! - The payment reference checksum
//!
//! ## Architecture
//! - No dependencies on other LedgerBridge crates
//! - No I/O, no backend wire shapes

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::reference::{generate_reference, validate_reference};
