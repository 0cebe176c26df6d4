//! # LedgerBridge Infrastructure
//!
//! Adapters behind the `ledgerbridge-core` ports.
//!
//! This crate contains:
//! - The signed HTTP transport and the Merit Aktiva provider
//! - Configuration loading (environment, `.env`, JSON and TOML files)
//! - The [`AccountingClient`] facade
//!
//! ## Architecture
//! - Implements traits defined in `ledgerbridge-core`
//! - Owns every wire format; nothing above this crate sees JSON field names
//! - Contains all "impure" code (network and file I/O)

pub mod client;
pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;

// Re-export commonly used items
pub use client::AccountingClient;
pub use errors::TransportError;
pub use http::{HttpClient, HttpClientBuilder};
pub use integrations::merit::MeritProvider;
