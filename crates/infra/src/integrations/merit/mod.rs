//! Merit Aktiva integration
//!
//! # Layers
//!
//! - **signing**: HMAC-SHA256 request signatures and UTC timestamps
//! - **transport**: `MeritTransport`, one signed POST per call, no retries
//! - **wire**: the JSON shapes Merit speaks, field names verbatim
//! - **mapping**: wire shapes ↔ neutral domain entities, code tables, dates
//! - **errors**: HTTP status → domain sentinel classification
//! - **adapter**: `MeritProvider`, the [`AccountingProvider`] implementation
//!
//! # Regions
//!
//! Estonia (`https://aktiva.merit.ee/api/`) is the default; `"pl"` or
//! `"poland"` selects `https://program.360ksiegowosc.pl/api/`. An explicit
//! base URL overrides both.
//!
//! [`AccountingProvider`]: ledgerbridge_core::AccountingProvider

pub mod adapter;
pub mod errors;
pub mod mapping;
pub mod region;
pub mod signing;
pub mod transport;
pub mod wire;

pub use adapter::MeritProvider;
pub use region::{base_url_for, resolve_base_url};
pub use transport::MeritTransport;
