//! # LedgerBridge Core
//!
//! Provider-neutral business layer - no HTTP, no wire formats.
//!
//! This crate contains:
//! - The [`AccountingProvider`] port that backend adapters implement
//! - One service per resource family
//! - Bounded batch invoice creation and cancellation helpers
//!
//! ## Architecture Principles
//! - Depends only on `ledgerbridge-domain` and `ledgerbridge-common`
//! - All backend access goes through the port trait

pub mod cancellation;
pub mod provider_ports;
pub mod services;

pub use cancellation::run_cancellable;
pub use provider_ports::AccountingProvider;
pub use services::{
    CustomerService, InvoiceService, ItemService, PaymentService, PurchaseService,
    ReportService, SyncService, TaxService, VendorService,
};
