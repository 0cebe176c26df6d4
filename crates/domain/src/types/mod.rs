//! Provider-neutral domain types
//!
//! Entities are immutable value records produced by an adapter from a decoded
//! backend response. Inputs are what callers hand to the services.

pub mod batch;
pub mod catalog;
pub mod inputs;
pub mod invoice;
pub mod party;
pub mod payment;
pub mod purchase;
pub mod report;

pub use batch::{BatchResult, BatchSummary};
pub use catalog::{Account, Item, ItemType, Tax};
pub use inputs::*;
pub use invoice::{Invoice, InvoiceLine, InvoicePayment, InvoicePdf, InvoiceStatus};
pub use party::{normalize_email, Customer, Vendor};
pub use payment::{Payment, PaymentDirection, PaymentInvoiceLink};
pub use purchase::PurchaseInvoice;
pub use report::{
    AccountClass, CustomerDebt, FinancialReport, FinancialReportDetail, FinancialReportRow,
    ReportRowKind,
};
