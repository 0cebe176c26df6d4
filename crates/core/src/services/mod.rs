//! Domain services, one per resource family
//!
//! Each service holds a shared [`AccountingProvider`](crate::AccountingProvider)
//! and mostly forwards to it. Invoice batch creation and customer
//! find-or-create carry the only logic of their own.

pub mod customer;
pub mod invoice;
pub mod item;
pub mod payment;
pub mod purchase;
pub mod report;
pub mod sync;
pub mod tax;
pub mod vendor;

pub use customer::CustomerService;
pub use invoice::InvoiceService;
pub use item::ItemService;
pub use payment::PaymentService;
pub use purchase::PurchaseService;
pub use report::ReportService;
pub use sync::SyncService;
pub use tax::TaxService;
pub use vendor::VendorService;
