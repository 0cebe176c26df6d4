//! Purchase (vendor) invoices

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::invoice::InvoiceStatus;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PurchaseInvoice {
    pub id: String,
    pub number: String,
    pub vendor_name: String,
    pub vendor_id: String,
    pub doc_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub total_amount: Decimal,
    pub tax_amount: Decimal,
    pub paid_amount: Decimal,
    pub currency: String,
    pub paid: bool,
    /// Derived with [`InvoiceStatus::derive`], same as sales invoices.
    pub status: InvoiceStatus,
    pub reference_no: String,
}
