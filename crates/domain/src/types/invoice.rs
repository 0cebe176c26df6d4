//! Sales invoices and their derived settlement status

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::impl_domain_enum_conversions;

/// Settlement status of an invoice.
///
/// Only [`InvoiceStatus::derive`] produces a status; adapters never copy a
/// status string from the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    #[default]
    Unpaid,
    Partial,
    Paid,
}

impl_domain_enum_conversions!(InvoiceStatus {
    Unpaid => "unpaid",
    Partial => "partial",
    Paid => "paid",
});

impl InvoiceStatus {
    /// Derive the status from the paid flag and the amount paid so far.
    pub fn derive(paid: bool, paid_amount: Decimal) -> Self {
        if paid {
            Self::Paid
        } else if paid_amount > Decimal::ZERO {
            Self::Partial
        } else {
            Self::Unpaid
        }
    }
}

/// A sales invoice (or credit note) as reported by the backend.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub number: String,
    pub customer_name: String,
    pub customer_id: String,
    pub doc_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub total_amount: Decimal,
    pub tax_amount: Decimal,
    pub paid_amount: Decimal,
    pub currency: String,
    pub paid: bool,
    pub status: InvoiceStatus,
    pub reference_no: String,
    pub lines: Vec<InvoiceLine>,
    pub payments: Vec<InvoicePayment>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub id: String,
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub tax_id: String,
    pub tax_name: String,
    pub tax_pct: Decimal,
    pub amount_excl_vat: Decimal,
    pub amount_incl_vat: Decimal,
    pub vat_amount: Decimal,
    pub account_code: String,
}

/// A payment already applied to an invoice.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InvoicePayment {
    pub date: Option<NaiveDate>,
    pub amount: Decimal,
    pub method: String,
    pub payment_id: String,
}

/// Rendered invoice document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InvoicePdf {
    pub file_name: String,
    /// Raw PDF bytes.
    pub content: Vec<u8>,
}
