//! Neutral input shapes for create, update and list calls
//!
//! Create inputs never carry a backend identity; the id only exists on the
//! entity returned after a successful write. Update inputs carry the id of the
//! record they address plus one `Option` per field: `None` leaves the remote
//! value untouched.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::catalog::ItemType;

/// One line of an invoice, credit note or purchase invoice.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateInvoiceLineInput {
    /// Article code; the backend creates the article when it is unknown.
    pub code: String,
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub tax_id: String,
    pub account_code: Option<String>,
    pub item_type: Option<ItemType>,
    pub unit_of_measure: Option<String>,
}

impl CreateInvoiceLineInput {
    /// Net amount of the line, `quantity × unit_price`, unrounded.
    pub fn net_amount(&self) -> Decimal {
        self.quantity * self.unit_price
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateInvoiceInput {
    /// Existing customer id; when absent the backend matches or creates the
    /// customer from the name and registration fields.
    pub customer_id: Option<String>,
    pub customer_name: String,
    pub customer_reg_no: Option<String>,
    pub customer_email: Option<String>,
    pub customer_address: Option<String>,
    pub customer_country_code: Option<String>,
    pub doc_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub invoice_no: String,
    pub ref_no: Option<String>,
    pub currency: Option<String>,
    pub lines: Vec<CreateInvoiceLineInput>,
    /// Expected gross total, sent along so the backend can cross-check.
    pub total_amount: Option<Decimal>,
    pub comment: Option<String>,
    pub footer_comment: Option<String>,
}

/// Credit note; same document shape as an invoice.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateCreditNoteInput {
    pub document: CreateInvoiceInput,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreatePurchaseInput {
    pub vendor_id: Option<String>,
    pub vendor_name: String,
    pub vendor_reg_no: Option<String>,
    pub vendor_email: Option<String>,
    pub vendor_address: Option<String>,
    pub vendor_country_code: Option<String>,
    pub doc_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub bill_no: String,
    pub ref_no: Option<String>,
    pub currency: Option<String>,
    pub lines: Vec<CreateInvoiceLineInput>,
    pub comment: Option<String>,
    pub footer_comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreateCustomerInput {
    pub name: String,
    pub reg_no: Option<String>,
    pub vat_reg_no: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub county: Option<String>,
    pub postal_code: Option<String>,
    pub country_code: Option<String>,
    pub currency: Option<String>,
    pub payment_days: Option<i32>,
    pub contact: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateCustomerInput {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub country_code: Option<String>,
    pub reg_no: Option<String>,
    pub vat_reg_no: Option<String>,
}

impl UpdateCustomerInput {
    /// Update addressing `id` with every field left untouched.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), ..Self::default() }
    }
}

/// Optional server-side filters for the customer list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListCustomersInput {
    pub name: Option<String>,
    pub reg_no: Option<String>,
    pub vat_reg_no: Option<String>,
}

/// Incoming payment against a sales invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePaymentInput {
    pub customer_name: String,
    pub invoice_no: String,
    pub payment_date: NaiveDate,
    pub amount: Decimal,
    pub currency: Option<String>,
    pub bank_id: Option<String>,
    pub ref_no: Option<String>,
}

/// Outgoing payment against a purchase invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePurchasePaymentInput {
    pub vendor_name: String,
    pub bill_no: String,
    pub payment_date: NaiveDate,
    pub amount: Decimal,
    pub currency: Option<String>,
    pub bank_id: Option<String>,
    pub ref_no: Option<String>,
}

/// Inclusive document-date window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

pub type ListInvoicesInput = Period;
pub type ListPaymentsInput = Period;
pub type ListPurchasesInput = Period;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateItemInput {
    pub code: String,
    pub description: String,
    pub item_type: ItemType,
    pub unit_of_measure: Option<String>,
    pub sales_price: Decimal,
    pub tax_id: Option<String>,
    pub sales_account_code: Option<String>,
    pub purchase_account_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateItemInput {
    pub id: String,
    pub code: Option<String>,
    pub description: Option<String>,
    pub sales_price: Option<Decimal>,
    pub tax_id: Option<String>,
}

impl UpdateItemInput {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), ..Self::default() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListItemsInput {
    pub code: Option<String>,
    pub description: Option<String>,
    pub item_type: Option<ItemType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListVendorsInput {
    pub name: Option<String>,
    pub reg_no: Option<String>,
    pub vat_reg_no: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreateVendorInput {
    pub name: String,
    pub reg_no: Option<String>,
    pub vat_reg_no: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub county: Option<String>,
    pub postal_code: Option<String>,
    pub country_code: Option<String>,
    pub currency: Option<String>,
    pub payment_days: Option<i32>,
    pub vat_accountable: bool,
}

/// Filters for the customer debts report; empty means every customer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomerDebtsQuery {
    pub customer_name: Option<String>,
    /// Only debts overdue by more than this many days.
    pub overdue_days: Option<i32>,
    /// Reporting date; the backend uses today when absent.
    pub debt_date: Option<NaiveDate>,
}

/// Parameters for profit and loss or balance sheet reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialReportQuery {
    pub end_date: NaiveDate,
    /// Number of monthly periods ending at `end_date`.
    pub period_count: u32,
    /// Department filter; only honoured by profit and loss.
    pub department: Option<String>,
}

impl FinancialReportQuery {
    pub fn new(end_date: NaiveDate, period_count: u32) -> Self {
        Self { end_date, period_count, department: None }
    }
}
