//! Sales invoice and credit note shapes

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::nullable;

/// `AccountingDoc` code for a regular sales invoice.
pub const DOC_INVOICE: u8 = 1;
/// `AccountingDoc` code for a credit note.
pub const DOC_CREDIT_NOTE: u8 = 5;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InvoiceListItem {
    #[serde(rename = "SIHId", deserialize_with = "nullable")]
    pub sih_id: String,
    #[serde(deserialize_with = "nullable")]
    pub invoice_no: String,
    #[serde(deserialize_with = "nullable")]
    pub document_date: String,
    #[serde(deserialize_with = "nullable")]
    pub customer_name: String,
    #[serde(deserialize_with = "nullable")]
    pub customer_id: String,
    #[serde(deserialize_with = "nullable")]
    pub due_date: String,
    #[serde(deserialize_with = "nullable")]
    pub currency_code: String,
    #[serde(deserialize_with = "nullable")]
    pub tax_amount: Decimal,
    #[serde(deserialize_with = "nullable")]
    pub total_amount: Decimal,
    #[serde(deserialize_with = "nullable")]
    pub reference_no: String,
    #[serde(deserialize_with = "nullable")]
    pub paid_amount: Decimal,
    #[serde(deserialize_with = "nullable")]
    pub paid: bool,
}

/// Full invoice; purchase invoice detail uses the same shape.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InvoiceDetail {
    #[serde(rename = "SIHId", deserialize_with = "nullable")]
    pub sih_id: String,
    #[serde(deserialize_with = "nullable")]
    pub invoice_no: String,
    #[serde(deserialize_with = "nullable")]
    pub document_date: String,
    #[serde(deserialize_with = "nullable")]
    pub customer_name: String,
    #[serde(deserialize_with = "nullable")]
    pub customer_id: String,
    #[serde(deserialize_with = "nullable")]
    pub due_date: String,
    #[serde(deserialize_with = "nullable")]
    pub currency_code: String,
    #[serde(deserialize_with = "nullable")]
    pub tax_amount: Decimal,
    #[serde(deserialize_with = "nullable")]
    pub total_amount: Decimal,
    #[serde(deserialize_with = "nullable")]
    pub reference_no: String,
    #[serde(deserialize_with = "nullable")]
    pub paid_amount: Decimal,
    #[serde(deserialize_with = "nullable")]
    pub paid: bool,
    #[serde(deserialize_with = "nullable")]
    pub lines: Vec<InvoiceDetailLine>,
    #[serde(deserialize_with = "nullable")]
    pub payments: Vec<InvoicePaymentInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InvoiceDetailLine {
    #[serde(rename = "SILId", deserialize_with = "nullable")]
    pub sil_id: String,
    #[serde(deserialize_with = "nullable")]
    pub quantity: Decimal,
    #[serde(deserialize_with = "nullable")]
    pub price: Decimal,
    #[serde(deserialize_with = "nullable")]
    pub tax_id: String,
    #[serde(deserialize_with = "nullable")]
    pub tax_name: String,
    #[serde(deserialize_with = "nullable")]
    pub tax_pct: Decimal,
    #[serde(deserialize_with = "nullable")]
    pub amount_excl_vat: Decimal,
    #[serde(deserialize_with = "nullable")]
    pub amount_incl_vat: Decimal,
    #[serde(deserialize_with = "nullable")]
    pub vat_amount: Decimal,
    #[serde(deserialize_with = "nullable")]
    pub account_code: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(rename = "UOMName", deserialize_with = "nullable")]
    pub uom_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InvoicePaymentInfo {
    #[serde(deserialize_with = "nullable")]
    pub paym_date: String,
    #[serde(deserialize_with = "nullable")]
    pub amount: Decimal,
    #[serde(deserialize_with = "nullable")]
    pub payment_method: String,
    #[serde(deserialize_with = "nullable")]
    pub payment_id: String,
}

/// Inline customer on a sales document; Merit matches or creates it.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reg_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

/// Article reference on a document row.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemRef {
    pub code: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<i32>,
    #[serde(rename = "UOMName", skip_serializing_if = "Option::is_none")]
    pub uom_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_acc_code: Option<String>,
    // Merit's spelling
    #[serde(rename = "PuchaseAccCode", skip_serializing_if = "Option::is_none")]
    pub purchase_acc_code: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvoiceRow {
    pub item: ItemRef,
    pub quantity: Decimal,
    pub price: Decimal,
    pub tax_id: String,
    #[serde(rename = "GLAccountCode", skip_serializing_if = "Option::is_none")]
    pub gl_account_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TaxAmountEntry {
    pub tax_id: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateInvoiceRequest {
    pub customer: CustomerRef,
    pub accounting_doc: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub invoice_no: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    pub invoice_row: Vec<InvoiceRow>,
    pub tax_amount: Vec<TaxAmountEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hcomment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fcomment: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateInvoiceResponse {
    #[serde(deserialize_with = "nullable")]
    pub customer_id: String,
    #[serde(deserialize_with = "nullable")]
    pub invoice_id: String,
    #[serde(deserialize_with = "nullable")]
    pub invoice_no: String,
    #[serde(deserialize_with = "nullable")]
    pub ref_no: String,
    #[serde(deserialize_with = "nullable")]
    pub new_customer: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetInvoicePdfParams<'a> {
    pub id: &'a str,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub deliv_note: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Attachment {
    #[serde(deserialize_with = "nullable")]
    pub file_name: String,
    #[serde(deserialize_with = "nullable")]
    pub file_content: String,
}
