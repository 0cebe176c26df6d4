//! Purchase invoice shapes

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::invoices::{InvoiceRow, TaxAmountEntry};
use super::nullable;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PurchaseListItem {
    #[serde(rename = "PIHId", deserialize_with = "nullable")]
    pub pih_id: String,
    #[serde(deserialize_with = "nullable")]
    pub bill_no: String,
    #[serde(deserialize_with = "nullable")]
    pub document_date: String,
    #[serde(deserialize_with = "nullable")]
    pub due_date: String,
    #[serde(deserialize_with = "nullable")]
    pub vendor_id: String,
    #[serde(deserialize_with = "nullable")]
    pub vendor_name: String,
    #[serde(deserialize_with = "nullable")]
    pub reference_no: String,
    #[serde(deserialize_with = "nullable")]
    pub currency_code: String,
    #[serde(deserialize_with = "nullable")]
    pub tax_amount: Decimal,
    #[serde(deserialize_with = "nullable")]
    pub total_amount: Decimal,
    #[serde(deserialize_with = "nullable")]
    pub paid_amount: Decimal,
    #[serde(deserialize_with = "nullable")]
    pub paid: bool,
}

/// Inline vendor on a purchase invoice.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VendorRef {
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

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePurchaseRequest {
    pub vendor: VendorRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub bill_no: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    pub invoice_row: Vec<InvoiceRow>,
    pub tax_amount: Vec<TaxAmountEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hcomment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fcomment: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreatePurchaseResponse {
    #[serde(deserialize_with = "nullable")]
    pub vendor_id: String,
    #[serde(deserialize_with = "nullable")]
    pub bill_id: String,
    #[serde(deserialize_with = "nullable")]
    pub bill_no: String,
    #[serde(deserialize_with = "nullable")]
    pub ref_no: String,
    #[serde(rename = "BatcInfo", deserialize_with = "nullable")]
    pub batch_info: String,
}
