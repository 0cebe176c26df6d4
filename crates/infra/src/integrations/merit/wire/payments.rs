//! Bank payment shapes

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::nullable;

pub const DIRECTION_CUSTOMERS: i32 = 1;
pub const DIRECTION_VENDORS: i32 = 2;
pub const DIRECTION_OTHER_INCOME: i32 = 3;
pub const DIRECTION_OTHER_EXPENSES: i32 = 4;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PaymentListItem {
    #[serde(rename = "PIHId", deserialize_with = "nullable")]
    pub pih_id: String,
    #[serde(deserialize_with = "nullable")]
    pub counter_part_name: String,
    #[serde(deserialize_with = "nullable")]
    pub currency_code: String,
    #[serde(deserialize_with = "nullable")]
    pub document_date: String,
    #[serde(deserialize_with = "nullable")]
    pub document_no: String,
    #[serde(deserialize_with = "nullable")]
    pub direction: i32,
    #[serde(deserialize_with = "nullable")]
    pub amount: Decimal,
    #[serde(deserialize_with = "nullable")]
    pub counter_part_id: String,
    #[serde(rename = "PaymAPIDetails", deserialize_with = "nullable")]
    pub paym_api_details: Vec<PaymApiDetail>,
}

/// Per-document settlement inside a payment.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PaymApiDetail {
    #[serde(deserialize_with = "nullable")]
    pub paym_id: String,
    #[serde(deserialize_with = "nullable")]
    pub doc_no: String,
    #[serde(deserialize_with = "nullable")]
    pub doc_amount: Decimal,
    #[serde(deserialize_with = "nullable")]
    pub paid_amount: Decimal,
    #[serde(deserialize_with = "nullable")]
    pub currency_code: String,
    #[serde(deserialize_with = "nullable")]
    pub doc_id: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePaymentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_id: Option<String>,
    pub customer_name: String,
    pub invoice_no: String,
    pub payment_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_no: Option<String>,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePurchasePaymentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_id: Option<String>,
    pub vendor_name: String,
    pub payment_date: String,
    pub bill_no: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_no: Option<String>,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
}
