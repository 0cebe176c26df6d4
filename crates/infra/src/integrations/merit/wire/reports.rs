//! Receivables and financial statement shapes

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::nullable;

pub const ROW_HEADING: i32 = 1;
pub const ROW_BALANCE: i32 = 2;
pub const ROW_TURNOVER: i32 = 3;
pub const ROW_FORMULA: i32 = 4;

pub const CLASS_ASSETS: i32 = 1;
pub const CLASS_LIABILITIES: i32 = 2;
pub const CLASS_REVENUE: i32 = 3;
pub const CLASS_EXPENSES: i32 = 4;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerDebtsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cust_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub over_due_days: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debt_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CustomerDebtItem {
    #[serde(deserialize_with = "nullable")]
    pub partner_name: String,
    #[serde(deserialize_with = "nullable")]
    pub partner_id: String,
    /// `MA` invoice, `SO` offer, `SB*` opening balance.
    #[serde(deserialize_with = "nullable")]
    pub doc_type: String,
    #[serde(deserialize_with = "nullable")]
    pub doc_date: String,
    #[serde(deserialize_with = "nullable")]
    pub doc_no: String,
    #[serde(deserialize_with = "nullable")]
    pub ref_no: String,
    #[serde(deserialize_with = "nullable")]
    pub due_date: String,
    #[serde(deserialize_with = "nullable")]
    pub total_amount: Decimal,
    #[serde(deserialize_with = "nullable")]
    pub paid_amount: Decimal,
    #[serde(deserialize_with = "nullable")]
    pub un_paid_amount: Decimal,
    #[serde(deserialize_with = "nullable")]
    pub currency_code: String,
}

/// Body for `v1/getprofitrep` and `v1/getbalancerep`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FinancialReportParams {
    pub end_date: String,
    pub per_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dep_filter: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct FinancialReportBody {
    #[serde(deserialize_with = "nullable")]
    pub error_msg: String,
    #[serde(deserialize_with = "nullable")]
    pub data: Vec<FinancialReportRow>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct FinancialReportRow {
    #[serde(rename = "RDid", deserialize_with = "nullable")]
    pub rd_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub row_type: i32,
    #[serde(deserialize_with = "nullable")]
    pub balance: Vec<Decimal>,
    #[serde(deserialize_with = "nullable")]
    pub details: Vec<FinancialReportDetail>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct FinancialReportDetail {
    #[serde(deserialize_with = "nullable")]
    pub account_id: String,
    #[serde(deserialize_with = "nullable")]
    pub account_code: String,
    #[serde(deserialize_with = "nullable")]
    pub account_name: String,
    #[serde(deserialize_with = "nullable")]
    pub type_id: i32,
    #[serde(deserialize_with = "nullable")]
    pub balance: Vec<Decimal>,
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::*;

    #[test]
    fn reads_nested_report() {
        let body: FinancialReportBody = serde_json::from_value(json!({
            "ErrorMsg": "",
            "Data": [{
                "RDid": 10,
                "Description": "Revenue",
                "RowType": 3,
                "Balance": [1000, 1200.5],
                "Details": [{
                    "AccountId": "a-1",
                    "AccountCode": "3000",
                    "AccountName": "Sales",
                    "TypeId": 3,
                    "Balance": [1000, 1200.5],
                }],
            }],
        }))
        .unwrap();

        let row = &body.data[0];
        assert_eq!(row.rd_id, 10);
        assert_eq!(row.row_type, ROW_TURNOVER);
        assert_eq!(row.balance, vec![dec!(1000), dec!(1200.5)]);
        assert_eq!(row.details[0].type_id, CLASS_REVENUE);
    }

    #[test]
    fn debts_params_skip_empty_filters() {
        let params = CustomerDebtsParams { over_due_days: Some(30), ..Default::default() };

        assert_eq!(serde_json::to_value(&params).unwrap(), json!({"OverDueDays": 30}));
    }
}
