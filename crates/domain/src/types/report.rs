//! Report outputs: receivables and financial statements

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One open document in the customer debts report.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CustomerDebt {
    pub customer_name: String,
    pub customer_id: String,
    /// Backend document type label (invoice, offer, opening balance ...).
    pub doc_type: String,
    pub doc_date: Option<NaiveDate>,
    pub doc_no: String,
    pub reference_no: String,
    pub due_date: Option<NaiveDate>,
    pub total_amount: Decimal,
    pub paid_amount: Decimal,
    pub unpaid_amount: Decimal,
    pub currency: String,
}

/// Profit and loss statement or balance sheet.
///
/// Each row carries one balance per requested period, oldest first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FinancialReport {
    pub rows: Vec<FinancialReportRow>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FinancialReportRow {
    pub id: i64,
    pub description: String,
    pub kind: ReportRowKind,
    pub balances: Vec<Decimal>,
    pub details: Vec<FinancialReportDetail>,
}

/// Account-level breakdown of a report row.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FinancialReportDetail {
    pub account_id: String,
    pub account_code: String,
    pub account_name: String,
    pub account_class: AccountClass,
    pub balances: Vec<Decimal>,
}

/// How a report row's figures are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportRowKind {
    /// Caption only, no figures.
    #[default]
    Heading,
    Balance,
    Turnover,
    Formula,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountClass {
    Assets,
    Liabilities,
    Revenue,
    Expenses,
    #[default]
    Other,
}

impl FinancialReport {
    /// Rows that carry figures, skipping captions.
    pub fn figure_rows(&self) -> impl Iterator<Item = &FinancialReportRow> {
        self.rows.iter().filter(|row| row.kind != ReportRowKind::Heading)
    }
}
