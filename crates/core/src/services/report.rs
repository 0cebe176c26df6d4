//! Report service

use std::sync::Arc;

use ledgerbridge_domain::{
    CustomerDebt, CustomerDebtsQuery, FinancialReport, FinancialReportQuery, Result,
};

use crate::provider_ports::AccountingProvider;

pub struct ReportService {
    provider: Arc<dyn AccountingProvider>,
}

impl ReportService {
    pub fn new(provider: Arc<dyn AccountingProvider>) -> Self {
        Self { provider }
    }

    /// Open debts per customer document.
    pub async fn customer_debts(&self, query: &CustomerDebtsQuery) -> Result<Vec<CustomerDebt>> {
        self.provider.customer_debts(query).await
    }

    pub async fn profit_and_loss(&self, query: &FinancialReportQuery) -> Result<FinancialReport> {
        self.provider.profit_and_loss(query).await
    }

    pub async fn balance_sheet(&self, query: &FinancialReportQuery) -> Result<FinancialReport> {
        self.provider.balance_sheet(query).await
    }
}
