//! Reference data: tax rates and the chart of accounts

use std::sync::Arc;

use ledgerbridge_domain::{Account, Result, Tax};

use crate::provider_ports::AccountingProvider;

pub struct TaxService {
    provider: Arc<dyn AccountingProvider>,
}

impl TaxService {
    pub fn new(provider: Arc<dyn AccountingProvider>) -> Self {
        Self { provider }
    }

    pub async fn list(&self) -> Result<Vec<Tax>> {
        self.provider.list_taxes().await
    }

    pub async fn list_accounts(&self) -> Result<Vec<Account>> {
        self.provider.list_accounts().await
    }

    /// Look a tax up by its code (for example `"22%"`), ignoring case.
    pub async fn find_by_code(&self, code: &str) -> Result<Option<Tax>> {
        let code = code.trim();
        let taxes = self.provider.list_taxes().await?;
        Ok(taxes.into_iter().find(|tax| tax.code.eq_ignore_ascii_case(code)))
    }
}
