//! Incremental pull of changed records
//!
//! Both calls filter on the backend's change date, so a caller can poll with
//! the previous `until` as the next `since` and only see edits in between.

use std::sync::Arc;

use chrono::NaiveDate;
use ledgerbridge_domain::{AccountingError, Invoice, Payment, Result};
use tracing::{debug, instrument};

use crate::provider_ports::AccountingProvider;

pub struct SyncService {
    provider: Arc<dyn AccountingProvider>,
}

impl SyncService {
    pub fn new(provider: Arc<dyn AccountingProvider>) -> Self {
        Self { provider }
    }

    /// Invoices changed in `since..=until`, each with its derived status.
    #[instrument(skip(self))]
    pub async fn pull_invoice_statuses(
        &self,
        since: NaiveDate,
        until: NaiveDate,
    ) -> Result<Vec<Invoice>> {
        check_window(since, until)?;
        let invoices = self.provider.list_invoices_since(since, until).await?;
        debug!(count = invoices.len(), "pulled changed invoices");
        Ok(invoices)
    }

    /// Payments changed in `since..=until`.
    #[instrument(skip(self))]
    pub async fn pull_payments(&self, since: NaiveDate, until: NaiveDate) -> Result<Vec<Payment>> {
        check_window(since, until)?;
        let payments = self.provider.list_payments_since(since, until).await?;
        debug!(count = payments.len(), "pulled changed payments");
        Ok(payments)
    }
}

fn check_window(since: NaiveDate, until: NaiveDate) -> Result<()> {
    if since > until {
        return Err(AccountingError::InvalidInput(format!(
            "sync window starts after it ends: {since} > {until}"
        )));
    }
    Ok(())
}
