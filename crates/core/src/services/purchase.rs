//! Purchase invoice service

use std::sync::Arc;

use ledgerbridge_domain::{CreatePurchaseInput, ListPurchasesInput, PurchaseInvoice, Result};

use crate::provider_ports::AccountingProvider;

pub struct PurchaseService {
    provider: Arc<dyn AccountingProvider>,
}

impl PurchaseService {
    pub fn new(provider: Arc<dyn AccountingProvider>) -> Self {
        Self { provider }
    }

    pub async fn create(&self, input: &CreatePurchaseInput) -> Result<PurchaseInvoice> {
        self.provider.create_purchase(input).await
    }

    pub async fn get(&self, id: &str) -> Result<PurchaseInvoice> {
        self.provider.get_purchase(id).await
    }

    pub async fn list(&self, input: &ListPurchasesInput) -> Result<Vec<PurchaseInvoice>> {
        self.provider.list_purchases(input).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.provider.delete_purchase(id).await
    }
}
