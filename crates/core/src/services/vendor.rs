use std::sync::Arc;

use ledgerbridge_domain::{CreateVendorInput, ListVendorsInput, Result, Vendor};

use crate::provider_ports::AccountingProvider;

pub struct VendorService {
    provider: Arc<dyn AccountingProvider>,
}

impl VendorService {
    pub fn new(provider: Arc<dyn AccountingProvider>) -> Self {
        Self { provider }
    }

    pub async fn list(&self, input: &ListVendorsInput) -> Result<Vec<Vendor>> {
        self.provider.list_vendors(input).await
    }

    pub async fn create(&self, input: &CreateVendorInput) -> Result<Vendor> {
        self.provider.create_vendor(input).await
    }
}
