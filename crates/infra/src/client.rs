//! Client facade
//!
//! [`AccountingClient`] turns a [`GatewayConfig`] into a ready provider and
//! exposes one service per resource family, all sharing that provider.

use std::sync::Arc;

use ledgerbridge_core::{
    AccountingProvider, CustomerService, InvoiceService, ItemService, PaymentService,
    PurchaseService, ReportService, SyncService, TaxService, VendorService,
};
use ledgerbridge_domain::constants::PROVIDER_MERIT;
use ledgerbridge_domain::{AccountingError, GatewayConfig, Result};
use tracing::info;

use crate::integrations::merit::MeritProvider;

/// Entry point of the gateway.
///
/// ```no_run
/// use ledgerbridge_domain::{GatewayConfig, Period};
/// use ledgerbridge_infra::AccountingClient;
///
/// # async fn example() -> ledgerbridge_domain::Result<()> {
/// let client = AccountingClient::new(GatewayConfig::new("api-id", "api-secret"))?;
/// client.test_connection().await?;
///
/// let start = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
/// let end = chrono::NaiveDate::from_ymd_opt(2024, 3, 31).unwrap_or_default();
/// let invoices = client.invoices.list(&Period::new(start, end)).await?;
/// println!("{} invoices", invoices.len());
/// # Ok(())
/// # }
/// ```
pub struct AccountingClient {
    provider: Arc<dyn AccountingProvider>,
    pub invoices: InvoiceService,
    pub customers: CustomerService,
    pub payments: PaymentService,
    pub items: ItemService,
    pub purchases: PurchaseService,
    pub taxes: TaxService,
    pub reports: ReportService,
    pub sync: SyncService,
    pub vendors: VendorService,
}

impl AccountingClient {
    /// Build a client with its own HTTP connection pool.
    ///
    /// # Errors
    /// `UnsupportedProvider` for an unknown provider name, `Config` for
    /// missing credentials or a malformed base URL.
    pub fn new(config: GatewayConfig) -> Result<Self> {
        ensure_supported(&config)?;
        let provider = MeritProvider::new(&config)?;
        info!(provider = %config.provider, base_url = provider.base_url(), "accounting client ready");
        Ok(Self::from_provider(Arc::new(provider)))
    }

    /// Build a client on a caller-supplied `reqwest::Client`.
    pub fn with_http_client(config: GatewayConfig, client: reqwest::Client) -> Result<Self> {
        ensure_supported(&config)?;
        let provider = MeritProvider::with_http_client(&config, client)?;
        Ok(Self::from_provider(Arc::new(provider)))
    }

    /// Wire the services around any provider implementation.
    pub fn from_provider(provider: Arc<dyn AccountingProvider>) -> Self {
        Self {
            invoices: InvoiceService::new(Arc::clone(&provider)),
            customers: CustomerService::new(Arc::clone(&provider)),
            payments: PaymentService::new(Arc::clone(&provider)),
            items: ItemService::new(Arc::clone(&provider)),
            purchases: PurchaseService::new(Arc::clone(&provider)),
            taxes: TaxService::new(Arc::clone(&provider)),
            reports: ReportService::new(Arc::clone(&provider)),
            sync: SyncService::new(Arc::clone(&provider)),
            vendors: VendorService::new(Arc::clone(&provider)),
            provider,
        }
    }

    pub fn provider(&self) -> &Arc<dyn AccountingProvider> {
        &self.provider
    }

    /// Cheap authenticated round trip.
    pub async fn test_connection(&self) -> Result<()> {
        self.provider.test_connection().await
    }
}

fn ensure_supported(config: &GatewayConfig) -> Result<()> {
    if config.provider.trim().eq_ignore_ascii_case(PROVIDER_MERIT) {
        Ok(())
    } else {
        Err(AccountingError::UnsupportedProvider(config.provider.clone()))
    }
}
