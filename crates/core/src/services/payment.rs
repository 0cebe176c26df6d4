//! Payment service

use std::sync::Arc;

use ledgerbridge_domain::{
    CreatePaymentInput, CreatePurchasePaymentInput, ListPaymentsInput, Payment, Result,
};

use crate::provider_ports::AccountingProvider;

pub struct PaymentService {
    provider: Arc<dyn AccountingProvider>,
}

impl PaymentService {
    pub fn new(provider: Arc<dyn AccountingProvider>) -> Self {
        Self { provider }
    }

    /// Record an incoming payment against a sales invoice.
    pub async fn create(&self, input: &CreatePaymentInput) -> Result<()> {
        self.provider.create_payment(input).await
    }

    /// Record an outgoing payment against a purchase invoice.
    pub async fn create_for_purchase(&self, input: &CreatePurchasePaymentInput) -> Result<()> {
        self.provider.create_purchase_payment(input).await
    }

    pub async fn list(&self, input: &ListPaymentsInput) -> Result<Vec<Payment>> {
        self.provider.list_payments(input).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.provider.delete_payment(id).await
    }
}
