//! Customer service

use std::sync::Arc;

use ledgerbridge_domain::{
    CreateCustomerInput, Customer, ListCustomersInput, Result, UpdateCustomerInput,
};
use tracing::{debug, instrument};

use crate::provider_ports::AccountingProvider;

pub struct CustomerService {
    provider: Arc<dyn AccountingProvider>,
}

impl CustomerService {
    pub fn new(provider: Arc<dyn AccountingProvider>) -> Self {
        Self { provider }
    }

    pub async fn create(&self, input: &CreateCustomerInput) -> Result<Customer> {
        self.provider.create_customer(input).await
    }

    /// Apply a partial update; `None` fields keep their remote value.
    pub async fn update(&self, input: &UpdateCustomerInput) -> Result<()> {
        self.provider.update_customer(input).await
    }

    pub async fn list(&self, input: &ListCustomersInput) -> Result<Vec<Customer>> {
        self.provider.list_customers(input).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Customer> {
        self.provider.find_customer_by_email(email).await
    }

    /// Return the customer with `email`, creating one from `input` when the
    /// lookup reports `NotFound`. Any other lookup failure is returned as-is
    /// and nothing is created.
    #[instrument(skip(self, email, input))]
    pub async fn find_or_create(
        &self,
        email: &str,
        input: &CreateCustomerInput,
    ) -> Result<Customer> {
        match self.provider.find_customer_by_email(email).await {
            Ok(existing) => Ok(existing),
            Err(err) if err.is_not_found() => {
                debug!("no customer with that email, creating one");
                self.provider.create_customer(input).await
            }
            Err(err) => Err(err),
        }
    }
}
