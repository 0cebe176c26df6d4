use std::sync::Arc;

use ledgerbridge_domain::{CreateItemInput, Item, ListItemsInput, Result, UpdateItemInput};

use crate::provider_ports::AccountingProvider;

pub struct ItemService {
    provider: Arc<dyn AccountingProvider>,
}

impl ItemService {
    pub fn new(provider: Arc<dyn AccountingProvider>) -> Self {
        Self { provider }
    }

    pub async fn create(&self, input: &CreateItemInput) -> Result<Item> {
        self.provider.create_item(input).await
    }

    pub async fn list(&self, input: &ListItemsInput) -> Result<Vec<Item>> {
        self.provider.list_items(input).await
    }

    pub async fn update(&self, input: &UpdateItemInput) -> Result<()> {
        self.provider.update_item(input).await
    }
}
