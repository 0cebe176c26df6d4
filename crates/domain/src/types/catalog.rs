//! Reference data: items, taxes and general ledger accounts

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::impl_domain_enum_conversions;

/// Kind of sellable article.
///
/// `Item` is the most general variant and the fallback for unknown codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Stock,
    Service,
    #[default]
    Item,
}

impl_domain_enum_conversions!(ItemType {
    Stock => "stock",
    Service => "service",
    Item => "item",
});

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub code: String,
    pub name: String,
    pub description: String,
    pub item_type: ItemType,
    pub unit_of_measure: String,
    pub sales_price: Decimal,
    pub tax_id: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Tax {
    pub id: String,
    pub code: String,
    pub name: String,
    /// Rate in percent, e.g. `22` for 22 %.
    pub pct: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub code: String,
    pub name: String,
    pub active: bool,
}
