//! Items, taxes and chart of accounts

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::nullable;

pub const ITEM_TYPE_STOCK: i32 = 1;
pub const ITEM_TYPE_SERVICE: i32 = 2;
pub const ITEM_TYPE_ITEM: i32 = 3;

/// Usage code for articles available on both sales and purchases.
pub const ITEM_USAGE_BOTH: u8 = 3;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListItemsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ItemListItem {
    #[serde(deserialize_with = "nullable")]
    pub item_id: String,
    #[serde(deserialize_with = "nullable")]
    pub code: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(rename = "UnitofMeasureName", deserialize_with = "nullable")]
    pub unit_of_measure_name: String,
    #[serde(deserialize_with = "nullable")]
    pub r#type: i32,
    #[serde(deserialize_with = "nullable")]
    pub sales_price: Decimal,
    #[serde(deserialize_with = "nullable")]
    pub vat_tax_name: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateItemRequest {
    pub r#type: i32,
    pub usage: u8,
    pub code: String,
    pub description: String,
    #[serde(rename = "UOMName", skip_serializing_if = "Option::is_none")]
    pub uom_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_acc_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_acc_code: Option<String>,
}

/// `v2/senditems` takes a list even for a single article.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateItemsBody {
    pub items: Vec<CreateItemRequest>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreatedItem {
    #[serde(deserialize_with = "nullable")]
    pub item_id: String,
    #[serde(deserialize_with = "nullable")]
    pub code: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateItemRequest {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TaxItem {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub code: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub tax_pct: Decimal,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AccountItem {
    #[serde(rename = "AccountID", deserialize_with = "nullable")]
    pub account_id: String,
    /// `"1"` marks a closed account.
    #[serde(deserialize_with = "nullable")]
    pub non_active: String,
    #[serde(deserialize_with = "nullable")]
    pub code: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::*;

    #[test]
    fn create_items_body_wraps_list() {
        let body = CreateItemsBody {
            items: vec![CreateItemRequest {
                r#type: ITEM_TYPE_SERVICE,
                usage: ITEM_USAGE_BOTH,
                code: "CONS".into(),
                description: "Consulting".into(),
                uom_name: Some("h".into()),
                ..CreateItemRequest::default()
            }],
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"Items": [{
                "Type": 2,
                "Usage": 3,
                "Code": "CONS",
                "Description": "Consulting",
                "UOMName": "h",
            }]})
        );
    }

    #[test]
    fn item_list_reads_unusual_casing() {
        let item: ItemListItem = serde_json::from_value(json!({
            "ItemId": "i-1",
            "Code": "A",
            "Name": "Apple",
            "UnitofMeasureName": "kg",
            "Type": 1,
            "SalesPrice": 2.5,
        }))
        .unwrap();

        assert_eq!(item.unit_of_measure_name, "kg");
        assert_eq!(item.r#type, ITEM_TYPE_STOCK);
        assert_eq!(item.sales_price, dec!(2.5));
    }
}
