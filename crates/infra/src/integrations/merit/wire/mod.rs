//! Merit JSON wire shapes
//!
//! Field names follow the Merit API exactly. Request structs omit `None`
//! fields; response structs read missing fields and `null` values as defaults,
//! and keep backend codes as `i32` so unknown codes reach the mapping
//! fallbacks.

pub mod catalog;
pub mod invoices;
pub mod parties;
pub mod payments;
pub mod purchases;
pub mod reports;

use serde::{Deserialize, Deserializer, Serialize};

/// `{"Id": ..}` body shared by get and delete calls.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct IdParams<'a> {
    pub id: &'a str,
}

/// Document-date window; `DateType = 1` switches to the change date.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PeriodParams {
    pub period_start: String,
    pub period_end: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_type: Option<u8>,
}

/// Empty JSON object body (`{}`).
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Empty {}

/// Treat an explicit `null` like a missing field.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
