//! Menu endpoint request/response types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use bistro_core::MenuItem;

/// Request body for creating or updating a menu item.
///
/// Fields are loosely typed (`Option<Value>`) on purpose: validation reports
/// every violated rule in one batch, so a missing or wrong-typed field must
/// reach the validator as data rather than fail body deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuItemUpsert {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub category: Option<Value>,
    #[serde(default)]
    pub ingredients: Option<Value>,
    #[serde(default)]
    pub available: Option<Value>,
}

/// Response body for a successful delete: a confirmation message plus a copy
/// of the removed record.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteMenuItemResponse {
    pub message: String,
    #[serde(rename = "menuItem")]
    pub menu_item: MenuItem,
}
