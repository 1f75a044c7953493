//! Menu item domain types.
//!
//! [`MenuItem`] is the sole entity: a purchasable dish or drink. Ids are
//! plain positive integers wrapped in a newtype so they cannot be confused
//! with other numeric values at call sites.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stable menu item identifier. Serializes as a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub i64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fixed set of menu categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Appetizer,
    Entree,
    Dessert,
    Beverage,
}

impl Category {
    /// All categories, in declaration order. Used to build validation
    /// messages listing the accepted names.
    pub const ALL: [Category; 4] = [
        Category::Appetizer,
        Category::Entree,
        Category::Dessert,
        Category::Beverage,
    ];

    /// The lowercase wire name of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Appetizer => "appetizer",
            Category::Entree => "entree",
            Category::Dessert => "dessert",
            Category::Beverage => "beverage",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or(())
    }
}

/// A single menu item record.
///
/// `available` is tri-state: the original dataset carries explicit
/// `true`/`false` values, but a created item whose payload omitted the field
/// stores `None` and the serialized record omits the key entirely. No layer
/// ever defaults it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub ingredients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

/// A validated field set for creating or replacing a menu item.
///
/// Carries everything except the id, which the store assigns on create and
/// the caller supplies (from the URL path) on update.
#[derive(Debug, Clone)]
pub struct MenuItemDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub ingredients: Vec<String>,
    pub available: Option<bool>,
}

impl MenuItemDraft {
    /// Materializes the draft into a [`MenuItem`] with the given id.
    pub fn into_item(self, id: ItemId) -> MenuItem {
        MenuItem {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            ingredients: self.ingredients,
            available: self.available,
        }
    }
}
