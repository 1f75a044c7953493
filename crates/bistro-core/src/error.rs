//! Store error types.

use thiserror::Error;

use crate::item::ItemId;

/// Errors produced by [`MenuStore`](crate::store::MenuStore) operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No item with the given id exists in the collection.
    #[error("menu item not found: {0}")]
    ItemNotFound(ItemId),
}
