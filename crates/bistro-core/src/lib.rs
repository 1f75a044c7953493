pub mod error;
pub mod item;
pub mod store;

// Re-export commonly used types
pub use error::StoreError;
pub use item::{Category, ItemId, MenuItem, MenuItemDraft};
pub use store::MenuStore;
