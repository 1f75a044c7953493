//! The in-memory menu collection.
//!
//! [`MenuStore`] owns the ordered sequence of menu items and provides the
//! CRUD operations keyed by id. It holds no interior locking; callers that
//! share a store across tasks wrap it themselves (the server puts it behind
//! an async mutex).

use crate::error::StoreError;
use crate::item::{Category, ItemId, MenuItem, MenuItemDraft};

/// The ordered, in-memory menu item collection.
///
/// Items live only in process memory; there is no persistence. Lookups are
/// linear scans, which is fine at menu scale.
#[derive(Debug, Default)]
pub struct MenuStore {
    items: Vec<MenuItem>,
}

impl MenuStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        MenuStore { items: Vec::new() }
    }

    /// Creates a store pre-populated with the fixed six-record dataset,
    /// ids 1 through 6.
    pub fn seeded() -> Self {
        MenuStore {
            items: seed_items(),
        }
    }

    /// All items, in insertion order.
    pub fn list(&self) -> &[MenuItem] {
        &self.items
    }

    /// The number of items currently held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up an item by id.
    pub fn get(&self, id: ItemId) -> Result<&MenuItem, StoreError> {
        self.items
            .iter()
            .find(|m| m.id == id)
            .ok_or(StoreError::ItemNotFound(id))
    }

    /// Appends a new item built from `draft`, assigning `id = len + 1`.
    ///
    /// Ids are derived from the current count, not a monotonic counter:
    /// after a deletion the next create can reuse an id that is still held
    /// by another record.
    pub fn create(&mut self, draft: MenuItemDraft) -> MenuItem {
        let item = draft.into_item(ItemId(self.items.len() as i64 + 1));
        self.items.push(item.clone());
        item
    }

    /// Replaces the item with the given id wholesale.
    ///
    /// The stored id comes from the `id` argument, never from the draft;
    /// partial updates are not supported.
    pub fn update(&mut self, id: ItemId, draft: MenuItemDraft) -> Result<MenuItem, StoreError> {
        let index = self.index_of(id)?;
        let item = draft.into_item(id);
        self.items[index] = item.clone();
        Ok(item)
    }

    /// Removes exactly one item by id and returns it. The order of the
    /// remaining items is preserved.
    pub fn remove(&mut self, id: ItemId) -> Result<MenuItem, StoreError> {
        let index = self.index_of(id)?;
        Ok(self.items.remove(index))
    }

    fn index_of(&self, id: ItemId) -> Result<usize, StoreError> {
        self.items
            .iter()
            .position(|m| m.id == id)
            .ok_or(StoreError::ItemNotFound(id))
    }
}

/// The fixed seed dataset served at startup.
fn seed_items() -> Vec<MenuItem> {
    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    vec![
        MenuItem {
            id: ItemId(1),
            name: "Classic Burger".to_string(),
            description: "Beef patty with lettuce, tomato, and cheese on a sesame seed bun"
                .to_string(),
            price: 12.99,
            category: Category::Entree,
            ingredients: strings(&["beef", "lettuce", "tomato", "cheese", "bun"]),
            available: Some(true),
        },
        MenuItem {
            id: ItemId(2),
            name: "Chicken Caesar Salad".to_string(),
            description: "Grilled chicken breast over romaine lettuce with parmesan and croutons"
                .to_string(),
            price: 11.50,
            category: Category::Entree,
            ingredients: strings(&[
                "chicken",
                "romaine lettuce",
                "parmesan cheese",
                "croutons",
                "caesar dressing",
            ]),
            available: Some(true),
        },
        MenuItem {
            id: ItemId(3),
            name: "Mozzarella Sticks".to_string(),
            description: "Crispy breaded mozzarella served with marinara sauce".to_string(),
            price: 8.99,
            category: Category::Appetizer,
            ingredients: strings(&["mozzarella cheese", "breadcrumbs", "marinara sauce"]),
            available: Some(true),
        },
        MenuItem {
            id: ItemId(4),
            name: "Chocolate Lava Cake".to_string(),
            description: "Warm chocolate cake with molten center, served with vanilla ice cream"
                .to_string(),
            price: 7.99,
            category: Category::Dessert,
            ingredients: strings(&["chocolate", "flour", "eggs", "butter", "vanilla ice cream"]),
            available: Some(true),
        },
        MenuItem {
            id: ItemId(5),
            name: "Fresh Lemonade".to_string(),
            description: "House-made lemonade with fresh lemons and mint".to_string(),
            price: 3.99,
            category: Category::Beverage,
            ingredients: strings(&["lemons", "sugar", "water", "mint"]),
            available: Some(true),
        },
        MenuItem {
            id: ItemId(6),
            name: "Fish and Chips".to_string(),
            description: "Beer-battered cod with seasoned fries and coleslaw".to_string(),
            price: 14.99,
            category: Category::Entree,
            ingredients: strings(&["cod", "beer batter", "potatoes", "coleslaw", "tartar sauce"]),
            available: Some(false),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> MenuItemDraft {
        MenuItemDraft {
            name: name.to_string(),
            description: "A test item description".to_string(),
            price: 5.0,
            category: Category::Appetizer,
            ingredients: vec!["salt".to_string()],
            available: None,
        }
    }

    #[test]
    fn seeded_store_has_six_items_in_order() {
        let store = MenuStore::seeded();
        assert_eq!(store.len(), 6);
        let ids: Vec<i64> = store.list().iter().map(|m| m.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(store.get(ItemId(3)).unwrap().name, "Mozzarella Sticks");
        assert_eq!(store.get(ItemId(6)).unwrap().available, Some(false));
    }

    #[test]
    fn create_assigns_count_plus_one() {
        let mut store = MenuStore::new();
        assert_eq!(store.create(draft("first")).id, ItemId(1));
        assert_eq!(store.create(draft("second")).id, ItemId(2));

        let mut seeded = MenuStore::seeded();
        assert_eq!(seeded.create(draft("seventh")).id, ItemId(7));
        assert_eq!(seeded.len(), 7);
    }

    #[test]
    fn create_after_delete_reuses_an_existing_id() {
        // len + 1 assignment: deleting id 3 from six items makes the next
        // create produce id 6, colliding with the surviving id-6 record.
        let mut store = MenuStore::seeded();
        store.remove(ItemId(3)).unwrap();
        let created = store.create(draft("collider"));
        assert_eq!(created.id, ItemId(6));
        // get() returns the first match, which is the original record.
        assert_eq!(store.get(ItemId(6)).unwrap().name, "Fish and Chips");
    }

    #[test]
    fn get_missing_id_is_not_found() {
        let store = MenuStore::seeded();
        assert_eq!(store.get(ItemId(99)), Err(StoreError::ItemNotFound(ItemId(99))));
    }

    #[test]
    fn update_replaces_in_place_and_keeps_id() {
        let mut store = MenuStore::seeded();
        let updated = store.update(ItemId(2), draft("Renamed Salad")).unwrap();
        assert_eq!(updated.id, ItemId(2));
        assert_eq!(updated.name, "Renamed Salad");
        assert_eq!(store.len(), 6);
        // Position within the sequence is unchanged.
        assert_eq!(store.list()[1].name, "Renamed Salad");
    }

    #[test]
    fn update_missing_id_is_not_found() {
        let mut store = MenuStore::new();
        assert_eq!(
            store.update(ItemId(1), draft("nope")),
            Err(StoreError::ItemNotFound(ItemId(1)))
        );
    }

    #[test]
    fn remove_returns_the_item_and_preserves_order() {
        let mut store = MenuStore::seeded();
        let removed = store.remove(ItemId(3)).unwrap();
        assert_eq!(removed.name, "Mozzarella Sticks");
        assert_eq!(store.len(), 5);
        let ids: Vec<i64> = store.list().iter().map(|m| m.id.0).collect();
        assert_eq!(ids, vec![1, 2, 4, 5, 6]);
        assert!(store.get(ItemId(3)).is_err());
    }

    #[test]
    fn remove_missing_id_leaves_collection_unchanged() {
        let mut store = MenuStore::seeded();
        assert_eq!(
            store.remove(ItemId(42)),
            Err(StoreError::ItemNotFound(ItemId(42)))
        );
        assert_eq!(store.len(), 6);
    }
}
