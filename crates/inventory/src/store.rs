use std::collections::HashSet;

use tracing::debug;

use stockroom_core::{Entity, EntityStore, IdStrategy, ItemId};

use crate::item::{InventoryItem, ItemDraft};

/// Owns the inventory item list, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    items: EntityStore<InventoryItem>,
}

impl InventoryStore {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            items: EntityStore::new(strategy),
        }
    }

    /// Build a store from existing items, keeping their ids.
    pub fn seeded(strategy: IdStrategy, items: impl IntoIterator<Item = InventoryItem>) -> Self {
        Self {
            items: EntityStore::seeded(strategy, items),
        }
    }

    /// Append a new item. No uniqueness check on name.
    pub fn add_item(&mut self, draft: ItemDraft) -> ItemId {
        let id = self.items.insert_with(|id| InventoryItem::from_draft(id, draft));
        debug!(item_id = %id, "inventory item added");
        id
    }

    /// Replace the item's fields, keeping its id. No-op if `id` is unknown.
    pub fn edit_item(&mut self, id: ItemId, draft: ItemDraft) -> bool {
        let edited = self
            .items
            .replace_with(id, |id| InventoryItem::from_draft(id, draft.clone()));
        debug!(item_id = %id, edited, "inventory item edit");
        edited
    }

    /// No-op if `id` is unknown.
    pub fn delete_item(&mut self, id: ItemId) -> bool {
        let deleted = self.items.remove(id);
        debug!(item_id = %id, deleted, "inventory item delete");
        deleted
    }

    /// Remove every item whose id is in `ids`. Returns the number removed.
    pub fn bulk_delete(&mut self, ids: &HashSet<ItemId>) -> usize {
        let removed = self.items.remove_where(|item| ids.contains(&item.id()));
        debug!(requested = ids.len(), removed, "inventory bulk delete");
        removed
    }

    pub fn get(&self, id: ItemId) -> Option<&InventoryItem> {
        self.items.get(id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[InventoryItem] {
        self.items.as_slice()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
