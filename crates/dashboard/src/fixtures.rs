//! Sample data the dashboard starts with.

use stockroom_core::{IdStrategy, ItemId, SupplierId};
use stockroom_inventory::{InventoryItem, InventoryStore, ItemDraft};
use stockroom_suppliers::{Supplier, SupplierDraft, SupplierStore};

pub fn sample_suppliers_with(strategy: IdStrategy) -> SupplierStore {
    SupplierStore::seeded(
        strategy,
        [
            (1, SupplierDraft::new("Tech Supplier Inc.", "tech@example.com")),
            (2, SupplierDraft::new("Furniture World", "furniture@example.com")),
        ]
        .into_iter()
        .map(|(id, draft)| Supplier::from_draft(SupplierId::new(id), draft)),
    )
}

pub fn sample_inventory_with(strategy: IdStrategy) -> InventoryStore {
    InventoryStore::seeded(
        strategy,
        [
            (1, ItemDraft::new("Laptop", "Electronics", 10, 5).with_supplier(SupplierId::new(1))),
            (2, ItemDraft::new("Desk Chair", "Furniture", 5, 3).with_supplier(SupplierId::new(2))),
            (3, ItemDraft::new("Notebook", "Stationery", 20, 10).with_supplier(SupplierId::new(1))),
        ]
        .into_iter()
        .map(|(id, draft)| InventoryItem::from_draft(ItemId::new(id), draft)),
    )
}

pub fn sample_suppliers() -> SupplierStore {
    sample_suppliers_with(IdStrategy::default())
}

pub fn sample_inventory() -> InventoryStore {
    sample_inventory_with(IdStrategy::default())
}
