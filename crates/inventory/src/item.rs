use serde::{Deserialize, Serialize};

use stockroom_core::{DomainResult, Entity, ItemId, SupplierId, require_text};

/// Upper bound of the stock gauge shown next to each item.
pub const STOCK_GAUGE_MAX: u32 = 50;

/// Inventory item as held by the [`InventoryStore`](crate::InventoryStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    id: ItemId,
    name: String,
    category: String,
    stock: u32,
    reorder_level: u32,
    supplier_id: Option<SupplierId>,
}

impl InventoryItem {
    pub fn from_draft(id: ItemId, draft: ItemDraft) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            stock: draft.stock,
            reorder_level: draft.reorder_level,
            supplier_id: draft.supplier_id,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn reorder_level(&self) -> u32 {
        self.reorder_level
    }

    /// Referenced supplier. May point at a supplier that no longer exists.
    pub fn supplier_id(&self) -> Option<SupplierId> {
        self.supplier_id
    }

    /// Invariant: an item is low-stock iff `stock <= reorder_level`.
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.reorder_level
    }

    pub fn stock_level(&self) -> StockLevel {
        StockLevel::classify(self.stock)
    }

    /// Gauge fill in `0.0..=1.0`; stock above [`STOCK_GAUGE_MAX`] shows full.
    pub fn gauge_fraction(&self) -> f64 {
        f64::from(self.stock.min(STOCK_GAUGE_MAX)) / f64::from(STOCK_GAUGE_MAX)
    }

    /// Editable fields of this item, e.g. to prefill an edit form.
    pub fn to_draft(&self) -> ItemDraft {
        ItemDraft {
            name: self.name.clone(),
            category: self.category.clone(),
            stock: self.stock,
            reorder_level: self.reorder_level,
            supplier_id: self.supplier_id,
        }
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.id
    }

    fn id_from_raw(raw: u64) -> ItemId {
        ItemId::new(raw)
    }

    fn raw_id(id: ItemId) -> u64 {
        id.get()
    }
}

/// Submitted item fields (add or edit).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub category: String,
    pub stock: u32,
    pub reorder_level: u32,
    pub supplier_id: Option<SupplierId>,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, category: impl Into<String>, stock: u32, reorder_level: u32) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            stock,
            reorder_level,
            supplier_id: None,
        }
    }

    pub fn with_supplier(mut self, supplier_id: SupplierId) -> Self {
        self.supplier_id = Some(supplier_id);
        self
    }

    /// Required-field check for the input form. The store does not call this.
    pub fn validate(&self) -> DomainResult<()> {
        require_text("name", &self.name)?;
        require_text("category", &self.category)
    }
}

/// Three-band gauge classification of absolute stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockLevel {
    /// `stock <= 5`
    Critical,
    /// `stock <= 15`
    Low,
    Healthy,
}

impl StockLevel {
    pub fn classify(stock: u32) -> Self {
        match stock {
            0..=5 => StockLevel::Critical,
            6..=15 => StockLevel::Low,
            _ => StockLevel::Healthy,
        }
    }

    /// Gauge colour used by the dashboard.
    pub fn color(&self) -> &'static str {
        match self {
            StockLevel::Critical => "red",
            StockLevel::Low => "orange",
            StockLevel::Healthy => "green",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use stockroom_core::DomainError;

    fn item(stock: u32, reorder_level: u32) -> InventoryItem {
        InventoryItem::from_draft(ItemId::new(1), ItemDraft::new("Laptop", "Electronics", stock, reorder_level))
    }

    #[test]
    fn low_stock_includes_equality() {
        assert!(item(5, 5).is_low_stock());
        assert!(item(0, 0).is_low_stock());
        assert!(!item(6, 5).is_low_stock());
    }

    #[test]
    fn stock_level_bands() {
        assert_eq!(StockLevel::classify(0), StockLevel::Critical);
        assert_eq!(StockLevel::classify(5), StockLevel::Critical);
        assert_eq!(StockLevel::classify(6), StockLevel::Low);
        assert_eq!(StockLevel::classify(15), StockLevel::Low);
        assert_eq!(StockLevel::classify(16), StockLevel::Healthy);
        assert_eq!(item(20, 10).stock_level().color(), "green");
    }

    #[test]
    fn gauge_saturates_at_max() {
        assert_eq!(item(0, 0).gauge_fraction(), 0.0);
        assert_eq!(item(25, 0).gauge_fraction(), 0.5);
        assert_eq!(item(STOCK_GAUGE_MAX, 0).gauge_fraction(), 1.0);
        assert_eq!(item(500, 0).gauge_fraction(), 1.0);
    }

    #[test]
    fn draft_validation_rejects_blank_fields() {
        let err = ItemDraft::new(" ", "Furniture", 1, 1).validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("name")));

        let err = ItemDraft::new("Desk", "", 1, 1).validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("category")));

        assert!(ItemDraft::new("Desk", "Furniture", 0, 0).validate().is_ok());
    }

    #[test]
    fn to_draft_round_trips_fields() {
        let draft = ItemDraft::new("Notebook", "Stationery", 20, 10).with_supplier(SupplierId::new(1));
        let item = InventoryItem::from_draft(ItemId::new(3), draft.clone());
        assert_eq!(item.to_draft(), draft);
        assert_eq!(item.id(), ItemId::new(3));
    }

    proptest! {
        #[test]
        fn low_stock_matches_predicate(stock in 0u32..1000, reorder in 0u32..1000) {
            prop_assert_eq!(item(stock, reorder).is_low_stock(), stock <= reorder);
        }
    }
}
