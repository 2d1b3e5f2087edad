//! Derived view: low-stock set, filtered list, totals and score.
//!
//! Everything here is a pure function of the inventory slice and the filter
//! criteria. [`DerivedView`] caches the results; the dashboard rebuilds it
//! synchronously after every inventory or filter change.

use serde::{Deserialize, Serialize};

use stockroom_inventory::InventoryItem;

use crate::filter::FilterCriteria;

/// Points awarded for each item that is not low-stock.
pub const POINTS_PER_HEALTHY_ITEM: u64 = 10;

/// Summary cards. Always computed over the whole inventory, never the
/// filtered subset.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub total_items: usize,
    pub total_stock: u64,
    pub low_stock_count: usize,
}

pub fn low_stock_items(items: &[InventoryItem]) -> Vec<InventoryItem> {
    items.iter().filter(|i| i.is_low_stock()).cloned().collect()
}

pub fn totals(items: &[InventoryItem]) -> Totals {
    Totals {
        total_items: items.len(),
        total_stock: items.iter().map(|i| u64::from(i.stock())).sum(),
        low_stock_count: items.iter().filter(|i| i.is_low_stock()).count(),
    }
}

/// `10 × |{ item : stock > reorder_level }|`. Not cumulative.
pub fn score(items: &[InventoryItem]) -> u64 {
    items.iter().filter(|i| !i.is_low_stock()).count() as u64 * POINTS_PER_HEALTHY_ITEM
}

/// Cached derived values. Never mutated independently of a recompute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedView {
    filtered: Vec<InventoryItem>,
    low_stock: Vec<InventoryItem>,
    totals: Totals,
    score: u64,
}

impl DerivedView {
    pub fn compute(items: &[InventoryItem], criteria: &FilterCriteria) -> Self {
        Self {
            filtered: criteria.apply(items).cloned().collect(),
            low_stock: low_stock_items(items),
            totals: totals(items),
            score: score(items),
        }
    }

    /// Filtered list in store order.
    pub fn filtered(&self) -> &[InventoryItem] {
        &self.filtered
    }

    pub fn low_stock(&self) -> &[InventoryItem] {
        &self.low_stock
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Whether the low-stock warning banner should show.
    pub fn has_low_stock_warning(&self) -> bool {
        !self.low_stock.is_empty()
    }

    /// One page of the filtered list. Pages past the end are empty.
    pub fn page(&self, index: usize, page_size: usize) -> &[InventoryItem] {
        let size = page_size.max(1);
        let start = index.saturating_mul(size).min(self.filtered.len());
        let end = start.saturating_add(size).min(self.filtered.len());
        &self.filtered[start..end]
    }

    pub fn page_count(&self, page_size: usize) -> usize {
        self.filtered.len().div_ceil(page_size.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use stockroom_core::{Entity, ItemId};
    use stockroom_inventory::{CategoryFilter, ItemDraft};

    fn item(id: u64, stock: u32, reorder: u32) -> InventoryItem {
        InventoryItem::from_draft(ItemId::new(id), ItemDraft::new(format!("item-{id}"), "Electronics", stock, reorder))
    }

    #[test]
    fn score_counts_items_above_reorder_level() {
        // 3 items, 2 above reorder level.
        let items = vec![item(1, 10, 5), item(2, 3, 3), item(3, 20, 10)];
        assert_eq!(score(&items), 20);
    }

    #[test]
    fn totals_ignore_the_active_filter() {
        let items = vec![item(1, 10, 5), item(2, 3, 3), item(3, 20, 10)];
        let criteria = FilterCriteria::new("item-1", CategoryFilter::All);
        let view = DerivedView::compute(&items, &criteria);

        assert_eq!(view.filtered().len(), 1);
        assert_eq!(
            view.totals(),
            Totals {
                total_items: 3,
                total_stock: 33,
                low_stock_count: 1,
            }
        );
        assert_eq!(view.low_stock().iter().map(|i| i.id()).collect::<Vec<_>>(), vec![ItemId::new(2)]);
        assert!(view.has_low_stock_warning());
    }

    #[test]
    fn empty_inventory_has_no_warning_and_zero_score() {
        let view = DerivedView::compute(&[], &FilterCriteria::default());
        assert_eq!(view.totals(), Totals::default());
        assert_eq!(view.score(), 0);
        assert!(!view.has_low_stock_warning());
        assert_eq!(view.page_count(5), 0);
    }

    #[test]
    fn pages_slice_the_filtered_list() {
        let items: Vec<_> = (1..=7).map(|i| item(i, 10, 1)).collect();
        let view = DerivedView::compute(&items, &FilterCriteria::default());

        assert_eq!(view.page_count(5), 2);
        assert_eq!(view.page(0, 5).len(), 5);
        assert_eq!(view.page(1, 5).iter().map(|i| i.id().get()).collect::<Vec<_>>(), vec![6, 7]);
        assert!(view.page(2, 5).is_empty());
        assert!(view.page(usize::MAX, 5).is_empty());
    }

    proptest! {
        /// Property: the low-stock set and the score partition the inventory.
        #[test]
        fn low_stock_and_score_agree(levels in prop::collection::vec((0u32..50, 0u32..50), 0..40)) {
            let items: Vec<_> = levels.iter().enumerate().map(|(i, (s, r))| item(i as u64 + 1, *s, *r)).collect();
            let view = DerivedView::compute(&items, &FilterCriteria::default());

            let expected_low = levels.iter().filter(|(s, r)| s <= r).count();
            prop_assert_eq!(view.low_stock().len(), expected_low);
            prop_assert!(view.low_stock().iter().all(|i| i.stock() <= i.reorder_level()));
            prop_assert_eq!(view.score(), 10 * (items.len() - expected_low) as u64);
        }
    }
}
