//! Dashboard state container.
//!
//! [`Dashboard`] owns every store and tracker. Commands take `&mut self` and
//! finish their derived-view recompute before returning, so readers never
//! observe a stale view.

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use stockroom_ai::{Prediction, PredictionService, StockPredictor};
use stockroom_core::{Entity, ItemId, SupplierId};
use stockroom_inventory::{CategoryFilter, InventoryItem, InventoryStore, ItemDraft, StockLevel};
use stockroom_suppliers::{Supplier, SupplierDraft, SupplierStore};

use crate::command::{CommandOutcome, DashboardCommand};
use crate::config::DashboardConfig;
use crate::derived::{DerivedView, Totals};
use crate::export::{ExportArtifact, ExportError, MISSING_SUPPLIER, export_inventory};
use crate::filter::FilterCriteria;
use crate::fixtures;
use crate::loading::LoadingIndicator;
use crate::selection::SelectionTracker;

/// One grid row: an item joined with its display-only extras.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemRow {
    #[serde(flatten)]
    pub item: InventoryItem,
    pub supplier_name: String,
    pub low_stock: bool,
    pub stock_level: StockLevel,
    /// Fill of the stock gauge, `0.0..=1.0`.
    pub gauge: f64,
    pub selected: bool,
    pub prediction: Option<f64>,
}

/// Read-only projection handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub totals: Totals,
    pub score: u64,
    pub low_stock_warning: bool,
    pub loading: bool,
    pub criteria: FilterCriteria,
    pub items: Vec<ItemRow>,
    pub page_count: usize,
    pub low_stock: Vec<ItemId>,
    pub selected: Vec<ItemId>,
    pub suppliers: Vec<Supplier>,
}

#[derive(Debug)]
pub struct Dashboard {
    config: DashboardConfig,
    inventory: InventoryStore,
    suppliers: SupplierStore,
    criteria: FilterCriteria,
    selection: SelectionTracker,
    derived: DerivedView,
    loading: LoadingIndicator,
    predictions: PredictionService,
}

impl Dashboard {
    /// Empty dashboard.
    pub fn new(config: DashboardConfig, predictor: Arc<dyn StockPredictor>) -> Self {
        let inventory = InventoryStore::new(config.id_strategy);
        let suppliers = SupplierStore::new(config.id_strategy);
        Self::from_parts(config, inventory, suppliers, predictor)
    }

    /// Dashboard preloaded with the sample items and suppliers.
    pub fn with_sample_data(config: DashboardConfig, predictor: Arc<dyn StockPredictor>) -> Self {
        let inventory = fixtures::sample_inventory_with(config.id_strategy);
        let suppliers = fixtures::sample_suppliers_with(config.id_strategy);
        Self::from_parts(config, inventory, suppliers, predictor)
    }

    pub fn from_parts(
        config: DashboardConfig,
        inventory: InventoryStore,
        suppliers: SupplierStore,
        predictor: Arc<dyn StockPredictor>,
    ) -> Self {
        let mut dashboard = Self {
            loading: LoadingIndicator::new(config.loading_duration),
            config,
            inventory,
            suppliers,
            criteria: FilterCriteria::default(),
            selection: SelectionTracker::new(),
            derived: DerivedView::default(),
            predictions: PredictionService::new(predictor),
        };
        dashboard.inventory_changed();
        dashboard
    }

    // ---------------------------------------------------------------------
    // Commands
    // ---------------------------------------------------------------------

    /// Run one presentation command to completion.
    pub fn dispatch(&mut self, command: DashboardCommand) -> CommandOutcome {
        debug!(command = command.name(), "dispatching dashboard command");
        match command {
            DashboardCommand::AddItem(draft) => CommandOutcome::ItemAdded { id: self.add_item(draft) },
            DashboardCommand::EditItem { id, draft } => CommandOutcome::Applied {
                changed: self.edit_item(id, draft),
            },
            DashboardCommand::DeleteItem(id) => CommandOutcome::Applied {
                changed: self.delete_item(id),
            },
            DashboardCommand::BulkDelete => CommandOutcome::BulkDeleted {
                removed: self.bulk_delete(),
            },
            DashboardCommand::AddSupplier(draft) => CommandOutcome::SupplierAdded {
                id: self.add_supplier(draft),
            },
            DashboardCommand::EditSupplier { id, draft } => CommandOutcome::Applied {
                changed: self.edit_supplier(id, draft),
            },
            DashboardCommand::DeleteSupplier(id) => CommandOutcome::Applied {
                changed: self.delete_supplier(id),
            },
            DashboardCommand::ToggleSelection(id) => CommandOutcome::SelectionToggled {
                selected: self.toggle_selection(id),
            },
            DashboardCommand::SetSearchTerm(term) => CommandOutcome::Applied {
                changed: self.set_search_term(term),
            },
            DashboardCommand::SetSelectedCategory(category) => CommandOutcome::Applied {
                changed: self.set_selected_category(category),
            },
            DashboardCommand::RequestPrediction(id) => CommandOutcome::PredictionRequested {
                scheduled: self.request_prediction(id).is_some(),
            },
        }
    }

    pub fn add_item(&mut self, draft: ItemDraft) -> ItemId {
        let id = self.inventory.add_item(draft);
        self.inventory_changed();
        id
    }

    pub fn edit_item(&mut self, id: ItemId, draft: ItemDraft) -> bool {
        let changed = self.inventory.edit_item(id, draft);
        self.inventory_changed();
        changed
    }

    /// Also drops the id from the selection and its cached prediction.
    pub fn delete_item(&mut self, id: ItemId) -> bool {
        let changed = self.inventory.delete_item(id);
        if changed {
            self.selection.forget(id);
            self.predictions.cache().forget(id);
        }
        self.inventory_changed();
        changed
    }

    /// Delete every selected item and clear the selection.
    pub fn bulk_delete(&mut self) -> usize {
        let selected = self.selection.to_set();
        let removed = self.inventory.bulk_delete(&selected);
        for id in &selected {
            self.predictions.cache().forget(*id);
        }
        self.selection.clear();
        self.inventory_changed();
        info!(removed, "bulk delete applied");
        removed
    }

    pub fn add_supplier(&mut self, draft: SupplierDraft) -> SupplierId {
        self.suppliers.add_supplier(draft)
    }

    pub fn edit_supplier(&mut self, id: SupplierId, draft: SupplierDraft) -> bool {
        self.suppliers.edit_supplier(id, draft)
    }

    /// Items referencing the supplier keep their `supplier_id`.
    pub fn delete_supplier(&mut self, id: SupplierId) -> bool {
        self.suppliers.delete_supplier(id)
    }

    /// Returns whether `id` is selected afterwards. Ids not in the inventory
    /// are ignored, so the selection only ever holds existing items.
    pub fn toggle_selection(&mut self, id: ItemId) -> bool {
        if !self.inventory.contains(id) {
            debug!(item_id = %id, "selection toggle for unknown item ignored");
            return false;
        }
        self.selection.toggle(id)
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        let changed = self.criteria.search_term != term;
        self.criteria.search_term = term;
        self.recompute();
        changed
    }

    pub fn set_selected_category(&mut self, category: CategoryFilter) -> bool {
        let changed = self.criteria.category != category;
        self.criteria.category = category;
        self.recompute();
        changed
    }

    /// Start a background prediction for the item's current stock.
    ///
    /// Returns `None` when the item is unknown or no tokio runtime is running.
    pub fn request_prediction(&self, id: ItemId) -> Option<JoinHandle<()>> {
        let Some(item) = self.inventory.get(id) else {
            debug!(item_id = %id, "prediction requested for unknown item");
            return None;
        };
        self.predictions.request(id, item.name(), item.stock())
    }

    fn inventory_changed(&mut self) {
        self.recompute();
        self.loading.mark(Instant::now());
    }

    fn recompute(&mut self) {
        self.derived = DerivedView::compute(self.inventory.as_slice(), &self.criteria);
        debug!(
            filtered = self.derived.filtered().len(),
            low_stock = self.derived.totals().low_stock_count,
            score = self.derived.score(),
            "derived view recomputed"
        );
    }

    // ---------------------------------------------------------------------
    // Read access
    // ---------------------------------------------------------------------

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn inventory(&self) -> &InventoryStore {
        &self.inventory
    }

    pub fn suppliers(&self) -> &SupplierStore {
        &self.suppliers
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn derived(&self) -> &DerivedView {
        &self.derived
    }

    pub fn filtered_items(&self) -> &[InventoryItem] {
        self.derived.filtered()
    }

    pub fn low_stock_items(&self) -> &[InventoryItem] {
        self.derived.low_stock()
    }

    pub fn totals(&self) -> Totals {
        self.derived.totals()
    }

    pub fn score(&self) -> u64 {
        self.derived.score()
    }

    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading_at(Instant::now())
    }

    pub fn is_loading_at(&self, now: Instant) -> bool {
        self.loading.is_loading(now)
    }

    /// Supplier display name, `N/A` when blank or dangling.
    pub fn supplier_name(&self, id: Option<SupplierId>) -> &str {
        self.suppliers.name_of(id).unwrap_or(MISSING_SUPPLIER)
    }

    pub fn prediction(&self, id: ItemId) -> Option<Prediction> {
        self.predictions.cache().get(id)
    }

    /// Rows of the whole filtered list.
    pub fn rows(&self) -> Vec<ItemRow> {
        self.to_rows(self.derived.filtered())
    }

    /// Rows of one page of the filtered list.
    pub fn page_rows(&self, index: usize) -> Vec<ItemRow> {
        self.to_rows(self.derived.page(index, self.config.page_size))
    }

    pub fn page_count(&self) -> usize {
        self.derived.page_count(self.config.page_size)
    }

    pub fn export(&self) -> Result<ExportArtifact, ExportError> {
        export_inventory(&self.inventory, &self.suppliers)
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            totals: self.totals(),
            score: self.score(),
            low_stock_warning: self.derived.has_low_stock_warning(),
            loading: self.is_loading(),
            criteria: self.criteria.clone(),
            items: self.rows(),
            page_count: self.page_count(),
            low_stock: self.derived.low_stock().iter().map(|i| i.id()).collect(),
            selected: self.selection.ids().to_vec(),
            suppliers: self.suppliers.iter().cloned().collect(),
        }
    }

    fn to_rows(&self, items: &[InventoryItem]) -> Vec<ItemRow> {
        items
            .iter()
            .map(|item| ItemRow {
                supplier_name: self.supplier_name(item.supplier_id()).to_string(),
                low_stock: item.is_low_stock(),
                stock_level: item.stock_level(),
                gauge: item.gauge_fraction(),
                selected: self.selection.is_selected(item.id()),
                prediction: self.prediction(item.id()).map(|p| p.value),
                item: item.clone(),
            })
            .collect()
    }
}
