//! Presentation-facing command set.
//!
//! Every write the presentation layer can perform is one [`DashboardCommand`].
//! [`Dashboard::dispatch`](crate::Dashboard::dispatch) runs it to completion,
//! including the derived-view recompute, before returning:
//!
//! ```text
//! DashboardCommand
//!   ↓
//! 1. Mutate the owning store / tracker / filter
//!   ↓
//! 2. Recompute the derived view (inventory + filter changes)
//!   ↓
//! 3. CommandOutcome back to the caller
//! ```
//!
//! Commands against ids that do not exist are no-ops, reported as
//! `changed: false` rather than as errors.

use serde::{Deserialize, Serialize};

use stockroom_core::{ItemId, SupplierId};
use stockroom_inventory::{CategoryFilter, ItemDraft};
use stockroom_suppliers::SupplierDraft;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum DashboardCommand {
    AddItem(ItemDraft),
    EditItem { id: ItemId, draft: ItemDraft },
    DeleteItem(ItemId),
    /// Delete every currently selected item, then clear the selection.
    BulkDelete,
    AddSupplier(SupplierDraft),
    EditSupplier { id: SupplierId, draft: SupplierDraft },
    DeleteSupplier(SupplierId),
    ToggleSelection(ItemId),
    SetSearchTerm(String),
    SetSelectedCategory(CategoryFilter),
    RequestPrediction(ItemId),
}

impl DashboardCommand {
    /// Short command name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            DashboardCommand::AddItem(_) => "add_item",
            DashboardCommand::EditItem { .. } => "edit_item",
            DashboardCommand::DeleteItem(_) => "delete_item",
            DashboardCommand::BulkDelete => "bulk_delete",
            DashboardCommand::AddSupplier(_) => "add_supplier",
            DashboardCommand::EditSupplier { .. } => "edit_supplier",
            DashboardCommand::DeleteSupplier(_) => "delete_supplier",
            DashboardCommand::ToggleSelection(_) => "toggle_selection",
            DashboardCommand::SetSearchTerm(_) => "set_search_term",
            DashboardCommand::SetSelectedCategory(_) => "set_selected_category",
            DashboardCommand::RequestPrediction(_) => "request_prediction",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CommandOutcome {
    ItemAdded { id: ItemId },
    SupplierAdded { id: SupplierId },
    /// Edit/delete/filter command; `changed` is false when nothing matched.
    Applied { changed: bool },
    BulkDeleted { removed: usize },
    SelectionToggled { selected: bool },
    /// `scheduled` is false when the item is unknown or no runtime is available.
    PredictionRequested { scheduled: bool },
}
