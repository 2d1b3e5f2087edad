use tracing::debug;

use stockroom_core::{EntityStore, IdStrategy, SupplierId};

use crate::supplier::{Supplier, SupplierDraft};

/// Owns the supplier list.
///
/// Deleting a supplier never touches items that reference it; callers
/// resolve such dangling ids through [`SupplierStore::name_of`].
#[derive(Debug, Clone, Default)]
pub struct SupplierStore {
    suppliers: EntityStore<Supplier>,
}

impl SupplierStore {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            suppliers: EntityStore::new(strategy),
        }
    }

    pub fn seeded(strategy: IdStrategy, suppliers: impl IntoIterator<Item = Supplier>) -> Self {
        Self {
            suppliers: EntityStore::seeded(strategy, suppliers),
        }
    }

    pub fn add_supplier(&mut self, draft: SupplierDraft) -> SupplierId {
        let id = self.suppliers.insert_with(|id| Supplier::from_draft(id, draft));
        debug!(supplier_id = %id, "supplier added");
        id
    }

    /// No-op if `id` is unknown.
    pub fn edit_supplier(&mut self, id: SupplierId, draft: SupplierDraft) -> bool {
        let edited = self
            .suppliers
            .replace_with(id, |id| Supplier::from_draft(id, draft.clone()));
        debug!(supplier_id = %id, edited, "supplier edit");
        edited
    }

    /// No-op if `id` is unknown.
    pub fn delete_supplier(&mut self, id: SupplierId) -> bool {
        let deleted = self.suppliers.remove(id);
        debug!(supplier_id = %id, deleted, "supplier delete");
        deleted
    }

    pub fn get(&self, id: SupplierId) -> Option<&Supplier> {
        self.suppliers.get(id)
    }

    /// Name of the referenced supplier, if it still exists.
    pub fn name_of(&self, id: Option<SupplierId>) -> Option<&str> {
        id.and_then(|id| self.get(id)).map(Supplier::name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Supplier> {
        self.suppliers.iter()
    }

    pub fn len(&self) -> usize {
        self.suppliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suppliers.is_empty()
    }
}
