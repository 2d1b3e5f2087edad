//! CSV export of the inventory joined with supplier names.

use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use thiserror::Error;
use tracing::info;

use stockroom_core::Entity;
use stockroom_inventory::InventoryStore;
use stockroom_suppliers::SupplierStore;

pub const EXPORT_FILE_NAME: &str = "inventory.csv";
pub const EXPORT_MEDIA_TYPE: &str = "text/csv;charset=utf-8";
pub const EXPORT_HEADER: [&str; 6] = ["ID", "Name", "Category", "Stock", "Reorder Level", "Supplier"];
/// Supplier column value when the reference is blank or dangling.
pub const MISSING_SUPPLIER: &str = "N/A";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("export io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("export produced invalid utf-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Downloadable export blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    content: String,
}

impl ExportArtifact {
    pub fn file_name(&self) -> &'static str {
        EXPORT_FILE_NAME
    }

    pub fn media_type(&self) -> &'static str {
        EXPORT_MEDIA_TYPE
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }

    /// Write the blob as `inventory.csv` inside `dir`.
    pub fn save_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
        let path = dir.as_ref().join(EXPORT_FILE_NAME);
        std::fs::write(&path, self.bytes())?;
        info!(path = %path.display(), bytes = self.content.len(), "inventory export saved");
        Ok(path)
    }
}

/// Header row, then one row per item in store order.
///
/// Fields are written verbatim with no quoting or escaping; rows are joined
/// by `\n` with no trailing newline.
pub fn export_inventory(items: &InventoryStore, suppliers: &SupplierStore) -> Result<ExportArtifact, ExportError> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(EXPORT_HEADER)?;
    for item in items.iter() {
        let supplier = suppliers.name_of(item.supplier_id()).unwrap_or(MISSING_SUPPLIER);
        wtr.write_record([
            item.id().to_string().as_str(),
            item.name(),
            item.category(),
            item.stock().to_string().as_str(),
            item.reorder_level().to_string().as_str(),
            supplier,
        ])?;
    }

    let buf = wtr.into_inner().map_err(|e| ExportError::Io(e.into_error()))?;
    let mut content = String::from_utf8(buf)?;
    if content.ends_with('\n') {
        content.pop();
    }

    info!(rows = items.len(), "inventory exported");
    Ok(ExportArtifact { content })
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::{IdStrategy, SupplierId};
    use stockroom_inventory::ItemDraft;
    use stockroom_suppliers::SupplierDraft;

    use crate::fixtures;

    #[test]
    fn sample_export_matches_expected_text() {
        let artifact = export_inventory(&fixtures::sample_inventory(), &fixtures::sample_suppliers()).unwrap();
        assert_eq!(
            artifact.as_str(),
            "ID,Name,Category,Stock,Reorder Level,Supplier\n\
             1,Laptop,Electronics,10,5,Tech Supplier Inc.\n\
             2,Desk Chair,Furniture,5,3,Furniture World\n\
             3,Notebook,Stationery,20,10,Tech Supplier Inc."
        );
        assert_eq!(artifact.file_name(), "inventory.csv");
        assert_eq!(artifact.media_type(), "text/csv;charset=utf-8");
    }

    #[test]
    fn dangling_or_blank_supplier_exports_na() {
        let mut items = InventoryStore::new(IdStrategy::Monotonic);
        items.add_item(ItemDraft::new("Lamp", "Furniture", 4, 2).with_supplier(SupplierId::new(99)));
        items.add_item(ItemDraft::new("Pen", "Stationery", 40, 10));
        let mut suppliers = SupplierStore::default();
        suppliers.add_supplier(SupplierDraft::new("Tech Supplier Inc.", "tech@example.com"));

        let artifact = export_inventory(&items, &suppliers).unwrap();
        let lines: Vec<&str> = artifact.as_str().lines().collect();
        assert_eq!(lines.len(), 1 + items.len());
        assert!(lines[1].ends_with(",N/A"));
        assert!(lines[2].ends_with(",N/A"));
    }

    #[test]
    fn empty_inventory_exports_header_only() {
        let artifact = export_inventory(&InventoryStore::default(), &SupplierStore::default()).unwrap();
        assert_eq!(artifact.as_str(), "ID,Name,Category,Stock,Reorder Level,Supplier");
    }

    #[test]
    fn embedded_commas_are_not_escaped() {
        let mut items = InventoryStore::default();
        items.add_item(ItemDraft::new("Chair, oak", "Furniture", 1, 1));
        let artifact = export_inventory(&items, &SupplierStore::default()).unwrap();
        assert_eq!(artifact.as_str().lines().nth(1), Some("1,Chair, oak,Furniture,1,1,N/A"));
    }

    #[test]
    fn save_to_writes_named_file() {
        let dir = std::env::temp_dir().join(format!("stockroom-export-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let artifact = export_inventory(&fixtures::sample_inventory(), &fixtures::sample_suppliers()).unwrap();
        let path = artifact.save_to(&dir).unwrap();

        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("inventory.csv"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), artifact.as_str());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
