//! `stockroom-dashboard` — the dashboard's data layer.
//!
//! Owns the inventory and supplier stores, derives the views the
//! presentation layer renders (filtered list, low-stock set, totals, score),
//! tracks the bulk-selection set and serialises the CSV export.

pub mod command;
pub mod config;
pub mod derived;
pub mod export;
pub mod filter;
pub mod fixtures;
pub mod loading;
pub mod selection;
pub mod state;

pub use command::{CommandOutcome, DashboardCommand};
pub use config::{ConfigError, DashboardConfig};
pub use derived::{DerivedView, POINTS_PER_HEALTHY_ITEM, Totals};
pub use export::{EXPORT_FILE_NAME, ExportArtifact, ExportError, export_inventory};
pub use filter::FilterCriteria;
pub use loading::LoadingIndicator;
pub use selection::SelectionTracker;
pub use state::{Dashboard, DashboardSnapshot, ItemRow};
