//! Inventory domain module.
//!
//! Items, categories and the in-memory inventory store. Pure domain logic
//! (no IO, no async).

pub mod category;
pub mod item;
pub mod store;

pub use category::{ALL_CATEGORIES, CategoryFilter, SUGGESTED_CATEGORIES};
pub use item::{InventoryItem, ItemDraft, STOCK_GAUGE_MAX, StockLevel};
pub use store::InventoryStore;
