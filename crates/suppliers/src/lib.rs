//! Supplier domain module.

pub mod store;
pub mod supplier;

pub use store::SupplierStore;
pub use supplier::{Supplier, SupplierDraft};
