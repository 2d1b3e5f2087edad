//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no async).

pub mod entity;
pub mod error;
pub mod id;
pub mod store;

pub use entity::Entity;
pub use error::{DomainError, DomainResult, require_text};
pub use id::{IdAllocator, IdStrategy, ItemId, SupplierId};
pub use store::EntityStore;
