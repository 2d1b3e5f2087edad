//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;

    /// Build the identifier from an allocator-issued raw value.
    fn id_from_raw(raw: u64) -> Self::Id;

    /// Raw value of an identifier (fed back to the allocator when seeding).
    fn raw_id(id: Self::Id) -> u64;
}
