//! Strongly-typed identifiers and store-side id allocation.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of an inventory item.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

/// Identifier of a supplier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierId(u64);

macro_rules! impl_int_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap a raw id. Ids are assigned by stores; prefer passing them
            /// explicitly only in tests and fixtures.
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            pub const fn get(&self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<$t> for u64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                if raw == 0 {
                    return Err(DomainError::invalid_id(format!("{}: must be positive", $name)));
                }
                Ok(Self(raw))
            }
        }
    };
}

impl_int_newtype!(ItemId, "ItemId");
impl_int_newtype!(SupplierId, "SupplierId");

/// How a store picks the id of the next inserted entity.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Highest id ever issued + 1. Ids are never reused.
    #[default]
    Monotonic,
    /// Current entity count + 1.
    ///
    /// Legacy dashboard behaviour: after a delete followed by an insert the
    /// new id can equal one still in use.
    CountPlusOne,
}

impl FromStr for IdStrategy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monotonic" => Ok(Self::Monotonic),
            "count" | "count_plus_one" => Ok(Self::CountPlusOne),
            other => Err(DomainError::validation(format!("unknown id strategy: {other}"))),
        }
    }
}

/// Issues raw ids for one store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdAllocator {
    strategy: IdStrategy,
    high_water: u64,
}

impl IdAllocator {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            high_water: 0,
        }
    }

    /// Record an id that entered the store from outside the allocator
    /// (seeded data), so monotonic allocation never hands it out again.
    pub fn observe(&mut self, raw: u64) {
        self.high_water = self.high_water.max(raw);
    }

    /// Allocate the next raw id given the store's current entity count.
    pub fn next(&mut self, current_len: usize) -> u64 {
        let raw = match self.strategy {
            IdStrategy::Monotonic => self.high_water + 1,
            IdStrategy::CountPlusOne => current_len as u64 + 1,
        };
        self.observe(raw);
        raw
    }
}
