use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::ItemId;

/// Latest successful prediction for an item.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub value: f64,
    pub predicted_at: DateTime<Utc>,
}

/// Side map of predictions keyed by item id, shared with running tasks.
///
/// Read only by the presentation layer; never feeds back into inventory state.
/// [`forget`](Self::forget) bumps the item's generation, so a task started
/// before the delete cannot write its result back afterwards.
#[derive(Debug, Clone, Default)]
pub struct PredictionCache {
    inner: Arc<RwLock<Entries>>,
}

#[derive(Debug, Default)]
struct Entries {
    predictions: HashMap<ItemId, Prediction>,
    generations: HashMap<ItemId, u64>,
}

impl PredictionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, item_id: ItemId) -> Option<Prediction> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .predictions
            .get(&item_id)
            .copied()
    }

    /// Current generation of `item_id`; captured when a prediction starts.
    pub fn generation(&self, item_id: ItemId) -> u64 {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .generations
            .get(&item_id)
            .copied()
            .unwrap_or(0)
    }

    /// Store `prediction` unless the item was forgotten since `generation`
    /// was captured. Returns whether the entry was written.
    pub fn insert(&self, item_id: ItemId, generation: u64, prediction: Prediction) -> bool {
        let mut entries = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if entries.generations.get(&item_id).copied().unwrap_or(0) != generation {
            return false;
        }
        entries.predictions.insert(item_id, prediction);
        true
    }

    /// Drop the entry of a deleted item and invalidate its in-flight tasks.
    pub fn forget(&self, item_id: ItemId) {
        let mut entries = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        entries.predictions.remove(&item_id);
        *entries.generations.entry(item_id).or_insert(0) += 1;
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .predictions
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() {
        let cache = PredictionCache::new();
        let other = cache.clone();
        let p = Prediction {
            value: 4.5,
            predicted_at: Utc::now(),
        };
        assert!(other.insert(ItemId::new(1), 0, p));
        assert_eq!(cache.get(ItemId::new(1)), Some(p));
        assert_eq!(cache.len(), 1);

        cache.forget(ItemId::new(1));
        assert!(other.is_empty());
    }

    #[test]
    fn insert_from_before_forget_is_rejected() {
        let cache = PredictionCache::new();
        let p = Prediction {
            value: 4.5,
            predicted_at: Utc::now(),
        };
        let started = cache.generation(ItemId::new(2));
        cache.forget(ItemId::new(2));

        assert!(!cache.insert(ItemId::new(2), started, p));
        assert!(cache.get(ItemId::new(2)).is_none());

        // A request started after the delete writes normally.
        let restarted = cache.generation(ItemId::new(2));
        assert_eq!(restarted, started + 1);
        assert!(cache.insert(ItemId::new(2), restarted, p));
        assert_eq!(cache.get(ItemId::new(2)), Some(p));
    }
}
