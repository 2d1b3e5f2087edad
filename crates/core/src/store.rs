//! Ordered in-memory entity store shared by the inventory and supplier stores.

use tracing::debug;

use crate::entity::Entity;
use crate::id::{IdAllocator, IdStrategy};

/// Insertion-ordered collection of entities with store-assigned ids.
///
/// Lookups that match by id act on *every* entry carrying that id, so the
/// store behaves consistently even when `IdStrategy::CountPlusOne` has
/// produced a duplicate.
#[derive(Debug, Clone)]
pub struct EntityStore<T: Entity> {
    entries: Vec<T>,
    ids: IdAllocator,
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new(IdStrategy::default())
    }
}

impl<T: Entity> EntityStore<T> {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            entries: Vec::new(),
            ids: IdAllocator::new(strategy),
        }
    }

    /// Build a store from existing entities, keeping their ids.
    pub fn seeded(strategy: IdStrategy, entries: impl IntoIterator<Item = T>) -> Self {
        let mut ids = IdAllocator::new(strategy);
        let entries: Vec<T> = entries.into_iter().collect();
        for e in &entries {
            ids.observe(T::raw_id(e.id()));
        }
        Self { entries, ids }
    }

    /// Allocate an id and append the entity built from it.
    pub fn insert_with(&mut self, build: impl FnOnce(T::Id) -> T) -> T::Id {
        let id = T::id_from_raw(self.ids.next(self.entries.len()));
        self.entries.push(build(id));
        debug!(%id, len = self.entries.len(), "entity inserted");
        id
    }

    /// Replace every entry matching `id`, preserving the id.
    ///
    /// Returns `false` (and changes nothing) if no entry matches.
    pub fn replace_with(&mut self, id: T::Id, build: impl Fn(T::Id) -> T) -> bool {
        let mut replaced = false;
        for slot in self.entries.iter_mut().filter(|e| e.id() == id) {
            *slot = build(id);
            replaced = true;
        }
        debug!(%id, replaced, "entity replace");
        replaced
    }

    /// Remove every entry matching `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: T::Id) -> bool {
        self.remove_where(|e| e.id() == id) > 0
    }

    /// Remove every entry for which `pred` holds. Returns the number removed.
    pub fn remove_where(&mut self, mut pred: impl FnMut(&T) -> bool) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| !pred(e));
        let removed = before - self.entries.len();
        debug!(removed, len = self.entries.len(), "entities removed");
        removed
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Note {
        id: u64,
        text: &'static str,
    }

    impl Entity for Note {
        type Id = u64;

        fn id(&self) -> u64 {
            self.id
        }

        fn id_from_raw(raw: u64) -> u64 {
            raw
        }

        fn raw_id(id: u64) -> u64 {
            id
        }
    }

    fn note(text: &'static str) -> impl FnOnce(u64) -> Note {
        move |id| Note { id, text }
    }

    #[test]
    fn insert_assigns_sequential_ids_in_order() {
        let mut store = EntityStore::<Note>::default();
        assert_eq!(store.insert_with(note("a")), 1);
        assert_eq!(store.insert_with(note("b")), 2);
        let texts: Vec<_> = store.iter().map(|n| n.text).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[test]
    fn replace_and_remove_missing_are_noops() {
        let mut store = EntityStore::<Note>::default();
        store.insert_with(note("a"));
        assert!(!store.replace_with(9, |id| Note { id, text: "x" }));
        assert!(!store.remove(9));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(1).map(|n| n.text), Some("a"));
    }

    #[test]
    fn replace_preserves_id() {
        let mut store = EntityStore::<Note>::default();
        let id = store.insert_with(note("a"));
        assert!(store.replace_with(id, |id| Note { id, text: "b" }));
        assert_eq!(store.get(id), Some(&Note { id, text: "b" }));
    }

    #[test]
    fn seeded_store_continues_after_highest_id() {
        let mut store = EntityStore::seeded(
            IdStrategy::Monotonic,
            vec![Note { id: 5, text: "a" }, Note { id: 2, text: "b" }],
        );
        assert_eq!(store.insert_with(note("c")), 6);
    }

    #[test]
    fn count_plus_one_can_collide_after_delete() {
        let mut store = EntityStore::<Note>::new(IdStrategy::CountPlusOne);
        store.insert_with(note("a"));
        store.insert_with(note("b"));
        store.insert_with(note("c"));
        assert!(store.remove(2));
        let id = store.insert_with(note("d"));
        assert_eq!(id, 3);
        assert_eq!(store.iter().filter(|n| n.id == 3).count(), 2);
    }

    proptest! {
        /// Property: with monotonic allocation, ids stay unique under any
        /// interleaving of inserts and deletes.
        #[test]
        fn monotonic_ids_stay_unique(ops in prop::collection::vec((any::<bool>(), 1u64..20), 1..60)) {
            let mut store = EntityStore::<Note>::new(IdStrategy::Monotonic);
            for (insert, target) in ops {
                if insert {
                    store.insert_with(note("n"));
                } else {
                    store.remove(target);
                }
            }
            let mut ids: Vec<u64> = store.iter().map(|n| n.id).collect();
            let before = ids.len();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), before);
        }
    }
}
