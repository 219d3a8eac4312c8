//! Favorites store.
//!
//! An ordered set of pinned tool ids, in the order they were added,
//! holding at most [`MAX_FAVORITES`] entries.

use serde::Serialize;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info};

use super::list::PersistedIdList;
use super::storage::{FAVORITES_KEY, PreferenceStorage};

/// Maximum number of favorites.
pub const MAX_FAVORITES: usize = 8;

/// What a call to [`FavoritesStore::toggle`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// The id was absent and the store is at capacity; nothing changed.
    Rejected,
}

pub struct FavoritesStore {
    list: PersistedIdList,
}

impl FavoritesStore {
    /// Open the store, loading any persisted favorites.
    pub fn open(storage: Arc<dyn PreferenceStorage>) -> Self {
        Self {
            list: PersistedIdList::open(FAVORITES_KEY, MAX_FAVORITES, storage),
        }
    }

    /// Current favorites, in addition order.
    pub fn load(&self) -> Vec<String> {
        self.list.ids().to_vec()
    }

    pub fn ids(&self) -> &[String] {
        self.list.ids()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.list.contains(id)
    }

    /// Whether no further favorite can be added.
    ///
    /// This is the only capacity check; `toggle` defers to it.
    pub fn at_capacity(&self) -> bool {
        self.list.ids().len() >= self.list.capacity()
    }

    /// Add `id` if absent, remove it if present.
    ///
    /// Removal is always allowed and keeps the relative order of the rest.
    /// Adding while [`at_capacity`](Self::at_capacity) is a no-op reported
    /// as [`ToggleOutcome::Rejected`].
    pub fn toggle(&mut self, id: &str) -> ToggleOutcome {
        if self.contains(id) {
            let next = self.list.ids().iter().filter(|x| *x != id).cloned().collect();
            self.list.replace(next);
            info!("Removed favorite: {}", id);
            return ToggleOutcome::Removed;
        }

        if self.at_capacity() {
            debug!("Favorites full, ignoring: {}", id);
            return ToggleOutcome::Rejected;
        }

        let mut next = self.list.ids().to_vec();
        next.push(id.to_string());
        self.list.replace(next);
        info!("Added favorite: {}", id);
        ToggleOutcome::Added
    }

    /// Receive every new favorites sequence.
    pub fn subscribe(&self) -> watch::Receiver<Vec<String>> {
        self.list.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::preferences::storage::MemoryStorage;
    use crate::domains::preferences::storage::test_support::FailingStorage;

    fn store() -> (FavoritesStore, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        (FavoritesStore::open(storage.clone()), storage)
    }

    fn ids(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("tool-{i}")).collect()
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let (mut favorites, _) = store();
        assert_eq!(favorites.toggle("json"), ToggleOutcome::Added);
        assert!(favorites.contains("json"));
        assert_eq!(favorites.toggle("json"), ToggleOutcome::Removed);
        assert!(!favorites.contains("json"));
    }

    #[test]
    fn test_removal_preserves_relative_order() {
        let (mut favorites, _) = store();
        for id in ["a", "b", "c", "d"] {
            favorites.toggle(id);
        }
        favorites.toggle("b");
        assert_eq!(favorites.load(), vec!["a", "c", "d"]);

        favorites.toggle("b");
        assert_eq!(favorites.load(), vec!["a", "c", "d", "b"]);
    }

    #[test]
    fn test_capacity_rejection() {
        let (mut favorites, storage) = store();
        for id in ids(MAX_FAVORITES) {
            assert_eq!(favorites.toggle(&id), ToggleOutcome::Added);
        }
        assert!(favorites.at_capacity());
        let before = favorites.load();
        let persisted = storage.read(FAVORITES_KEY).unwrap();

        assert_eq!(favorites.toggle("ninth"), ToggleOutcome::Rejected);
        assert_eq!(favorites.load(), before);
        assert_eq!(storage.read(FAVORITES_KEY).unwrap(), persisted);

        // Removing is still allowed at capacity.
        assert_eq!(favorites.toggle("tool-3"), ToggleOutcome::Removed);
        assert!(!favorites.at_capacity());
        assert_eq!(favorites.toggle("ninth"), ToggleOutcome::Added);
    }

    #[test]
    fn test_bounded_and_unique_under_arbitrary_toggles() {
        let (mut favorites, _) = store();
        let pool = ids(12);
        for step in 0..200usize {
            let id = &pool[(step * 7 + step / 3) % pool.len()];
            favorites.toggle(id);

            let current = favorites.load();
            assert!(current.len() <= MAX_FAVORITES);
            let mut deduped = current.clone();
            deduped.sort();
            deduped.dedup();
            assert_eq!(deduped.len(), current.len());
        }
    }

    #[test]
    fn test_persisted_favorites_reload() {
        let (mut favorites, storage) = store();
        favorites.toggle("b64");
        favorites.toggle("json");
        assert_eq!(
            storage.read(FAVORITES_KEY).unwrap().as_deref(),
            Some(r#"["b64","json"]"#)
        );

        let reopened = FavoritesStore::open(storage);
        assert_eq!(reopened.load(), vec!["b64", "json"]);
    }

    #[test]
    fn test_corrupt_record_loads_empty() {
        let storage = Arc::new(MemoryStorage::with_entries([(FAVORITES_KEY, "{not json")]));
        let favorites = FavoritesStore::open(storage);
        assert!(favorites.load().is_empty());
    }

    #[test]
    fn test_oversized_record_is_trimmed() {
        let stored = serde_json::to_string(&ids(11)).unwrap();
        let storage = Arc::new(MemoryStorage::with_entries([(FAVORITES_KEY, stored)]));
        let favorites = FavoritesStore::open(storage);
        assert_eq!(favorites.load(), ids(MAX_FAVORITES));
        assert!(favorites.at_capacity());
    }

    #[test]
    fn test_storage_failure_keeps_session_state() {
        let mut favorites = FavoritesStore::open(Arc::new(FailingStorage::broken()));
        assert_eq!(favorites.toggle("json"), ToggleOutcome::Added);
        assert!(favorites.contains("json"));
    }

    #[test]
    fn test_subscribers_see_changes() {
        let (mut favorites, _) = store();
        let rx = favorites.subscribe();
        favorites.toggle("json");
        assert_eq!(*rx.borrow(), vec!["json".to_string()]);
    }
}
