//! Persisted, capacity-bounded list of tool ids.
//!
//! Shared machinery for the favorites and recents stores: load-at-open,
//! best-effort persistence, and broadcasting every new sequence to
//! subscribers. The in-memory list is the source of truth for the
//! session; storage is written after each change but never read back.

use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, warn};

use super::error::PreferenceError;
use super::storage::PreferenceStorage;

pub(crate) struct PersistedIdList {
    key: &'static str,
    capacity: usize,
    storage: Arc<dyn PreferenceStorage>,
    degraded: bool,
    ids: Vec<String>,
    tx: watch::Sender<Vec<String>>,
}

impl PersistedIdList {
    /// Load the list stored at `key`.
    ///
    /// Missing, unreadable or malformed records all yield an empty list.
    pub(crate) fn open(
        key: &'static str,
        capacity: usize,
        storage: Arc<dyn PreferenceStorage>,
    ) -> Self {
        let (ids, degraded) = match storage.read(key) {
            Ok(Some(raw)) => match decode_ids(key, &raw) {
                Ok(ids) => (sanitize(ids, capacity), false),
                Err(e) => {
                    warn!("{}; starting empty", e);
                    (Vec::new(), false)
                }
            },
            Ok(None) => (Vec::new(), false),
            Err(e @ PreferenceError::Malformed { .. }) => {
                warn!("{}; starting empty", e);
                (Vec::new(), false)
            }
            Err(e) => {
                warn!("Could not read '{}', keeping it in memory only: {}", key, e);
                (Vec::new(), true)
            }
        };
        debug!("Loaded {} ids from '{}'", ids.len(), key);

        let (tx, _) = watch::channel(ids.clone());
        Self {
            key,
            capacity,
            storage,
            degraded,
            ids,
            tx,
        }
    }

    pub(crate) fn ids(&self) -> &[String] {
        &self.ids
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|x| x == id)
    }

    /// Whether writes have been abandoned for this session.
    pub(crate) fn is_degraded(&self) -> bool {
        self.degraded
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<Vec<String>> {
        self.tx.subscribe()
    }

    /// Install a new sequence: update memory, persist, then broadcast.
    pub(crate) fn replace(&mut self, next: Vec<String>) {
        debug_assert!(next.len() <= self.capacity);
        self.ids = next;
        self.persist();
        self.tx.send_replace(self.ids.clone());
    }

    fn persist(&mut self) {
        if self.degraded {
            debug!("Skipping write of '{}': storage unavailable", self.key);
            return;
        }

        let encoded = match serde_json::to_string(&self.ids) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!("Could not encode '{}': {}", self.key, e);
                return;
            }
        };

        if let Err(e) = self.storage.write(self.key, &encoded) {
            warn!(
                "Could not persist '{}', keeping it in memory only: {}",
                self.key, e
            );
            self.degraded = true;
        }
    }
}

/// Parse a stored record: a JSON array of strings.
pub(crate) fn decode_ids(key: &str, raw: &str) -> Result<Vec<String>, PreferenceError> {
    serde_json::from_str(raw).map_err(|e| PreferenceError::malformed(key, e.to_string()))
}

/// Drop duplicates (first occurrence wins) and anything past capacity.
fn sanitize(ids: Vec<String>, capacity: usize) -> Vec<String> {
    let mut clean: Vec<String> = Vec::with_capacity(ids.len().min(capacity));
    for id in ids {
        if clean.len() == capacity {
            break;
        }
        if !clean.contains(&id) {
            clean.push(id);
        }
    }
    clean
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::preferences::storage::{FileStorage, MemoryStorage};
    use crate::domains::preferences::storage::test_support::FailingStorage;

    const KEY: &str = "test:list";

    #[test]
    fn test_decode_rejects_non_string_arrays() {
        assert!(decode_ids(KEY, r#"["a","b"]"#).is_ok());
        assert!(decode_ids(KEY, "{not json").is_err());
        assert!(decode_ids(KEY, "[1,2]").is_err());
        assert!(decode_ids(KEY, r#"{"a":1}"#).is_err());
    }

    #[test]
    fn test_sanitize() {
        let ids = ["a", "b", "a", "c", "d"].map(String::from).to_vec();
        assert_eq!(sanitize(ids, 3), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_open_malformed_record_is_empty() {
        let storage = Arc::new(MemoryStorage::with_entries([(KEY, "{not json")]));
        let list = PersistedIdList::open(KEY, 4, storage);
        assert!(list.ids().is_empty());
        assert!(!list.is_degraded());
    }

    #[test]
    fn test_malformed_file_is_not_a_storage_failure() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{not json").unwrap();

        let storage = Arc::new(FileStorage::new(&path));
        let mut list = PersistedIdList::open(KEY, 4, storage.clone());
        assert!(list.ids().is_empty());
        assert!(!list.is_degraded());

        list.replace(vec!["a".to_string()]);
        assert_eq!(storage.read(KEY).unwrap().as_deref(), Some(r#"["a"]"#));
    }

    #[test]
    fn test_replace_persists_and_broadcasts() {
        let storage = Arc::new(MemoryStorage::new());
        let mut list = PersistedIdList::open(KEY, 4, storage.clone());
        let mut rx = list.subscribe();

        list.replace(vec!["x".to_string()]);

        assert_eq!(storage.read(KEY).unwrap().as_deref(), Some(r#"["x"]"#));
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), vec!["x".to_string()]);
    }

    #[test]
    fn test_write_failure_degrades_to_memory() {
        let storage = Arc::new(FailingStorage::failing_writes());
        let mut list = PersistedIdList::open(KEY, 4, storage.clone());

        list.replace(vec!["a".to_string()]);
        list.replace(vec!["b".to_string(), "a".to_string()]);

        assert!(list.is_degraded());
        assert_eq!(list.ids(), ["b", "a"]);
        assert_eq!(storage.attempts(), 1);
    }

    #[test]
    fn test_read_failure_starts_empty_and_degraded() {
        let storage = Arc::new(FailingStorage::broken());
        let mut list = PersistedIdList::open(KEY, 4, storage.clone());
        assert!(list.ids().is_empty());

        list.replace(vec!["a".to_string()]);
        assert_eq!(list.ids(), ["a"]);
        assert_eq!(storage.attempts(), 0);
    }
}
