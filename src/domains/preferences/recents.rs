//! Recents store.
//!
//! Most-recently-used tool ids, newest first, holding at most
//! [`MAX_RECENTS`] entries.

use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

use super::list::PersistedIdList;
use super::storage::{PreferenceStorage, RECENTS_KEY};

/// Maximum number of recent tools remembered.
pub const MAX_RECENTS: usize = 4;

pub struct RecentsStore {
    list: PersistedIdList,
}

impl RecentsStore {
    /// Open the store, loading any persisted recents.
    pub fn open(storage: Arc<dyn PreferenceStorage>) -> Self {
        Self {
            list: PersistedIdList::open(RECENTS_KEY, MAX_RECENTS, storage),
        }
    }

    /// Current recents, most recent first.
    pub fn load(&self) -> Vec<String> {
        self.list.ids().to_vec()
    }

    pub fn ids(&self) -> &[String] {
        self.list.ids()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.list.contains(id)
    }

    /// Move `id` to the front, dropping the oldest entries past capacity.
    ///
    /// Called once per tool activation.
    pub fn record_use(&mut self, id: &str) -> &[String] {
        let mut next = Vec::with_capacity(MAX_RECENTS);
        next.push(id.to_string());
        next.extend(
            self.list
                .ids()
                .iter()
                .filter(|x| *x != id)
                .take(MAX_RECENTS - 1)
                .cloned(),
        );
        self.list.replace(next);
        debug!("Recorded use of {}", id);
        self.list.ids()
    }

    /// Receive every new recents sequence.
    pub fn subscribe(&self) -> watch::Receiver<Vec<String>> {
        self.list.subscribe()
    }
}
