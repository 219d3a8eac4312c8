//! Preference service - owns the three preference stores.
//!
//! All stores share one storage backend, chosen from configuration:
//! a JSON file when a path is configured, process memory otherwise.

use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use super::favorites::FavoritesStore;
use super::recents::RecentsStore;
use super::storage::{FileStorage, MemoryStorage, PreferenceStorage};
use super::theme::{Theme, ThemeStore};
use crate::core::config::PreferencesConfig;

/// Point-in-time view of every preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreferenceSnapshot {
    pub favorites: Vec<String>,
    pub recents: Vec<String>,
    pub theme: Theme,
    pub at_capacity: bool,
}

pub struct PreferenceService {
    pub favorites: FavoritesStore,
    pub recents: RecentsStore,
    pub theme: ThemeStore,
}

impl PreferenceService {
    /// Create the service from configuration.
    pub fn new(config: &PreferencesConfig) -> Self {
        let storage: Arc<dyn PreferenceStorage> = match &config.storage_path {
            Some(path) => {
                info!("Using preference file {}", path.display());
                Arc::new(FileStorage::new(path))
            }
            None => {
                info!("Using in-memory preferences");
                Arc::new(MemoryStorage::new())
            }
        };
        Self::with_storage(storage, config.default_theme)
    }

    /// Create the service over an explicit storage backend.
    pub fn with_storage(storage: Arc<dyn PreferenceStorage>, default_theme: Theme) -> Self {
        Self {
            favorites: FavoritesStore::open(storage.clone()),
            recents: RecentsStore::open(storage.clone()),
            theme: ThemeStore::open(storage, default_theme),
        }
    }

    pub fn snapshot(&self) -> PreferenceSnapshot {
        PreferenceSnapshot {
            favorites: self.favorites.load(),
            recents: self.recents.load(),
            theme: self.theme.theme(),
            at_capacity: self.favorites.at_capacity(),
        }
    }
}
