//! Key-value storage primitive behind the preference stores.
//!
//! Records are plain strings keyed by a namespaced name. Only the
//! preference stores talk to this layer; everything else goes through
//! their `toggle`/`record_use`/`set` entry points.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::{debug, warn};

use super::error::PreferenceError;

/// Storage key for the favorites record.
pub const FAVORITES_KEY: &str = "toolpanda:favorites";

/// Storage key for the recents record.
pub const RECENTS_KEY: &str = "toolpanda:recent";

/// Storage key for the theme record.
pub const THEME_KEY: &str = "toolpanda:theme";

/// A simple string key-value store.
pub trait PreferenceStorage: Send + Sync {
    /// Read the record at `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Replace the record at `key`.
    fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

// ============================================================================
// In-memory storage
// ============================================================================

/// Process-local storage. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage pre-seeded with records.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RwLock::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| PreferenceError::unavailable(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| PreferenceError::unavailable(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ============================================================================
// File storage
// ============================================================================

/// Storage backed by a single JSON object file mapping key to record.
///
/// Writes go to a sibling temp file which is then renamed over the
/// original, so a crash never leaves a half-written file behind.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&raw)
            .map_err(|e| PreferenceError::malformed(self.path.display().to_string(), e.to_string()))
    }
}

impl PreferenceStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.load()?.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut entries = match self.load() {
            Ok(entries) => entries,
            Err(PreferenceError::Malformed { reason, .. }) => {
                warn!(
                    "Replacing unreadable preference file {}: {}",
                    self.path.display(),
                    reason
                );
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let serialized = serde_json::to_string_pretty(&entries)
            .map_err(|e| PreferenceError::unavailable(e.to_string()))?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serialized)?;
        fs::rename(&tmp, &self.path)?;

        debug!("Persisted preference '{}' to {}", key, self.path.display());
        Ok(())
    }
}

// ============================================================================
// Test support
// ============================================================================

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Storage that fails on demand and counts write attempts.
    #[derive(Debug, Default)]
    pub struct FailingStorage {
        pub fail_reads: bool,
        pub fail_writes: bool,
        pub write_attempts: AtomicUsize,
        inner: MemoryStorage,
    }

    impl FailingStorage {
        pub fn broken() -> Self {
            Self {
                fail_reads: true,
                fail_writes: true,
                ..Default::default()
            }
        }

        pub fn failing_writes() -> Self {
            Self {
                fail_writes: true,
                ..Default::default()
            }
        }

        pub fn attempts(&self) -> usize {
            self.write_attempts.load(Ordering::SeqCst)
        }
    }

    impl PreferenceStorage for FailingStorage {
        fn read(&self, key: &str) -> Result<Option<String>, PreferenceError> {
            if self.fail_reads {
                return Err(PreferenceError::unavailable("storage disabled"));
            }
            self.inner.read(key)
        }

        fn write(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
            self.write_attempts.fetch_add(1, Ordering::SeqCst);
            if self.fail_writes {
                return Err(PreferenceError::unavailable("quota exceeded"));
            }
            self.inner.write(key, value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_round_trip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read(FAVORITES_KEY).unwrap(), None);
        storage.write(FAVORITES_KEY, r#"["a"]"#).unwrap();
        assert_eq!(storage.read(FAVORITES_KEY).unwrap().as_deref(), Some(r#"["a"]"#));
    }

    #[test]
    fn test_file_storage_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let storage = FileStorage::new(&path);
        assert_eq!(storage.read(RECENTS_KEY).unwrap(), None);
        storage.write(RECENTS_KEY, r#"["b64"]"#).unwrap();
        storage.write(THEME_KEY, "dark").unwrap();

        let reopened = FileStorage::new(&path);
        assert_eq!(reopened.read(RECENTS_KEY).unwrap().as_deref(), Some(r#"["b64"]"#));
        assert_eq!(reopened.read(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_file_storage_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{not json").unwrap();

        let storage = FileStorage::new(&path);
        assert!(matches!(
            storage.read(FAVORITES_KEY),
            Err(PreferenceError::Malformed { .. })
        ));

        // A write replaces the unreadable file rather than failing forever.
        storage.write(FAVORITES_KEY, "[]").unwrap();
        assert_eq!(storage.read(FAVORITES_KEY).unwrap().as_deref(), Some("[]"));
    }
}
