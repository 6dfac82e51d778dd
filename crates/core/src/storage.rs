//! Persistent key/value storage
//!
//! The browser build mirrors auth state into `localStorage`; native builds
//! use a small JSON file in the state directory instead. Both sit behind
//! [`KeyValueStore`] so the auth store never knows which one it has.

use crate::error::CoreResult;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

/// String key/value storage with `localStorage` semantics
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` when the key is absent
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> CoreResult<()>;

    /// Remove a key; removing an absent key is not an error
    fn remove(&self, key: &str) -> CoreResult<()>;
}

/// Shared handle to a storage backend
pub type SharedStore = Arc<dyn KeyValueStore>;

/// In-process storage, lost when the process exits
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with entries
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: Mutex::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> CoreResult<()> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use super::KeyValueStore;
    use crate::error::CoreResult;
    use std::collections::BTreeMap;
    use std::path::{Path, PathBuf};
    use std::sync::{Mutex, PoisonError};
    use tracing::{debug, warn};

    /// JSON-file backed storage
    ///
    /// The whole file is read once at open and rewritten on every change.
    #[derive(Debug)]
    pub struct FileStore {
        path: PathBuf,
        entries: Mutex<BTreeMap<String, String>>,
    }

    impl FileStore {
        /// Open the store at `path`
        ///
        /// A missing or unreadable-as-JSON file opens as an empty store; the
        /// next write replaces it.
        pub fn open(path: impl Into<PathBuf>) -> CoreResult<Self> {
            let path = path.into();
            let entries = match std::fs::read_to_string(&path) {
                Ok(content) if content.trim().is_empty() => BTreeMap::new(),
                Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                    warn!(path = %path.display(), "Discarding corrupt storage file: {e}");
                    BTreeMap::new()
                }),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
                Err(e) => return Err(e.into()),
            };
            debug!(path = %path.display(), keys = entries.len(), "Opened file store");

            Ok(Self {
                path,
                entries: Mutex::new(entries),
            })
        }

        /// Location of the backing file
        pub fn path(&self) -> &Path {
            &self.path
        }

        fn persist(&self, entries: &BTreeMap<String, String>) -> CoreResult<()> {
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(entries)?;

            // Write a sibling file and rename it over the old one so a failed
            // write never leaves a truncated store behind
            let staging = self.path.with_extension("json.tmp");
            std::fs::write(&staging, content)?;
            std::fs::rename(&staging, &self.path)?;
            Ok(())
        }
    }

    impl KeyValueStore for FileStore {
        fn get(&self, key: &str) -> Option<String> {
            self.entries
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .get(key)
                .cloned()
        }

        fn set(&self, key: &str, value: &str) -> CoreResult<()> {
            let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
            entries.insert(key.to_string(), value.to_string());
            self.persist(&entries)
        }

        fn remove(&self, key: &str) -> CoreResult<()> {
            let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
            if entries.remove(key).is_some() {
                self.persist(&entries)?;
            }
            Ok(())
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use local::LocalStore;

#[cfg(target_arch = "wasm32")]
mod local {
    use super::KeyValueStore;
    use crate::error::{CoreError, CoreResult};
    use gloo::storage::{LocalStorage, Storage};

    /// Browser `localStorage`
    ///
    /// Values are stored raw rather than JSON-encoded so the keys stay
    /// readable by anything else on the page.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct LocalStore;

    impl KeyValueStore for LocalStore {
        fn get(&self, key: &str) -> Option<String> {
            LocalStorage::raw().get_item(key).ok().flatten()
        }

        fn set(&self, key: &str, value: &str) -> CoreResult<()> {
            LocalStorage::raw()
                .set_item(key, value)
                .map_err(|e| CoreError::storage_error(format!("{e:?}")))
        }

        fn remove(&self, key: &str) -> CoreResult<()> {
            LocalStorage::raw()
                .remove_item(key)
                .map_err(|e| CoreError::storage_error(format!("{e:?}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("token"), None);

        store.set("token", "abc").unwrap();
        assert_eq!(store.get("token").as_deref(), Some("abc"));

        store.remove("token").unwrap();
        assert_eq!(store.get("token"), None);

        // Removing twice is fine
        store.remove("token").unwrap();
    }

    #[test]
    fn test_memory_store_with_entries() {
        let store = MemoryStore::with_entries([("token", "t"), ("username", "alice")]);
        assert_eq!(store.get("username").as_deref(), Some("alice"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod file_store {
        use super::super::*;
        use tempfile::TempDir;

        #[test]
        fn test_missing_file_is_empty() {
            let temp_dir = TempDir::new().unwrap();
            let store = FileStore::open(temp_dir.path().join("storage.json")).unwrap();
            assert_eq!(store.get("token"), None);
            assert!(!store.path().exists());
        }

        #[test]
        fn test_values_survive_reopen() {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join("nested").join("storage.json");

            let store = FileStore::open(&path).unwrap();
            store.set("token", "abc").unwrap();
            store.set("username", "alice").unwrap();
            drop(store);

            let reopened = FileStore::open(&path).unwrap();
            assert_eq!(reopened.get("token").as_deref(), Some("abc"));
            assert_eq!(reopened.get("username").as_deref(), Some("alice"));

            reopened.remove("token").unwrap();
            let reopened = FileStore::open(&path).unwrap();
            assert_eq!(reopened.get("token"), None);
            assert_eq!(reopened.get("username").as_deref(), Some("alice"));
        }

        #[test]
        fn test_corrupt_file_opens_empty() {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join("storage.json");
            std::fs::write(&path, r#"{"token":"abc","#).unwrap();

            let store = FileStore::open(&path).unwrap();
            assert_eq!(store.get("token"), None);

            // The next write replaces the damaged file
            store.set("username", "alice").unwrap();
            let reopened = FileStore::open(&path).unwrap();
            assert_eq!(reopened.get("username").as_deref(), Some("alice"));
            assert!(!path.with_extension("json.tmp").exists());
        }

        #[test]
        fn test_remove_on_corrupt_file_succeeds() {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join("storage.json");
            std::fs::write(&path, "not json").unwrap();

            let store = FileStore::open(&path).unwrap();
            store.remove("token").unwrap();
            assert_eq!(store.get("token"), None);
        }
    }
}
