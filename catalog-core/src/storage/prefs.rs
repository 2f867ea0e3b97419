//! src/storage/prefs.rs
//! ============================================================================
//! # Preference Storage: Durable Key-Value Contracts and Adapters
//!
//! Small synchronous store addressed by string keys, holding raw JSON text
//! per key. Callers treat every failure as "no persistence" and carry on.
//!
//! - [`MemoryPrefsStore`]: shared in-process map, clones see the same data
//! - [`FilePrefsStore`]: one JSON object file, written atomically
//! - [`NoopPrefsStore`]: persistence disabled

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use parking_lot::Mutex;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};

/// Durable key-value store for small preference payloads.
pub trait PrefsStore {
    /// Loads the raw value stored under `key`.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Stores `value` under `key`, overwriting any prior value.
    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Removes `key`. Missing keys are not an error.
    fn remove(&self, key: &str) -> AppResult<()>;
}

impl<S: PrefsStore + ?Sized> PrefsStore for Box<S> {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        (**self).remove(key)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn get(&self, _key: &str) -> AppResult<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> AppResult<()> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> AppResult<()> {
        Ok(())
    }
}

/// In-memory store. Clones share the same map, which lets tests simulate
/// an application reload against the same storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryPrefsStore {
    inner: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.inner.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.inner.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.inner.lock().remove(key);
        Ok(())
    }
}

/// File-backed store: a single JSON object mapping keys to raw values.
#[derive(Debug, Clone)]
pub struct FilePrefsStore {
    path: PathBuf,
    temp_path: PathBuf,
}

impl FilePrefsStore {
    pub fn new(path: PathBuf) -> Self {
        let temp_path = path.with_extension("tmp");
        Self { path, temp_path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole map. Missing file is empty; a corrupt file is empty
    /// with a warning so the next write replaces it.
    fn read_map(&self) -> AppResult<HashMap<String, String>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => return Err(AppError::storage(self.path.display().to_string(), e.to_string())),
        };

        match serde_json::from_str(&text) {
            Ok(map) => Ok(map),
            Err(e) => {
                warn!("Ignoring corrupt preference file {}: {}", self.path.display(), e);
                Ok(HashMap::new())
            }
        }
    }

    /// Writes to a sibling temp file, then renames over the target.
    /// Disk faults surface as [`AppError::Io`].
    fn write_map(&self, map: &HashMap<String, String>) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(map)?;
        fs::write(&self.temp_path, json)?;
        fs::rename(&self.temp_path, &self.path)?;
        debug!("Wrote {} preference key(s) to {}", map.len(), self.path.display());
        Ok(())
    }
}

impl PrefsStore for FilePrefsStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}

/// Loads and deserializes a typed value.
///
/// # Errors
///
/// Returns an error when the store read or JSON deserialization fails.
pub fn load_pref_with<S: PrefsStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> AppResult<Option<T>> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    Ok(Some(serde_json::from_str(&raw)?))
}

/// Serializes and saves a typed value.
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub fn save_pref_with<S: PrefsStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> AppResult<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct PrefThing {
        details_visible: bool,
    }

    #[test]
    fn memory_store_clones_share_state() {
        let store = MemoryPrefsStore::new();
        let reloaded = store.clone();

        store.set("k", "{\"a\":1}").unwrap();
        assert_eq!(reloaded.get("k").unwrap(), Some("{\"a\":1}".to_string()));

        reloaded.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn typed_helpers_round_trip_through_boxed_store() {
        let store: Box<dyn PrefsStore> = Box::new(MemoryPrefsStore::new());
        save_pref_with(&store, "ui", &PrefThing { details_visible: true }).unwrap();

        let loaded: Option<PrefThing> = load_pref_with(&store, "ui").unwrap();
        assert_eq!(loaded, Some(PrefThing { details_visible: true }));
    }

    #[test]
    fn typed_load_reports_malformed_payloads() {
        let store = MemoryPrefsStore::new();
        store.set("ui", "not json").unwrap();
        let loaded: AppResult<Option<PrefThing>> = load_pref_with(&store, "ui");
        assert!(matches!(loaded, Err(AppError::Serde(_))));
    }

    #[test]
    fn noop_store_is_empty_and_successful() {
        let store = NoopPrefsStore;
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        store.remove("k").unwrap();
    }

    #[test]
    fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let store = FilePrefsStore::new(path.clone());
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v1").unwrap();
        store.set("other", "v2").unwrap();

        let reopened = FilePrefsStore::new(path.clone());
        assert_eq!(reopened.get("k").unwrap(), Some("v1".to_string()));
        assert_eq!(reopened.get("other").unwrap(), Some("v2".to_string()));
        assert!(!path.with_extension("tmp").exists());

        reopened.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn corrupt_file_reads_as_empty_and_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{ definitely not json").unwrap();

        let store = FilePrefsStore::new(path);
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));
    }

    #[test]
    fn disk_write_failure_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        // A directory squatting on the temp file path makes the write fail.
        fs::create_dir(path.with_extension("tmp")).unwrap();

        let store = FilePrefsStore::new(path.clone());
        let err = store.set("k", "v").unwrap_err();
        assert!(matches!(err, AppError::Io(_)), "got {err:?}");
        assert!(!err.is_recoverable());
        assert!(!path.exists());
    }
}
