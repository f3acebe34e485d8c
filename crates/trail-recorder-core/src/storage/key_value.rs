//! Durable string key/value storage.
//!
//! [`FileKeyValueStore`] keeps every key in one JSON object file and replaces
//! it atomically on each write. [`MemoryKeyValueStore`] is a shared in-memory
//! map for hosts without a filesystem and for tests.

use crate::{CoreResult, TrailError};

use std::{
    collections::{BTreeMap, HashMap},
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument, warn};

/// Durable key/value persistence used by [`crate::TrailStore`].
pub trait KeyValueStore: Send {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> CoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// Either the new value is fully written or the previous one remains.
    fn put(&mut self, key: &str, value: String) -> CoreResult<()>;

    /// Remove `key`. Removing an absent key succeeds.
    fn remove(&mut self, key: &str) -> CoreResult<()>;
}

/// In-memory store. Clones share the same map, so a second controller can
/// observe what the first one persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryKeyValueStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // The map is never left half-updated, so a poisoned lock is still usable.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.entries().get(key).cloned())
    }

    fn put(&mut self, key: &str, value: String) -> CoreResult<()> {
        self.entries().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> CoreResult<()> {
        self.entries().remove(key);
        Ok(())
    }
}

/// File-backed store: one JSON object, rewritten via temp file + rename.
#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileKeyValueStore {
    /// Open the store at `path`, creating parent directories as needed.
    ///
    /// A missing file is an empty store. An unreadable or corrupt file is
    /// logged and treated as empty; it is replaced on the next write.
    #[track_caller]
    #[instrument(skip(path), fields(path = ?path.as_ref()))]
    pub fn open<P: AsRef<Path>>(path: P) -> CoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| TrailError::StorageWrite {
                reason: format!("Failed to create storage directory: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;
            debug!(dir = ?parent, "Created storage directory");
        }

        let entries = match Self::read_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "Storage file unreadable, starting empty");
                BTreeMap::new()
            }
        };

        info!(keys = entries.len(), "Key/value store opened");

        Ok(Self { path, entries })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[track_caller]
    fn read_entries(path: &Path) -> CoreResult<BTreeMap<String, String>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(path).map_err(|e| TrailError::StorageRead {
            reason: format!("Failed to read {:?}: {}", path, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        serde_json::from_str(&contents).map_err(|e| TrailError::StorageRead {
            reason: format!("Failed to parse {:?}: {}", path, e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Write `entries` to disk: temp file, fsync, rename.
    #[track_caller]
    fn persist(&self, entries: &BTreeMap<String, String>) -> CoreResult<()> {
        let contents =
            serde_json::to_string_pretty(entries).map_err(|source| TrailError::Serialization {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let temp_path = self.path.with_extension("json.tmp");

        if let Err(e) = Self::replace_file(&temp_path, &self.path, contents.as_bytes()) {
            // A failed write must not leave a partial temp file behind.
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }

        Ok(())
    }

    #[track_caller]
    fn replace_file(temp_path: &Path, final_path: &Path, contents: &[u8]) -> CoreResult<()> {
        let mut temp_file = fs::File::create(temp_path).map_err(|e| TrailError::StorageWrite {
            reason: format!("Failed to create temp store file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents)
            .map_err(|e| TrailError::StorageWrite {
                reason: format!("Failed to write temp store file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| TrailError::StorageWrite {
            reason: format!("Failed to sync temp store file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(temp_path, final_path).map_err(|e| TrailError::StorageWrite {
            reason: format!("Failed to rename temp store file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    #[instrument(skip(self, value), fields(value_len = value.len()))]
    fn put(&mut self, key: &str, value: String) -> CoreResult<()> {
        let mut next = self.entries.clone();
        next.insert(key.to_string(), value);

        // In-memory view only changes once the file is in place.
        self.persist(&next)?;
        self.entries = next;

        debug!(path = ?self.path, "Store written (atomic write)");

        Ok(())
    }

    #[instrument(skip(self))]
    fn remove(&mut self, key: &str) -> CoreResult<()> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }

        let mut next = self.entries.clone();
        next.remove(key);

        self.persist(&next)?;
        self.entries = next;

        debug!(path = ?self.path, "Key removed");

        Ok(())
    }
}
