//! # Storage Backends
//!
//! The `StorageBackend` trait and its two implementations.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Backend Selection                                  │
//! │                                                                         │
//! │  Typed stores (CartStore, OrderStore, ...)                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Arc<dyn StorageBackend>  ← constructor-injected                       │
//! │       │                                                                 │
//! │       ├──► MemoryBackend   Mutex<HashMap>, for tests and               │
//! │       │                    ephemeral guest sessions                    │
//! │       │                                                                 │
//! │       └──► FileBackend     one JSON blob file per key under a          │
//! │                            data directory (localStorage-shaped)        │
//! │                                                                         │
//! │  The trait is synchronous on purpose: localStorage is synchronous,     │
//! │  blobs are tiny, and the facade's async surface belongs to the         │
//! │  mocked network edge, not to persistence.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency Note
//! Each backend is internally thread-safe (`&self` methods), but there is
//! no cross-process coordination: two FileBackends over one directory can
//! overwrite each other, exactly like two browser tabs over localStorage.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Storage Backend Trait
// =============================================================================

/// A key/value blob store holding JSON strings under string keys.
///
/// ## Contract
/// - `get` of an absent key is `Ok(None)`, never an error
/// - `set` overwrites silently
/// - `remove` of an absent key is a no-op
/// - Values round-trip byte-for-byte
pub trait StorageBackend: Send + Sync {
    /// Reads the blob under `key`.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes (or overwrites) the blob under `key`.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Deletes the blob under `key`, if present.
    fn remove(&self, key: &str) -> StoreResult<()>;

    /// Deletes every blob.
    fn clear(&self) -> StoreResult<()>;

    /// Lists all present keys, in no particular order.
    fn keys(&self) -> StoreResult<Vec<String>>;
}

// =============================================================================
// Memory Backend
// =============================================================================

/// In-memory backend: a mutex-guarded map.
///
/// ## When To Use
/// - Unit and integration tests (isolated, fast)
/// - Guest sessions that should not persist
#[derive(Debug, Default)]
pub struct MemoryBackend {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        MemoryBackend::default()
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.blobs
            .lock()
            .map_err(|_| StoreError::Backend("memory backend mutex poisoned".to_string()))
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        self.lock()?.clear();
        Ok(())
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        Ok(self.lock()?.keys().cloned().collect())
    }
}

// =============================================================================
// File Backend
// =============================================================================

/// File-backed backend: one `<key>.json` blob file per key under a data
/// directory.
///
/// ## Layout
/// ```text
/// <data_dir>/
/// ├── cart.json
/// ├── wishlist.json
/// ├── compareList.json
/// └── orders.json
/// ```
///
/// Whole-file writes keep the localStorage semantics: every `set`
/// replaces the full blob.
#[derive(Debug)]
pub struct FileBackend {
    data_dir: PathBuf,
}

impl FileBackend {
    /// Creates a file backend rooted at `data_dir`, creating the directory
    /// if needed.
    pub fn new(data_dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)
            .map_err(|e| StoreError::io(data_dir.display().to_string(), e))?;

        debug!(dir = %data_dir.display(), "File backend initialized");
        Ok(FileBackend { data_dir })
    }

    /// Returns the data directory this backend writes into.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        // Keys are well-known constants; the filter guards against a
        // caller-supplied key escaping the data directory.
        let safe: String = key
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
            .collect();
        self.data_dir.join(format!("{safe}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.blob_path(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.blob_path(key);
        fs::write(&path, value).map_err(|e| StoreError::io(key, e))
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let path = self.blob_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(key, e)),
        }
    }

    fn clear(&self) -> StoreResult<()> {
        for key in self.keys()? {
            if let Err(e) = self.remove(&key) {
                warn!(key = %key, error = %e, "Failed to remove blob during clear");
                return Err(e);
            }
        }
        Ok(())
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        let entries = fs::read_dir(&self.data_dir)
            .map_err(|e| StoreError::io(self.data_dir.display().to_string(), e))?;

        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::io(self.data_dir.display().to_string(), e))?;
            let name = entry.file_name();
            if let Some(key) = name.to_string_lossy().strip_suffix(".json") {
                keys.push(key.to_string());
            }
        }
        Ok(keys)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
