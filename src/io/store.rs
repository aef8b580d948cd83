//! Key-value persistence and the grid snapshot adapter
//!
//! Persistence is split into two seams. [`KeyValueStore`] is the opaque
//! string store (get/set/remove on named slots); [`GridStore`] adapts one
//! slot of it to the grid snapshot contract: absent or foreign data loads as
//! an empty grid, saves overwrite the whole slot, and clear removes it.

use crate::io::configuration::STORE_KEY;
use crate::io::error::{QuiltError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Opaque string key-value store
///
/// Failures of the underlying medium pass through unhandled; the snapshot
/// adapter adds no retry or recovery of its own.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    ///
    /// # Errors
    ///
    /// Returns the store's native failure for anything other than a missing
    /// key; a missing key is `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns the store's native write failure.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key` and its value; removing a missing key is not an error
    ///
    /// # Errors
    ///
    /// Returns the store's native removal failure.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory store used for deterministic tests and ephemeral runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of populated slots
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no slot is populated
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Durable store keeping one file per key under a root directory
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a file store rooted at `root`; the directory is created lazily
    /// on first write
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(QuiltError::FileSystem {
                path,
                operation: "read",
                source,
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(|source| QuiltError::FileSystem {
            path: self.root.clone(),
            operation: "create directory",
            source,
        })?;

        let path = self.path_for(key);
        fs::write(&path, value).map_err(|source| QuiltError::FileSystem {
            path,
            operation: "write",
            source,
        })
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(QuiltError::FileSystem {
                path,
                operation: "remove",
                source,
            }),
        }
    }
}

/// Snapshot adapter binding one store slot to the grid sequence
#[derive(Debug, Clone)]
pub struct GridStore<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> GridStore<S> {
    /// Bind the default snapshot slot of `store`
    pub fn new(store: S) -> Self {
        Self::with_key(store, STORE_KEY)
    }

    /// Bind a custom snapshot slot of `store`
    pub fn with_key(store: S, key: &str) -> Self {
        Self {
            store,
            key: key.to_owned(),
        }
    }

    /// Load the persisted grid sequence
    ///
    /// An absent slot loads as an empty sequence. So does a slot holding
    /// anything that fails to parse as a sequence of identifiers: foreign
    /// corruption fails closed and self-heals on the next build.
    ///
    /// # Errors
    ///
    /// Returns only the underlying store's native read failure.
    pub fn load(&self) -> Result<Vec<u32>> {
        match self.store.get(&self.key)? {
            Some(raw) => Ok(serde_json::from_str(&raw).unwrap_or_default()),
            None => Ok(Vec::new()),
        }
    }

    /// Serialize `cells` and overwrite the snapshot slot
    ///
    /// An empty sequence stores `[]`; only [`Self::clear`] removes the slot.
    ///
    /// # Errors
    ///
    /// Returns a serialization failure or the store's native write failure.
    pub fn save(&mut self, cells: &[u32]) -> Result<()> {
        let encoded = serde_json::to_string(cells).map_err(|source| QuiltError::Serialization {
            key: self.key.clone(),
            source,
        })?;
        self.store.set(&self.key, &encoded)
    }

    /// Remove the snapshot slot entirely
    ///
    /// # Errors
    ///
    /// Returns the store's native removal failure.
    pub fn clear(&mut self) -> Result<()> {
        self.store.remove(&self.key)
    }
}
