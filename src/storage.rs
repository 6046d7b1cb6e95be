//! Storage Layer
//!
//! Abstract string key/value store behind the persistence manager.
//! Implementations: browser local storage, in-memory, or none at all.

use std::cell::RefCell;
use std::collections::HashMap;

/// Storage-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// No persistent medium in this execution context
    Unavailable,
    /// The medium rejected the write (quota, security, ...)
    WriteFailed(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "storage unavailable"),
            StorageError::WriteFailed(msg) => write!(f, "storage write failed: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// String-keyed persistent store
///
/// All operations are synchronous; every caller runs on the single UI
/// thread. Interior mutability is the implementation's concern.
pub trait KeyValueStore {
    /// Read the value under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Drop `key` if present
    fn remove(&self, key: &str);
}

/// Browser `localStorage` backend
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    /// None when there is no window or local storage is disabled
    pub fn new() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::WriteFailed(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) {
        let _ = self.storage.remove_item(key);
    }
}

/// In-memory backend for tests and degraded execution contexts
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys (test helper)
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// The no-storage fallback: reads see nothing, writes fail quietly
pub struct NullStore;

impl KeyValueStore for NullStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove(&self, _key: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("k"), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("k"), Some("v".to_string()));
        store.remove("k");
        assert_eq!(store.get("k"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn null_store_degrades() {
        let store = NullStore;
        assert_eq!(store.get("k"), None);
        assert_eq!(store.set("k", "v"), Err(StorageError::Unavailable));
        store.remove("k");
    }
}
