//! Storage Layer
//!
//! Key-value store abstraction and the persisted item record on top of it.
//! The browser implementation lives in `browser.rs`.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::error::StorageError;
use crate::models::ItemList;

/// Minimal string key-value store (the shape of `window.localStorage`)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// In-memory store for tests and headless use
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored value, bypassing decoding
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// The single named entry mirroring the item list.
///
/// Encoded as a JSON array of strings. An absent key reads as the empty
/// list and writing an empty list removes the key.
#[derive(Debug, Clone)]
pub struct PersistedRecord<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> PersistedRecord<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn read(&self) -> Result<ItemList, StorageError> {
        match self.store.get(&self.key)? {
            None => Ok(ItemList::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(StorageError::Decode),
        }
    }

    /// Full rewrite of the record
    pub fn write(&self, items: &ItemList) -> Result<(), StorageError> {
        if items.is_empty() {
            return self.clear();
        }
        let encoded = serde_json::to_string(items).map_err(StorageError::Encode)?;
        self.store.set(&self.key, &encoded)
    }

    /// Delete the key itself
    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(&self.key)
    }
}
