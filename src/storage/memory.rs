//! In-process storage backends

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{KeyValueStore, StorageError};

/// Map-backed storage
///
/// Clones share the same contents, so a second store built over a clone sees
/// what the first one wrote. That is how a page reload looks from the store's
/// point of view.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one entry
    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Raw contents of a slot, bypassing the trait
    pub fn item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.item(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage that is switched off
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}
