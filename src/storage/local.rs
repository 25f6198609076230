//! Browser LocalStorage backend

use super::{KeyValueStore, StorageError};

/// `window.localStorage`
///
/// The handle is looked up on every call. Storage can be revoked while the
/// page is open, and a missing handle is reported as `Unavailable`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Rejected(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Rejected(format!("{:?}", e)))
    }
}
