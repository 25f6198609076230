//! Key-value persistence capability
//!
//! The store only needs two operations on a string-keyed slot, so backends are
//! small:
//! - `LocalStorage`: browser `window.localStorage` (wasm32 only)
//! - `MemoryStore`: in-process map, shareable between store instances
//! - `UnavailableStore`: storage switched off, every call fails

#[cfg(target_arch = "wasm32")]
mod local;
mod memory;

#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;
pub use memory::{MemoryStore, UnavailableStore};

use thiserror::Error;

/// Why a storage call did not go through
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// No storage in this context (disabled, private mode, no window)
    #[error("storage unavailable")]
    Unavailable,
    /// Storage exists but refused the operation (quota, security error)
    #[error("storage rejected operation: {0}")]
    Rejected(String),
}

/// A durable string-keyed slot
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` means the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite a value
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
