//! Lingo Prefs - language preference store for browser UIs
//!
//! Core modules:
//! - `locale`: Preference trait and the supported locales
//! - `store`: Hydration-gated in-memory state mirrored to storage
//! - `storage`: Key-value persistence (LocalStorage on web, in-memory elsewhere)

pub mod locale;
pub mod storage;
pub mod store;

pub use locale::{Locale, Preference};
pub use storage::{KeyValueStore, MemoryStore, StorageError, UnavailableStore};
pub use store::{PreferenceStore, Snapshot, StoreConfig};

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
#[cfg(target_arch = "wasm32")]
pub use store::spawn_hydration;

/// Configuration constants
pub mod consts {
    /// LocalStorage key holding the selected language
    pub const LOCALE_STORAGE_KEY: &str = "language";
    /// Element that shows the current language and switches it on click
    pub const TOGGLE_ELEMENT_ID: &str = "language-toggle";
}
