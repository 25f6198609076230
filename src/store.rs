//! Preference store
//!
//! Holds one preference in memory and mirrors it into a storage slot.
//!
//! Startup is two-phase. The store starts at the configured default and
//! unhydrated, so the first render is the same no matter what storage holds.
//! `hydrate` then reads the slot once and adopts a recognized value. Writes to
//! storage are suppressed until hydration, otherwise the default would
//! overwrite the real stored value before it has been read.
//!
//! There is no global instance. Build one per page and hand it to whatever
//! renders (on wasm32 that is an `Rc<RefCell<_>>`).

use serde::{Deserialize, Serialize};

use crate::consts::LOCALE_STORAGE_KEY;
use crate::locale::Preference;
use crate::storage::KeyValueStore;

/// Store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig<P> {
    /// Storage key of the persisted record
    pub key: String,
    /// Value shown before hydration and when storage has nothing usable
    pub default: P,
}

impl<P: Preference> Default for StoreConfig<P> {
    fn default() -> Self {
        Self {
            key: LOCALE_STORAGE_KEY.to_string(),
            default: P::default(),
        }
    }
}

/// What a renderer needs to draw the current state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot<P> {
    pub value: P,
    pub hydrated: bool,
}

type Listener<P> = Box<dyn FnMut(Snapshot<P>)>;

/// In-memory preference synchronized with a storage slot
pub struct PreferenceStore<P: Preference, S: KeyValueStore> {
    config: StoreConfig<P>,
    storage: S,
    value: P,
    hydrated: bool,
    listeners: Vec<Listener<P>>,
}

impl<P: Preference, S: KeyValueStore> PreferenceStore<P, S> {
    /// Store with the default config
    pub fn new(storage: S) -> Self {
        Self::with_config(StoreConfig::default(), storage)
    }

    pub fn with_config(config: StoreConfig<P>, storage: S) -> Self {
        Self {
            value: config.default,
            hydrated: false,
            config,
            storage,
            listeners: Vec::new(),
        }
    }

    /// Current value
    pub fn get(&self) -> P {
        self.value
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    pub fn snapshot(&self) -> Snapshot<P> {
        Snapshot {
            value: self.value,
            hydrated: self.hydrated,
        }
    }

    /// Change the value. Persisted only once hydrated.
    pub fn set(&mut self, value: P) {
        let changed = value != self.value;
        self.value = value;

        if self.hydrated {
            self.persist();
        }
        if changed {
            self.notify();
        }
    }

    /// Change the value from its text form. Unrecognized text is ignored.
    pub fn set_str(&mut self, text: &str) {
        if let Some(value) = P::parse(text) {
            self.set(value);
        }
    }

    /// Reconcile with storage. Runs once; later calls do nothing.
    ///
    /// The result replaces whatever is in memory, including a value set
    /// before hydration: the stored value if it is recognized, otherwise the
    /// configured default. Memory then matches what a reload would show.
    pub fn hydrate(&mut self) {
        if self.hydrated {
            return;
        }

        let stored = match self.storage.get(&self.config.key) {
            Ok(text) => text.as_deref().and_then(P::parse),
            Err(e) => {
                log::debug!("Preference storage read failed: {}", e);
                None
            }
        };
        self.value = stored.unwrap_or(self.config.default);

        self.hydrated = true;
        log::info!("Preference hydrated: {}", self.value.as_str());
        self.notify();
    }

    /// Register a callback for value changes and for hydration.
    ///
    /// Callbacks run while the store is borrowed, so they must not reach back
    /// into the store.
    pub fn subscribe(&mut self, listener: impl FnMut(Snapshot<P>) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn persist(&self) {
        match self.storage.set(&self.config.key, self.value.as_str()) {
            Ok(()) => log::info!("Preference saved: {}", self.value.as_str()),
            Err(e) => log::debug!("Preference storage write failed: {}", e),
        }
    }

    fn notify(&mut self) {
        let snapshot = self.snapshot();
        for listener in self.listeners.iter_mut() {
            listener(snapshot);
        }
    }
}

/// Hydrate a shared store on the next turn of the browser event loop
#[cfg(target_arch = "wasm32")]
pub fn spawn_hydration<P, S>(store: std::rc::Rc<std::cell::RefCell<PreferenceStore<P, S>>>)
where
    P: Preference,
    S: KeyValueStore + 'static,
{
    wasm_bindgen_futures::spawn_local(async move {
        store.borrow_mut().hydrate();
    });
}
