//! Lingo Prefs entry point
//!
//! On the web this binds the store to the page. Natively it walks through a
//! save-and-reload cycle against in-memory storage.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, MouseEvent};

    use lingo_prefs::consts::TOGGLE_ELEMENT_ID;
    use lingo_prefs::{LocalStorage, Locale, Preference, PreferenceStore, Snapshot, spawn_hydration};

    type Store = PreferenceStore<Locale, LocalStorage>;

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Lingo Prefs starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document, nothing to bind");
            return;
        };

        let store = Rc::new(RefCell::new(Store::new(LocalStorage)));

        // First paint uses the default, whatever storage holds
        render(&document, store.borrow().snapshot());

        {
            let document = document.clone();
            store
                .borrow_mut()
                .subscribe(move |snapshot| render(&document, snapshot));
        }

        setup_toggle(&document, store.clone());

        spawn_hydration(store);
    }

    fn render(document: &Document, snapshot: Snapshot<Locale>) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("lang", snapshot.value.html_lang());
            let state = if snapshot.hydrated { "ready" } else { "pending" };
            let _ = root.set_attribute("data-locale-state", state);
        }

        if let Some(toggle) = document.get_element_by_id(TOGGLE_ELEMENT_ID) {
            // Label offers the language a click switches to
            toggle.set_text_content(Some(snapshot.value.next().display_name()));
        }
    }

    fn setup_toggle(document: &Document, store: Rc<RefCell<Store>>) {
        let Some(toggle) = document.get_element_by_id(TOGGLE_ELEMENT_ID) else {
            log::warn!("#{} not found, language switch disabled", TOGGLE_ELEMENT_ID);
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let mut s = store.borrow_mut();
            let next = s.get().next();
            s.set(next);
            log::info!("Language switched to {}", next.as_str());
        });
        let _ = toggle.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use lingo_prefs::{Locale, MemoryStore, PreferenceStore};

    env_logger::init();
    log::info!("Lingo Prefs (native) starting...");
    log::info!("Native mode uses in-memory storage - build for wasm32 to persist in the browser");

    let storage = MemoryStore::new();

    let mut store: PreferenceStore<Locale, _> = PreferenceStore::new(storage.clone());
    println!("first visit, before hydration: {:?}", store.snapshot());
    store.hydrate();
    println!("first visit, hydrated:         {:?}", store.snapshot());
    store.set(Locale::Amharic);
    println!("after switching:               {:?}", store.snapshot());
    drop(store);

    let mut store: PreferenceStore<Locale, _> = PreferenceStore::new(storage);
    println!("reload, before hydration:      {:?}", store.snapshot());
    store.hydrate();
    println!("reload, hydrated:              {:?}", store.snapshot());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
