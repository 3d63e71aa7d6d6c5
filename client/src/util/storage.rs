//! String key/value persistence (`localStorage` in the browser).
//!
//! SYSTEM CONTEXT
//! ==============
//! When `localStorage` is unavailable (private mode, disabled storage) the
//! binder falls back to [`MemoryStore`], so preferences still work for the
//! lifetime of the page without being persisted.

use std::cell::RefCell;
use std::collections::HashMap;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }
}

/// Page-lifetime store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// `window.localStorage`.
#[cfg(feature = "hydrate")]
pub struct LocalStorage(web_sys::Storage);

#[cfg(feature = "hydrate")]
impl LocalStorage {
    /// `None` when the browser refuses access to `localStorage`.
    #[must_use]
    pub fn open() -> Option<Self> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .map(Self)
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if self.0.set_item(key, value).is_err() {
            log::warn!("localStorage write for {key:?} was rejected");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_starts_empty() {
        assert_eq!(MemoryStore::new().get("darkMode"), None);
    }

    #[test]
    fn memory_store_overwrites_value() {
        let store = MemoryStore::new();
        store.set("darkMode", "enabled");
        store.set("darkMode", "disabled");
        assert_eq!(store.get("darkMode").as_deref(), Some("disabled"));
    }

    #[test]
    fn reference_forwards_to_store() {
        fn write<S: KeyValueStore>(store: S) {
            store.set("k", "v");
        }
        let store = MemoryStore::new();
        write(&store);
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }
}
