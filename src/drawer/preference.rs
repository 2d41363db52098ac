//! Persistence of the desktop open/closed preference

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{StorageError, StorageResult};

/// A string key-value store, local to the browser
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// In-memory store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store that refuses every operation, e.g. private browsing with storage disabled
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::Unavailable)
    }
}

/// Boolean preference encoded as `"true"` / `"false"` under a single key.
///
/// Both directions are best-effort: failures are logged and swallowed so the
/// in-memory drawer state stays authoritative for the rest of the session.
pub struct PreferenceStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stored preference, or `None` when nothing has been saved
    pub fn load(&self) -> Option<bool> {
        match self.store.get(&self.key) {
            Ok(raw) => raw.map(|value| decode(&value)),
            Err(err) => {
                tracing::warn!("Could not read drawer preference: {}", err);
                None
            }
        }
    }

    pub fn save(&self, value: bool) {
        if let Err(err) = self.store.set(&self.key, encode(value)) {
            tracing::warn!("Could not persist drawer preference: {}", err);
        }
    }
}

fn encode(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

// Anything other than the exact string "true" reads as closed
fn decode(raw: &str) -> bool {
    raw == "true"
}
