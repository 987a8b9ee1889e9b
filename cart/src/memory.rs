//! In-memory [`KeyValueStore`] shared between clones.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::store::{KeyValueStore, StoreError};

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

/// Thread-safe map store. Clones share the same underlying map, so two
/// adapters built from clones behave like two tabs over one `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `key = value`.
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_owned(), value.to_owned());
        Self { entries: Arc::new(RwLock::new(entries)) }
    }

    /// Remove `key`, returning whether it was present.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the lock is poisoned.
    pub fn remove_item(&self, key: &str) -> Result<bool, StoreError> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        Ok(entries.remove(key).is_some())
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn compare_and_set(&self, key: &str, expected: Option<&str>, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        if entries.get(key).map(String::as_str) != expected {
            return Err(StoreError::Conflict(key.to_owned()));
        }
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

fn poisoned<T>(err: std::sync::PoisonError<T>) -> StoreError {
    StoreError::Unavailable(format!("memory store lock poisoned: {err}"))
}
