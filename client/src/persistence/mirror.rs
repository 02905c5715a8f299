//! Best-effort write-through of state to a key-value backend.

#[cfg(test)]
#[path = "mirror_test.rs"]
mod mirror_test;

use crate::persistence::StorageKeys;
use crate::state::counter::CounterState;
use crate::state::theme::ThemeMode;
use crate::util::storage::{KeyValueStore, StorageError, write_json};

/// Writes the counter and theme entries after each state change.
#[derive(Clone, Debug)]
pub struct PersistenceMirror<K> {
    storage: K,
    keys: StorageKeys,
}

impl<K: KeyValueStore> PersistenceMirror<K> {
    pub fn new(storage: K, keys: StorageKeys) -> Self {
        Self { storage, keys }
    }

    pub fn storage(&self) -> &K {
        &self.storage
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    /// Write both entries. Each key is attempted independently; failures are
    /// logged and dropped.
    pub fn persist(&mut self, counter: &CounterState, theme: ThemeMode) {
        self.persist_counter(counter);
        self.persist_theme(theme);
    }

    /// Write only the counter entry.
    pub fn persist_counter(&mut self, counter: &CounterState) {
        if let Err(e) = write_json(&mut self.storage, &self.keys.counter, counter) {
            warn_write_failed(&e);
        }
    }

    /// Write only the theme entry.
    pub fn persist_theme(&mut self, theme: ThemeMode) {
        if let Err(e) = write_json(&mut self.storage, &self.keys.theme, &theme) {
            warn_write_failed(&e);
        }
    }
}

fn warn_write_failed(error: &StorageError) {
    leptos::logging::warn!("could not save state to storage: {error}");
}
