//! Startup rehydration from the persisted entries.
//!
//! Each key is read and validated on its own: a corrupt theme entry does not
//! stop the counter from being restored, and vice versa.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use crate::persistence::StorageKeys;
use crate::state::counter::CounterState;
use crate::state::theme::ThemeMode;
use crate::util::storage::{KeyValueStore, StorageError, read_json};

/// Entries recovered from storage. `None` means absent or rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub counter: Option<CounterState>,
    pub theme: Option<ThemeMode>,
}

/// Read both entries, logging and skipping any that cannot be used.
pub fn load_snapshot(storage: &impl KeyValueStore, keys: &StorageKeys) -> Snapshot {
    Snapshot {
        counter: read_counter(storage, &keys.counter).unwrap_or_else(|e| {
            warn_load_failed(&e);
            None
        }),
        theme: read_json(storage, &keys.theme).unwrap_or_else(|e| {
            warn_load_failed(&e);
            None
        }),
    }
}

/// Read the counter entry and reject snapshots without any history.
///
/// # Errors
///
/// Returns an error if the entry cannot be read, is not a well-typed counter
/// state, or has an empty history.
pub fn read_counter(storage: &impl KeyValueStore, key: &str) -> Result<Option<CounterState>, StorageError> {
    let Some(counter) = read_json::<CounterState>(storage, key)? else {
        return Ok(None);
    };
    if counter.history.is_empty() {
        return Err(StorageError::InvalidSnapshot { key: key.to_owned(), reason: "history is empty".to_owned() });
    }
    Ok(Some(counter))
}

fn warn_load_failed(error: &StorageError) {
    leptos::logging::warn!("could not load state from storage: {error}");
}
