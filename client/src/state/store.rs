//! Application store: both containers plus write-through persistence.
//!
//! DESIGN
//! ======
//! All mutations are expressed as [`Action`] values and go through
//! [`Store::dispatch`], which applies the action and then persists the result
//! through the injected backend. Stores are plain values, so tests build as
//! many isolated instances as they need.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::persistence::StorageKeys;
use crate::persistence::loader::{Snapshot, load_snapshot};
use crate::persistence::mirror::PersistenceMirror;
use crate::state::counter::CounterState;
use crate::state::theme::{ThemeMode, ThemeState};
use crate::util::storage::KeyValueStore;

/// Every mutation the widget can perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Increment,
    Decrement,
    Reset,
    IncrementByAmount(i64),
    ClearHistory,
    LoadCounter(CounterState),
    ToggleTheme,
    LoadTheme(ThemeMode),
}

/// Combined in-memory state of the widget.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    pub counter: CounterState,
    pub theme: ThemeState,
}

impl AppState {
    /// Apply one action in place. Never fails.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Increment => self.counter.increment(),
            Action::Decrement => self.counter.decrement(),
            Action::Reset => self.counter.reset(),
            Action::IncrementByAmount(amount) => self.counter.increment_by_amount(amount),
            Action::ClearHistory => self.counter.clear_history(),
            Action::LoadCounter(snapshot) => self.counter.load_snapshot(snapshot),
            Action::ToggleTheme => self.theme.toggle(),
            Action::LoadTheme(mode) => self.theme.load_snapshot(mode),
        }
    }
}

/// State holder with apply-then-persist dispatch.
#[derive(Clone, Debug)]
pub struct Store<K> {
    state: AppState,
    mirror: PersistenceMirror<K>,
}

impl<K: KeyValueStore> Store<K> {
    /// Create a store at default state persisting to `storage`.
    pub fn new(storage: K, keys: StorageKeys) -> Self {
        Self { state: AppState::default(), mirror: PersistenceMirror::new(storage, keys) }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn storage(&self) -> &K {
        self.mirror.storage()
    }

    /// Apply `action`, then write the new state through to storage.
    pub fn dispatch(&mut self, action: Action) {
        self.state.apply(action);
        self.mirror.persist(&self.state.counter, self.state.theme.mode);
    }

    /// Restore whatever valid entries storage holds. Missing or rejected
    /// entries leave the corresponding container and its stored text
    /// untouched; only the entries actually loaded are written back.
    pub fn rehydrate(&mut self) {
        let Snapshot { counter, theme } = load_snapshot(self.mirror.storage(), self.mirror.keys());
        if let Some(counter) = counter {
            self.state.apply(Action::LoadCounter(counter));
            self.mirror.persist_counter(&self.state.counter);
        }
        if let Some(mode) = theme {
            self.state.apply(Action::LoadTheme(mode));
            self.mirror.persist_theme(self.state.theme.mode);
        }
    }
}
