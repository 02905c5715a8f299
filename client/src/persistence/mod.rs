//! Mirroring widget state into durable storage and restoring it at startup.
//!
//! SYSTEM CONTEXT
//! ==============
//! `mirror` writes both state containers after every dispatched action and
//! `loader` reads them back once when the page hydrates. Both follow the same
//! error policy: try, log a warning, continue. Storage trouble never reaches
//! the user-facing state update.

pub mod loader;
pub mod mirror;

/// Storage key holding the serialized counter state.
pub const COUNTER_KEY: &str = "redux-counter-state";
/// Storage key holding the bare theme mode string.
pub const THEME_KEY: &str = "redux-theme-state";

/// Keys under which each container is persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageKeys {
    pub counter: String,
    pub theme: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self { counter: COUNTER_KEY.to_owned(), theme: THEME_KEY.to_owned() }
    }
}
