//! Key-value storage backends for persisted widget state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The persistence mirror and snapshot loader talk to a [`KeyValueStore`]
//! rather than to `localStorage` directly, so the same code runs against the
//! browser under `hydrate`, an in-memory map during SSR, and test doubles.
//!
//! TRADE-OFFS
//! ==========
//! `BrowserStorage` looks up `window.localStorage` on every call instead of
//! caching the handle. The handle is not `Send`, and the store has to live in
//! a `RwSignal`.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Failures talking to a key-value backend or converting its contents.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("reading {key:?} failed: {message}")]
    Read { key: String, message: String },
    #[error("writing {key:?} failed: {message}")]
    Write { key: String, message: String },
    #[error("encoding {key:?} failed: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("decoding {key:?} failed: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid snapshot under {key:?}: {reason}")]
    InvalidSnapshot { key: String, reason: String },
}

/// String-keyed, string-valued durable storage.
pub trait KeyValueStore {
    /// Read the raw value under `key`, `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached or refuses the read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached or refuses the write
    /// (for example when the quota is exceeded).
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Read and decode a JSON value stored under `key`.
///
/// # Errors
///
/// Returns [`StorageError::Decode`] if the stored text is not valid JSON for
/// `T`, or the backend's read error.
pub fn read_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Result<Option<T>, StorageError> {
    let Some(raw) = store.get_item(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StorageError::Decode { key: key.to_owned(), source })
}

/// Encode `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns [`StorageError::Encode`] if serialization fails, or the backend's
/// write error.
pub fn write_json<T: Serialize>(store: &mut impl KeyValueStore, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode { key: key.to_owned(), source })?;
    store.set_item(key, &raw)
}

/// In-process map. Used during SSR and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self { entries: entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Browser `window.localStorage`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn handle() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::handle()?
            .get_item(key)
            .map_err(|e| StorageError::Read { key: key.to_owned(), message: format!("{e:?}") })
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::handle()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write { key: key.to_owned(), message: format!("{e:?}") })
    }
}

/// Backend the application store persists to on this build.
#[cfg(feature = "hydrate")]
pub type PlatformStorage = BrowserStorage;

/// Backend the application store persists to on this build.
#[cfg(not(feature = "hydrate"))]
pub type PlatformStorage = MemoryStorage;

/// Backend that rejects every read and write.
#[cfg(test)]
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct FailingStorage;

#[cfg(test)]
impl KeyValueStore for FailingStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Read { key: key.to_owned(), message: "disabled".to_owned() })
    }

    fn set_item(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write { key: key.to_owned(), message: "quota exceeded".to_owned() })
    }
}
