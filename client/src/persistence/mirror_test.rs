use super::*;
use crate::persistence::{COUNTER_KEY, THEME_KEY};
use crate::util::storage::{FailingStorage, MemoryStorage};

/// Rejects writes to one key and accepts the rest.
#[derive(Default)]
struct RejectKey {
    rejected: &'static str,
    inner: MemoryStorage,
}

impl KeyValueStore for RejectKey {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if key == self.rejected {
            return Err(StorageError::Write { key: key.to_owned(), message: "quota exceeded".to_owned() });
        }
        self.inner.set_item(key, value)
    }
}

#[test]
fn persist_writes_both_entries() {
    let mut mirror = PersistenceMirror::new(MemoryStorage::default(), StorageKeys::default());
    let counter = CounterState { value: 2, history: vec![0, 1, 2] };
    mirror.persist(&counter, ThemeMode::Dark);

    assert_eq!(mirror.storage().get(COUNTER_KEY), Some(r#"{"value":2,"history":[0,1,2]}"#));
    assert_eq!(mirror.storage().get(THEME_KEY), Some("\"dark\""));
}

#[test]
fn persist_overwrites_previous_entries() {
    let mut mirror = PersistenceMirror::new(MemoryStorage::default(), StorageKeys::default());
    mirror.persist(&CounterState::default(), ThemeMode::Dark);
    mirror.persist(&CounterState { value: 1, history: vec![0, 1] }, ThemeMode::Light);

    assert_eq!(mirror.storage().get(COUNTER_KEY), Some(r#"{"value":1,"history":[0,1]}"#));
    assert_eq!(mirror.storage().get(THEME_KEY), Some("\"light\""));
}

#[test]
fn persist_uses_configured_keys() {
    let keys = StorageKeys { counter: "c".to_owned(), theme: "t".to_owned() };
    let mut mirror = PersistenceMirror::new(MemoryStorage::default(), keys);
    mirror.persist(&CounterState::default(), ThemeMode::Light);

    assert!(mirror.storage().get("c").is_some());
    assert!(mirror.storage().get("t").is_some());
    assert!(mirror.storage().get(COUNTER_KEY).is_none());
}

#[test]
fn persist_swallows_write_failures() {
    let mut mirror = PersistenceMirror::new(FailingStorage, StorageKeys::default());
    mirror.persist(&CounterState::default(), ThemeMode::Dark);
}

#[test]
fn failed_counter_write_still_writes_theme() {
    let storage = RejectKey { rejected: COUNTER_KEY, ..RejectKey::default() };
    let mut mirror = PersistenceMirror::new(storage, StorageKeys::default());
    mirror.persist(&CounterState::default(), ThemeMode::Dark);

    assert_eq!(mirror.storage().inner.get(COUNTER_KEY), None);
    assert_eq!(mirror.storage().inner.get(THEME_KEY), Some("\"dark\""));
}

#[test]
fn persist_counter_writes_only_counter_key() {
    let mut mirror = PersistenceMirror::new(MemoryStorage::default(), StorageKeys::default());
    mirror.persist_counter(&CounterState { value: 3, history: vec![3] });
    assert_eq!(mirror.storage().get(COUNTER_KEY), Some(r#"{"value":3,"history":[3]}"#));
    assert_eq!(mirror.storage().get(THEME_KEY), None);
}

#[test]
fn persist_theme_writes_only_theme_key() {
    let mut mirror = PersistenceMirror::new(MemoryStorage::default(), StorageKeys::default());
    mirror.persist_theme(ThemeMode::Dark);
    assert_eq!(mirror.storage().get(THEME_KEY), Some("\"dark\""));
    assert_eq!(mirror.storage().get(COUNTER_KEY), None);
}
