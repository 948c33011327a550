use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Deserialize;

use crate::util::storage::MemoryStorage;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
struct Counter {
    hits: u32,
    label: String,
}

/// Backend whose every call fails, for the storage-fault paths.
struct BrokenStorage;

impl StorageBackend for BrokenStorage {
    fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn save(&self, _key: &str, _raw: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

fn memory_store(storage: &MemoryStorage) -> Store<Counter> {
    Store::open("test-counter", Arc::new(storage.clone()))
}

// =============================================================
// Open / defaults
// =============================================================

#[test]
fn open_without_persisted_value_uses_default() {
    let storage = MemoryStorage::new();
    assert_eq!(memory_store(&storage).get(), Counter::default());
}

#[test]
fn open_with_malformed_json_falls_back_to_default() {
    let storage = MemoryStorage::new();
    storage.save("test-counter", "{not json").unwrap();
    assert_eq!(memory_store(&storage).get(), Counter::default());
}

#[test]
fn open_with_unreadable_backend_falls_back_to_default() {
    let store: Store<Counter> = Store::open("test-counter", Arc::new(BrokenStorage));
    assert_eq!(store.get(), Counter::default());
}

// =============================================================
// Mutation + persistence
// =============================================================

#[test]
fn set_persists_json_under_key() {
    let storage = MemoryStorage::new();
    let store = memory_store(&storage);
    store.set(Counter { hits: 2, label: "x".to_owned() });
    assert_eq!(storage.raw("test-counter").as_deref(), Some(r#"{"hits":2,"label":"x"}"#));
}

#[test]
fn value_survives_simulated_reload() {
    let storage = MemoryStorage::new();
    memory_store(&storage).update(|c| {
        c.hits = 7;
        c.label = "seven".to_owned();
    });
    let reloaded = memory_store(&storage);
    assert_eq!(reloaded.get(), Counter { hits: 7, label: "seven".to_owned() });
}

#[test]
fn failed_write_keeps_in_memory_value() {
    let store: Store<Counter> = Store::open("test-counter", Arc::new(BrokenStorage));
    store.update(|c| c.hits = 3);
    assert_eq!(store.get().hits, 3);
}

#[test]
fn clones_share_state() {
    let storage = MemoryStorage::new();
    let a = memory_store(&storage);
    let b = a.clone();
    a.update(|c| c.hits += 1);
    assert_eq!(b.get().hits, 1);
    assert_eq!(b.key(), "test-counter");
}

// =============================================================
// Subscribers
// =============================================================

#[test]
fn subscribers_see_every_mutation() {
    let storage = MemoryStorage::new();
    let store = memory_store(&storage);
    let seen = Arc::new(AtomicUsize::new(0));
    let seen_in_cb = Arc::clone(&seen);
    store.subscribe(move |c: &Counter| {
        seen_in_cb.store(c.hits as usize, Ordering::SeqCst);
    });
    store.update(|c| c.hits = 4);
    assert_eq!(seen.load(Ordering::SeqCst), 4);
    store.set(Counter::default());
    assert_eq!(seen.load(Ordering::SeqCst), 0);
}

#[test]
fn subscriber_may_read_store_without_deadlock() {
    let storage = MemoryStorage::new();
    let store = memory_store(&storage);
    let reader = store.clone();
    let observed = Arc::new(AtomicUsize::new(0));
    let observed_in_cb = Arc::clone(&observed);
    store.subscribe(move |_| {
        observed_in_cb.store(reader.get().hits as usize, Ordering::SeqCst);
    });
    store.update(|c| c.hits = 9);
    assert_eq!(observed.load(Ordering::SeqCst), 9);
}

// =============================================================
// Deferred restore
// =============================================================

#[test]
fn detached_store_ignores_storage_until_restored() {
    let storage = MemoryStorage::new();
    memory_store(&storage).update(|c| c.hits = 5);

    let store: Store<Counter> = Store::detached("test-counter", Arc::new(storage.clone()));
    assert_eq!(store.get().hits, 0);

    store.restore();
    assert_eq!(store.get().hits, 5);
}

#[test]
fn restore_notifies_without_writing() {
    let storage = MemoryStorage::new();
    storage.save("test-counter", r#"{"hits":8,"label":"l"}"#).unwrap();
    let store: Store<Counter> = Store::detached("test-counter", Arc::new(storage.clone()));
    let seen = Arc::new(AtomicUsize::new(0));
    let seen_in_cb = Arc::clone(&seen);
    store.subscribe(move |c: &Counter| seen_in_cb.store(c.hits as usize, Ordering::SeqCst));

    store.restore();

    assert_eq!(seen.load(Ordering::SeqCst), 8);
    assert_eq!(storage.raw("test-counter").as_deref(), Some(r#"{"hits":8,"label":"l"}"#));
}

#[test]
fn restore_with_nothing_stored_keeps_current_value() {
    let storage = MemoryStorage::new();
    let store: Store<Counter> = Store::detached("test-counter", Arc::new(storage.clone()));
    store.update(|c| c.hits = 2);
    storage.clear();
    store.restore();
    assert_eq!(store.get().hits, 2);
}
