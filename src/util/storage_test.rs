use super::*;

#[test]
fn memory_storage_missing_key_is_none() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.load("portfolio-auth").unwrap(), None);
}

#[test]
fn memory_storage_save_then_load() {
    let storage = MemoryStorage::new();
    storage.save("k", "{\"a\":1}").unwrap();
    assert_eq!(storage.load("k").unwrap().as_deref(), Some("{\"a\":1}"));
}

#[test]
fn memory_storage_clones_share_entries() {
    let storage = MemoryStorage::new();
    let reloaded = storage.clone();
    storage.save("k", "1").unwrap();
    assert_eq!(reloaded.raw("k").as_deref(), Some("1"));
}

#[test]
fn memory_storage_clear_drops_everything() {
    let storage = MemoryStorage::new();
    storage.save("a", "1").unwrap();
    storage.save("b", "2").unwrap();
    storage.clear();
    assert!(storage.raw("a").is_none());
    assert!(storage.raw("b").is_none());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_noop_off_browser() {
    let storage = BrowserStorage;
    storage.save("k", "1").unwrap();
    assert_eq!(storage.load("k").unwrap(), None);
}

#[test]
fn storage_error_messages_name_the_key() {
    let err = StorageError::Access { key: "portfolio-ui".to_owned(), message: "QuotaExceeded".to_owned() };
    assert_eq!(err.to_string(), "storage access failed for `portfolio-ui`: QuotaExceeded");
}
