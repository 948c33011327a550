use super::*;
use crate::util::storage::MemoryStorage;

#[test]
fn default_language_is_french() {
    assert_eq!(LanguageState::default().language, Language::Fr);
}

#[test]
fn language_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Language::En).unwrap(), "\"en\"");
    assert_eq!(serde_json::from_str::<Language>("\"fr\"").unwrap(), Language::Fr);
}

#[test]
fn language_code_matches_wire_name() {
    assert_eq!(Language::Fr.code(), "fr");
    assert_eq!(Language::En.code(), "en");
}

#[test]
fn toggle_language_alternates() {
    let store = LanguageStore::open_language(Arc::new(MemoryStorage::new()));
    store.toggle_language();
    assert_eq!(store.language(), Language::En);
    store.toggle_language();
    assert_eq!(store.language(), Language::Fr);
}

#[test]
fn language_round_trips_through_reload() {
    let storage = MemoryStorage::new();
    LanguageStore::open_language(Arc::new(storage.clone())).set_language(Language::En);
    let reloaded = LanguageStore::open_language(Arc::new(storage.clone()));
    assert_eq!(reloaded.language(), Language::En);
    assert_eq!(storage.raw(LANGUAGE_STORAGE_KEY).as_deref(), Some(r#"{"language":"en"}"#));
}

#[test]
fn unknown_persisted_language_falls_back_to_default() {
    let storage = MemoryStorage::new();
    storage.save(LANGUAGE_STORAGE_KEY, r#"{"language":"de"}"#).unwrap();
    let store = LanguageStore::open_language(Arc::new(storage));
    assert_eq!(store.language(), Language::Fr);
}
