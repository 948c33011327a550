use super::*;
use crate::util::storage::MemoryStorage;

fn store() -> (MemoryStorage, UiStore) {
    let storage = MemoryStorage::new();
    let store = UiStore::open_ui(Arc::new(storage.clone()));
    (storage, store)
}

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_menu_closed() {
    assert!(!UiState::default().is_menu_open);
}

#[test]
fn ui_state_default_section_is_home() {
    assert_eq!(UiState::default().active_section, "home");
}

// =============================================================
// UiStore
// =============================================================

#[test]
fn toggle_menu_flips_open_flag() {
    let (_, store) = store();
    store.toggle_menu();
    assert!(store.get().is_menu_open);
    store.toggle_menu();
    assert!(!store.get().is_menu_open);
}

#[test]
fn close_menu_is_idempotent() {
    let (_, store) = store();
    store.toggle_menu();
    store.close_menu();
    store.close_menu();
    assert!(!store.get().is_menu_open);
}

#[test]
fn set_active_section_updates_value() {
    let (_, store) = store();
    store.set_active_section("skills");
    assert_eq!(store.get().active_section, "skills");
}

#[test]
fn set_active_section_same_value_skips_write() {
    let (storage, store) = store();
    store.set_active_section("home");
    assert!(storage.raw(UI_STORAGE_KEY).is_none());
}

#[test]
fn ui_state_round_trips_through_reload() {
    let (storage, store) = store();
    store.toggle_menu();
    store.set_active_section("contact");
    let reloaded = UiStore::open_ui(Arc::new(storage));
    assert_eq!(
        reloaded.get(),
        UiState { is_menu_open: true, active_section: "contact".to_owned() }
    );
}
