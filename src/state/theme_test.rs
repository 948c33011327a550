use super::*;
use crate::util::storage::MemoryStorage;

#[test]
fn default_theme_is_dark() {
    assert_eq!(ThemeState::default().theme, Theme::Dark);
}

#[test]
fn resolve_fixed_themes_ignore_system() {
    assert_eq!(Theme::Dark.resolve(false), "dark");
    assert_eq!(Theme::Light.resolve(true), "light");
}

#[test]
fn resolve_system_follows_preference() {
    assert_eq!(Theme::System.resolve(true), "dark");
    assert_eq!(Theme::System.resolve(false), "light");
}

#[test]
fn theme_round_trips_through_reload() {
    let storage = MemoryStorage::new();
    ThemeStore::open_theme(Arc::new(storage.clone())).set_theme(Theme::System);
    let reloaded = ThemeStore::open_theme(Arc::new(storage));
    assert_eq!(reloaded.get().theme, Theme::System);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Light);
    apply(Theme::System);
}

#[test]
fn toggled_flips_explicit_themes() {
    assert_eq!(Theme::Dark.toggled(false), Theme::Light);
    assert_eq!(Theme::Light.toggled(true), Theme::Dark);
}

#[test]
fn toggled_from_system_goes_opposite_of_os() {
    assert_eq!(Theme::System.toggled(true), Theme::Light);
    assert_eq!(Theme::System.toggled(false), Theme::Dark);
}
