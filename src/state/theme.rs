//! Color theme preference.
//!
//! Applying a theme sets a `data-theme` attribute on the `<html>` element.
//! `System` resolves through `prefers-color-scheme` at apply time. Requires a
//! browser environment; SSR paths no-op to keep server rendering
//! deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::store::Store;
use crate::util::storage::StorageBackend;

/// Durable storage key for [`ThemeState`].
pub const THEME_STORAGE_KEY: &str = "portfolio-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    System,
}

impl Theme {
    /// Concrete attribute value given whether the OS prefers dark.
    #[must_use]
    pub fn resolve(self, system_prefers_dark: bool) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::System if system_prefers_dark => "dark",
            Self::System => "light",
        }
    }

    /// Theme selected by the navbar toggle. `System` flips to an explicit
    /// choice opposite to what the OS currently shows.
    #[must_use]
    pub fn toggled(self, system_prefers_dark: bool) -> Self {
        if self.resolve(system_prefers_dark) == "dark" { Self::Light } else { Self::Dark }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeState {
    pub theme: Theme,
}

pub type ThemeStore = Store<ThemeState>;

impl Store<ThemeState> {
    pub fn open_theme(backend: Arc<dyn StorageBackend>) -> Self {
        Store::open(THEME_STORAGE_KEY, backend)
    }

    pub fn set_theme(&self, theme: Theme) {
        self.set(ThemeState { theme });
    }
}

pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    let value = theme.resolve(system_prefers_dark());
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = value;
    }
}
