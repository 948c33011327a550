//! Display language preference.

#[cfg(test)]
#[path = "language_test.rs"]
mod language_test;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::store::Store;
use crate::util::storage::StorageBackend;

/// Durable storage key for [`LanguageState`].
pub const LANGUAGE_STORAGE_KEY: &str = "portfolio-lang";

/// Supported site languages. French is the site's primary language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    En,
}

impl Language {
    /// BCP 47 tag used for `<html lang>`.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::En => "en",
        }
    }

    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Fr => Self::En,
            Self::En => Self::Fr,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageState {
    pub language: Language,
}

pub type LanguageStore = Store<LanguageState>;

impl Store<LanguageState> {
    pub fn open_language(backend: Arc<dyn StorageBackend>) -> Self {
        Store::open(LANGUAGE_STORAGE_KEY, backend)
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.get().language
    }

    pub fn set_language(&self, language: Language) {
        self.set(LanguageState { language });
    }

    pub fn toggle_language(&self) {
        self.update(|s| s.language = s.language.other());
    }
}

/// Mirror the language onto `<html lang>`.
pub fn apply(language: Language) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("lang", language.code());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = language;
    }
}
