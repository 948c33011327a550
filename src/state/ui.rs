//! Local UI chrome state (mobile menu, active section).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the session stores so the
//! navbar can evolve independently of auth or language.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::store::Store;
use crate::util::storage::StorageBackend;

/// Durable storage key for [`UiState`].
pub const UI_STORAGE_KEY: &str = "portfolio-ui";

/// Section id highlighted before the user scrolls.
pub const DEFAULT_SECTION: &str = "home";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    pub is_menu_open: bool,
    pub active_section: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            is_menu_open: false,
            active_section: DEFAULT_SECTION.to_owned(),
        }
    }
}

pub type UiStore = Store<UiState>;

impl Store<UiState> {
    pub fn open_ui(backend: Arc<dyn StorageBackend>) -> Self {
        Store::open(UI_STORAGE_KEY, backend)
    }

    pub fn toggle_menu(&self) {
        self.update(|s| s.is_menu_open = !s.is_menu_open);
    }

    pub fn close_menu(&self) {
        self.update(|s| s.is_menu_open = false);
    }

    /// Highlight `section`. No write happens when it is already active, so
    /// scroll tracking does not hammer storage.
    pub fn set_active_section(&self, section: &str) {
        if self.get().active_section == section {
            return;
        }
        self.update(|s| section.clone_into(&mut s.active_section));
    }
}
