//! Admin session state for the signed-in site owner.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written only by the admin modal after the identity check passes; read by
//! the modal and the admin trigger button to render identity-dependent UI.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::store::Store;
use crate::net::types::User;
use crate::util::storage::StorageBackend;

/// Durable storage key for [`AuthState`].
pub const AUTH_STORAGE_KEY: &str = "portfolio-auth";

/// Authentication flag and the profile it was granted to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<User>,
}

pub type AuthStore = Store<AuthState>;

impl Store<AuthState> {
    /// Open the auth store over `backend`.
    pub fn open_auth(backend: Arc<dyn StorageBackend>) -> Self {
        Store::open(AUTH_STORAGE_KEY, backend)
    }

    /// Set the flag and user together.
    pub fn set_authenticated(&self, authenticated: bool, user: Option<User>) {
        self.set(AuthState { is_authenticated: authenticated, user });
    }

    /// Clear both the flag and the user in a single mutation.
    pub fn logout(&self) {
        self.set(AuthState::default());
    }
}
