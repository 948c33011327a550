//! Durable client-side storage adapters backing the persisted stores.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stores never touch `localStorage` directly. They hold a
//! `StorageBackend` and call `load`/`save` with raw JSON strings, so tests
//! and SSR can swap in [`MemoryStorage`] without any web-sys glue.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is reported as a [`StorageError`]; callers log it and keep
//! their in-memory value. Storage is an optimization, never a dependency.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Failure reading or writing durable storage.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("durable storage is not available")]
    Unavailable,
    #[error("storage access failed for `{key}`: {message}")]
    Access { key: String, message: String },
    #[error("malformed JSON under `{key}`: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize value for `{key}`: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// String-keyed blob storage.
///
/// Implementations must be cheap to share; stores hold them behind an `Arc`.
pub trait StorageBackend: Send + Sync {
    /// Read the raw value stored under `key`, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the storage area cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `raw` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the storage area rejects the write
    /// (quota, private mode, missing window).
    fn save(&self, key: &str, raw: &str) -> Result<(), StorageError>;
}

/// `window.localStorage` in hydrate builds; a silent no-op on the server so
/// SSR output stays deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl StorageBackend for BrowserStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(|e| StorageError::Access {
                key: key.to_owned(),
                message: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn save(&self, key: &str, raw: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.set_item(key, raw).map_err(|e| StorageError::Access {
                key: key.to_owned(),
                message: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, raw);
            Ok(())
        }
    }
}

/// Process-local storage map. Clones share the same entries, which is how
/// tests simulate a page reload: open a second store over a clone.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value currently stored under `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Drop every entry, like a browser "clear site data".
    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl StorageBackend for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn save(&self, key: &str, raw: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), raw.to_owned());
        Ok(())
    }
}
