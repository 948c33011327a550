//! Generic persisted state container.
//!
//! DESIGN
//! ======
//! A `Store<T>` owns exactly one record. Reads clone the current value;
//! writes replace it, mirror the JSON to the [`StorageBackend`] under the
//! store's fixed key, then notify subscribers. Components never see the
//! store's lock: `app` mirrors each store into an `RwSignal` through
//! [`Store::subscribe`].
//!
//! TRADE-OFFS
//! ==========
//! State lives behind `Arc<Mutex<_>>` even though the browser is
//! single-threaded, because Leptos contexts require `Send + Sync`. Locks are
//! never held while subscribers run, so a subscriber may read the store.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::util::storage::{StorageBackend, StorageError};

type Subscriber<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct StoreInner<T> {
    value: T,
    subscribers: Vec<Subscriber<T>>,
}

/// Persisted key-value container for one state record.
pub struct Store<T> {
    key: &'static str,
    inner: Arc<Mutex<StoreInner<T>>>,
    backend: Arc<dyn StorageBackend>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            inner: Arc::clone(&self.inner),
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<T> Store<T>
where
    T: Clone + Default + Serialize + DeserializeOwned + Send + 'static,
{
    /// Open the store under `key`, restoring the persisted value when one is
    /// present and readable, else `T::default()`.
    pub fn open(key: &'static str, backend: Arc<dyn StorageBackend>) -> Self {
        let store = Self::detached(key, backend);
        store.restore();
        store
    }

    /// Create the store with `T::default()` without reading storage. The
    /// app starts this way so server and client render identical defaults,
    /// then calls [`Store::restore`] once hydrated.
    pub fn detached(key: &'static str, backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            key,
            inner: Arc::new(Mutex::new(StoreInner { value: T::default(), subscribers: Vec::new() })),
            backend,
        }
    }

    /// Reload the persisted value, if any, and notify subscribers. Nothing is
    /// written back. Unreadable or malformed data leaves the value as is.
    pub fn restore(&self) {
        let value = match read_value::<T>(self.backend.as_ref(), self.key) {
            Ok(Some(value)) => value,
            Ok(None) => return,
            Err(e) => {
                log::warn!("{e}; keeping current value");
                return;
            }
        };
        log::debug!("restored `{}` from durable storage", self.key);
        let subscribers = {
            let mut inner = self.lock();
            inner.value = value.clone();
            inner.subscribers.clone()
        };
        for subscriber in &subscribers {
            subscriber(&value);
        }
    }

    /// Storage key this store persists under.
    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Snapshot of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.lock().value.clone()
    }

    /// Replace the current value.
    pub fn set(&self, value: T) {
        self.update(|current| *current = value);
    }

    /// Mutate the current value in place, then persist and notify.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let (snapshot, subscribers) = {
            let mut inner = self.lock();
            f(&mut inner.value);
            (inner.value.clone(), inner.subscribers.clone())
        };
        if let Err(e) = write_value(self.backend.as_ref(), self.key, &snapshot) {
            log::warn!("{e}; keeping in-memory value");
        }
        for subscriber in &subscribers {
            subscriber(&snapshot);
        }
    }

    /// Register `f` to run after every mutation with the new value.
    pub fn subscribe(&self, f: impl Fn(&T) + Send + Sync + 'static) {
        self.lock().subscribers.push(Arc::new(f));
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StoreInner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn read_value<T: DeserializeOwned>(backend: &dyn StorageBackend, key: &str) -> Result<Option<T>, StorageError> {
    let Some(raw) = backend.load(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StorageError::Malformed { key: key.to_owned(), source })
}

fn write_value<T: Serialize>(backend: &dyn StorageBackend, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Serialize { key: key.to_owned(), source })?;
    backend.save(key, &raw)
}
