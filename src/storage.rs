//! Key-value persistence port over a localStorage-like substrate.
//!
//! DESIGN
//! ======
//! The substrate is injected as a [`StorageBackend`] trait object rather
//! than reached through a global, so services can run against an in-memory
//! fake in tests and against whatever bridge the host provides in
//! production. Values cross the boundary as JSON text; one key is the unit
//! of atomicity and the last writer wins.
//!
//! ERROR HANDLING
//! ==============
//! Reads are fail-soft: a missing key, unparseable JSON, or a value of the
//! wrong shape all degrade to `None` with a `warn!`. Local corruption must
//! never block the caller.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

// =============================================================================
// BACKEND PORT
// =============================================================================

/// Synchronous string key-value substrate, shaped like the browser's
/// `localStorage` surface. Implementations absorb their own failures;
/// the trait boundary is infallible.
pub trait StorageBackend: Send + Sync {
    /// Raw string under `key`, if present.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str);

    /// Delete `key` if present; no-op otherwise.
    fn remove_item(&self, key: &str);
}

/// In-memory backend. The substrate for tests and for hosts that flush
/// state to real browser storage themselves.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items
            .lock()
            .map(|items| items.get(key).cloned())
            .unwrap_or_default()
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove_item(&self, key: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.remove(key);
        }
    }
}

/// Backend for environments with no storage substrate at all (server-side
/// rendering, headless runs). Reads are empty, writes vanish.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedBackend;

impl StorageBackend for DetachedBackend {
    fn get_item(&self, _key: &str) -> Option<String> {
        None
    }

    fn set_item(&self, _key: &str, _value: &str) {}

    fn remove_item(&self, _key: &str) {}
}

// =============================================================================
// TYPED STORE HANDLE
// =============================================================================

/// Cloneable handle services use to read and write typed values.
///
/// Serialization happens here so every service sees the same fail-soft
/// contract regardless of backend.
#[derive(Clone)]
pub struct LocalStore {
    backend: Arc<dyn StorageBackend>,
}

impl LocalStore {
    #[must_use]
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Store over a fresh [`MemoryBackend`].
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }

    /// Store over a [`DetachedBackend`]; every read is empty.
    #[must_use]
    pub fn detached() -> Self {
        Self::new(Arc::new(DetachedBackend))
    }

    /// Read and deserialize the value under `key`.
    ///
    /// Missing key reads as `None`. Corrupt JSON also reads as `None`,
    /// after a warning; it is never an error the caller has to handle.
    #[must_use]
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.backend.get_item(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "discarding corrupt stored value");
                None
            }
        }
    }

    /// Serialize `value` and store it under `key`. Last writer wins; there
    /// is no transactional guarantee beyond the single-key write.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.backend.set_item(key, &raw),
            Err(e) => {
                warn!(key, error = %e, "dropping unserializable value");
            }
        }
    }

    /// Delete `key` if present.
    pub fn remove(&self, key: &str) {
        self.backend.remove_item(key);
    }

    /// Write a raw, possibly non-JSON string directly into the substrate.
    /// Exists so tests can plant corrupt entries.
    #[cfg(test)]
    pub(crate) fn write_raw(&self, key: &str, raw: &str) {
        self.backend.set_item(key, raw);
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
