//! # Key-Value Storage Port
//!
//! The persistence port consumed by the session layer, plus the in-memory
//! adapter.
//!
//! ## Contract
//! - Keys and values are strings
//! - Calls are synchronous and local to the device; nothing blocks on a
//!   network or suspends
//! - Entries survive process restarts until removed (for durable adapters)
//! - Single writer: this application is the only one mutating the store
//!
//! Removing an absent key is not an error.

use std::collections::BTreeMap;

use crate::error::StoreResult;

/// Device-local, durable string key-value storage.
pub trait KeyValueStorage {
    /// Returns the value under `key`, if any.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes `key`. Succeeds when the key is already absent.
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

/// Type-erased storage, as held by long-lived application state.
pub type BoxedStorage = Box<dyn KeyValueStorage + Send>;

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Box<T> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}

// =============================================================================
// Memory Storage
// =============================================================================

/// In-memory storage. Lost when dropped; used by tests and ephemeral sessions.
///
/// Cloning yields an independent snapshot, which tests use to simulate a
/// process restart over the same persisted entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    /// Creates an empty store.
    pub fn new() -> Self {
        MemoryStorage::default()
    }

    /// Creates a store pre-seeded with entries.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        MemoryStorage {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
