//! Recency Cache Module
//!
//! Thread-safe wrapper serializing all access to an [`LruStore`].

use std::hash::Hash;
use std::num::NonZeroUsize;

use parking_lot::Mutex;

use crate::cache::{CacheStats, LruStore};
use crate::error::{AppError, Result};

// == Recency Cache ==
/// Fixed-capacity LRU cache safe to share between tasks.
///
/// One mutex guards both the key index and the recency order. Each call holds
/// it for O(1) bookkeeping only; callers must never hold it across I/O, which
/// the API enforces by never handing out the guard.
#[derive(Debug)]
pub struct RecencyCache<K, V> {
    inner: Mutex<LruStore<K, V>>,
}

impl<K, V> RecencyCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    // == Constructor ==
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// A zero capacity is a configuration error.
    pub fn new(capacity: usize) -> Result<Self> {
        NonZeroUsize::new(capacity)
            .map(Self::with_capacity)
            .ok_or_else(|| AppError::Config("cache capacity must be at least 1".to_string()))
    }

    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            inner: Mutex::new(LruStore::new(capacity)),
        }
    }

    // == Get ==
    /// Returns a copy of the cached value and marks `key` most recently used.
    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.lock().get(key)
    }

    // == Put ==
    /// Inserts or overwrites `key`, evicting the least recently used entry
    /// when a new key arrives at a full cache.
    ///
    /// Returns the evicted key, if any.
    pub fn put(&self, key: K, value: V) -> Option<K> {
        self.inner.lock().put(key, value)
    }

    /// Checks for `key` without affecting recency.
    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().contains(key)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity().get()
    }

    /// Snapshot of keys from most to least recently used.
    pub fn keys_by_recency(&self) -> Vec<K> {
        self.inner.lock().keys_by_recency()
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }

    #[cfg(test)]
    pub fn check_invariants(&self) -> std::result::Result<(), String> {
        self.inner.lock().check_invariants()
    }
}
