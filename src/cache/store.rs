//! Cache Store Module
//!
//! Single-threaded LRU engine: a key-to-slot index over the recency arena.

use std::collections::HashMap;
use std::hash::Hash;
use std::num::NonZeroUsize;

use crate::cache::{CacheStats, RecencyList};

// == Cache Store ==
/// Bounded key-value storage with least-recently-used eviction.
///
/// Every key in `index` points at exactly one linked slot of `order` holding
/// that same key, and `order` never grows past `capacity`.
#[derive(Debug)]
pub struct LruStore<K, V> {
    /// Key to arena slot
    index: HashMap<K, usize>,
    /// Recency order and values
    order: RecencyList<K, V>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: NonZeroUsize,
}

impl<K, V> LruStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    // == Constructor ==
    /// Creates an empty store holding at most `capacity` entries.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity.get()),
            order: RecencyList::with_capacity(capacity.get()),
            stats: CacheStats::new(),
            capacity,
        }
    }

    // == Get ==
    /// Returns a copy of the value for `key` and marks it most recently used.
    ///
    /// A miss has no effect besides the miss counter.
    pub fn get(&mut self, key: &K) -> Option<V> {
        let Some(&slot) = self.index.get(key) else {
            self.stats.record_miss();
            return None;
        };

        self.order.move_to_front(slot);
        self.stats.record_hit();
        self.order.get(slot).map(|entry| entry.value.clone())
    }

    // == Put ==
    /// Stores `value` under `key` as the most recently used entry.
    ///
    /// Overwriting an existing key never evicts. Inserting a new key into a
    /// full store evicts the least recently used entry first.
    ///
    /// Returns the evicted key, if any.
    pub fn put(&mut self, key: K, value: V) -> Option<K> {
        if let Some(&slot) = self.index.get(&key) {
            if let Some(entry) = self.order.get_mut(slot) {
                entry.value = value;
            }
            self.order.move_to_front(slot);
            return None;
        }

        let mut evicted = None;
        let slot = if self.order.len() >= self.capacity.get() {
            match self.order.replace_back(key.clone(), value) {
                Ok((slot, old_key)) => {
                    self.index.remove(&old_key);
                    self.stats.record_eviction();
                    evicted = Some(old_key);
                    slot
                }
                Err((key, value)) => self.order.push_front(key, value),
            }
        } else {
            self.order.push_front(key.clone(), value)
        };

        self.index.insert(key, slot);
        self.stats.set_total_entries(self.index.len());
        evicted
    }

    // == Contains ==
    /// Checks for `key` without affecting recency or statistics.
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    // == Keys By Recency ==
    /// Snapshot of keys from most to least recently used.
    pub fn keys_by_recency(&self) -> Vec<K> {
        self.order.iter().map(|entry| entry.key.clone()).collect()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.index.len());
        stats
    }

    /// Verifies that index and recency order describe the same key set.
    #[cfg(test)]
    pub fn check_invariants(&self) -> std::result::Result<(), String> {
        use std::collections::HashSet;

        if self.index.len() > self.capacity.get() {
            return Err(format!(
                "{} entries exceed capacity {}",
                self.index.len(),
                self.capacity
            ));
        }
        if self.index.len() != self.order.len() {
            return Err(format!(
                "index has {} keys but order has {} slots",
                self.index.len(),
                self.order.len()
            ));
        }

        let mut seen = HashSet::new();
        for entry in self.order.iter() {
            if !seen.insert(entry.key.clone()) {
                return Err("key linked twice in recency order".to_string());
            }
            match self.index.get(&entry.key) {
                Some(&slot) if self.order.get(slot).is_some_and(|e| e.key == entry.key) => {}
                _ => return Err("linked key missing from index".to_string()),
            }
        }
        if seen.len() != self.order.len() {
            return Err(format!(
                "walked {} entries of {}",
                seen.len(),
                self.order.len()
            ));
        }
        Ok(())
    }
}
