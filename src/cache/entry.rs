//! Cache Entry Module
//!
//! Defines a single slot of the recency arena.

// == Cache Entry ==
/// One key/value pair plus its neighbours in the recency order.
///
/// Neighbours are slot indices into the owning arena rather than pointers,
/// so the list stays in safe Rust.
#[derive(Debug, Clone)]
pub struct CacheEntry<K, V> {
    /// Key this slot is stored under
    pub key: K,
    /// The stored value
    pub value: V,
    /// Slot of the next more recently used entry
    pub prev: Option<usize>,
    /// Slot of the next less recently used entry
    pub next: Option<usize>,
}

impl<K, V> CacheEntry<K, V> {
    // == Constructor ==
    /// Creates a detached entry.
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            prev: None,
            next: None,
        }
    }
}
