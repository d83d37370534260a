//! LRU Order Module
//!
//! Arena-backed doubly-linked list that keeps cache entries in recency order.

use std::mem;

use crate::cache::CacheEntry;

// == Recency List ==
/// Recency order of cache entries, stored in a slot arena.
///
/// - Head = Most recently used
/// - Tail = Least recently used
///
/// Slots are never freed: eviction overwrites the tail slot in place, so the
/// arena grows to the cache capacity and stays there.
#[derive(Debug)]
pub struct RecencyList<K, V> {
    /// Slot arena; links are indices into this vector
    slots: Vec<CacheEntry<K, V>>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<K, V> RecencyList<K, V> {
    // == Constructor ==
    /// Creates an empty list with room for `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    // == Length ==
    /// Returns the number of linked entries.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    // == Slot Access ==
    pub fn get(&self, slot: usize) -> Option<&CacheEntry<K, V>> {
        self.slots.get(slot)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut CacheEntry<K, V>> {
        self.slots.get_mut(slot)
    }

    // == Push Front ==
    /// Stores a new entry in a fresh slot as the most recently used one.
    ///
    /// Returns the slot index.
    pub fn push_front(&mut self, key: K, value: V) -> usize {
        let slot = self.slots.len();
        self.slots.push(CacheEntry::new(key, value));
        self.link_front(slot);
        slot
    }

    // == Move To Front ==
    /// Marks the entry in `slot` as most recently used.
    pub fn move_to_front(&mut self, slot: usize) {
        if self.head == Some(slot) || slot >= self.slots.len() {
            return;
        }
        self.unlink(slot);
        self.link_front(slot);
    }

    // == Replace Back ==
    /// Overwrites the least recently used entry with `key`/`value` and makes
    /// it the most recently used one.
    ///
    /// Returns the reused slot and the key it held before. On an empty list
    /// nothing can be replaced and the pair is handed back unchanged.
    pub fn replace_back(&mut self, key: K, value: V) -> Result<(usize, K), (K, V)> {
        let Some(slot) = self.tail else {
            return Err((key, value));
        };

        self.unlink(slot);
        let entry = &mut self.slots[slot];
        let evicted = mem::replace(&mut entry.key, key);
        entry.value = value;
        self.link_front(slot);

        Ok((slot, evicted))
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without touching it.
    #[cfg(test)]
    pub fn peek_back(&self) -> Option<&K> {
        self.tail.map(|slot| &self.slots[slot].key)
    }

    // == Iterate ==
    /// Walks entries from most to least recently used.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.slots.len(),
        }
    }

    fn unlink(&mut self, slot: usize) {
        let (prev, next) = {
            let entry = &self.slots[slot];
            (entry.prev, entry.next)
        };

        match prev {
            Some(p) => self.slots[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.slots[n].prev = prev,
            None => self.tail = prev,
        }

        let entry = &mut self.slots[slot];
        entry.prev = None;
        entry.next = None;
    }

    fn link_front(&mut self, slot: usize) {
        let old_head = self.head;
        {
            let entry = &mut self.slots[slot];
            entry.prev = None;
            entry.next = old_head;
        }

        match old_head {
            Some(h) => self.slots[h].prev = Some(slot),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
    }
}

// == Iterator ==
/// Iterator over entries in recency order, most recent first.
pub struct Iter<'a, K, V> {
    list: &'a RecencyList<K, V>,
    cursor: Option<usize>,
    // Caps the walk at len steps.
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a CacheEntry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entry = self.list.slots.get(self.cursor?)?;
        self.cursor = entry.next;
        self.remaining -= 1;
        Some(entry)
    }
}
