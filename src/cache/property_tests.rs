//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the capacity, uniqueness and ordering invariants of
//! the recency cache, including under concurrent access.

use proptest::prelude::*;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Barrier};
use std::thread;

use crate::cache::{LruStore, RecencyCache};

// == Strategies ==
/// Small key space so that overwrites and evictions happen often
fn key_strategy() -> impl Strategy<Value = i64> {
    0i64..24
}

#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: i64, value: u32 },
    Get { key: i64 },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), any::<u32>()).prop_map(|(key, value)| CacheOp::Put { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
    ]
}

// == Reference Model ==
/// Naive LRU: a deque of keys (front = most recent) plus a map of values.
struct ModelLru {
    capacity: usize,
    order: VecDeque<i64>,
    values: HashMap<i64, u32>,
}

impl ModelLru {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            order: VecDeque::new(),
            values: HashMap::new(),
        }
    }

    fn touch(&mut self, key: i64) {
        self.order.retain(|k| *k != key);
        self.order.push_front(key);
    }

    fn get(&mut self, key: i64) -> Option<u32> {
        let value = self.values.get(&key).copied();
        if value.is_some() {
            self.touch(key);
        }
        value
    }

    fn put(&mut self, key: i64, value: u32) {
        if !self.values.contains_key(&key) && self.values.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_back() {
                self.values.remove(&oldest);
            }
        }
        self.values.insert(key, value);
        self.touch(key);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any sequence of puts the cache never holds more than its capacity.
    #[test]
    fn prop_capacity_enforcement(
        capacity in 1usize..12,
        keys in prop::collection::vec(key_strategy(), 0..200)
    ) {
        let cache = RecencyCache::new(capacity).unwrap();

        for key in keys {
            cache.put(key, key);
            prop_assert!(cache.len() <= capacity, "len {} > capacity {}", cache.len(), capacity);
        }
        prop_assert!(cache.check_invariants().is_ok());
    }

    // Inserting capacity + 1 distinct keys without reads evicts exactly the first.
    #[test]
    fn prop_eviction_of_first_inserted(capacity in 1usize..32) {
        let mut store = LruStore::new(std::num::NonZeroUsize::new(capacity).unwrap());

        for key in 0..capacity as i64 {
            prop_assert_eq!(store.put(key, ()), None);
        }
        let evicted = store.put(capacity as i64, ());

        prop_assert_eq!(evicted, Some(0));
        prop_assert!(!store.contains(&0));
        for key in 1..=capacity as i64 {
            prop_assert!(store.contains(&key), "key {} should survive", key);
        }
    }

    // Overwriting a key leaves one entry holding the latest value.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in any::<u32>(),
        value2 in any::<u32>()
    ) {
        let cache = RecencyCache::new(4).unwrap();

        cache.put(key, value1);
        let before = cache.len();
        cache.put(key, value2);

        prop_assert_eq!(cache.len(), before);
        prop_assert_eq!(cache.get(&key), Some(value2));
        prop_assert_eq!(cache.keys_by_recency(), vec![key]);
    }

    // Arbitrary get/put sequences agree with a naive LRU model.
    #[test]
    fn prop_matches_reference_model(
        capacity in 1usize..8,
        ops in prop::collection::vec(cache_op_strategy(), 1..120)
    ) {
        let mut store = LruStore::new(std::num::NonZeroUsize::new(capacity).unwrap());
        let mut model = ModelLru::new(capacity);

        for op in ops {
            match op {
                CacheOp::Put { key, value } => {
                    store.put(key, value);
                    model.put(key, value);
                }
                CacheOp::Get { key } => {
                    prop_assert_eq!(store.get(&key), model.get(key));
                }
            }
            prop_assert!(store.check_invariants().is_ok());
        }

        let expected: Vec<i64> = model.order.iter().copied().collect();
        prop_assert_eq!(store.keys_by_recency(), expected);
    }

    // Concurrent interleavings against one shared cache keep every invariant.
    #[test]
    fn prop_concurrent_access_preserves_invariants(
        capacity in 1usize..10,
        workloads in prop::collection::vec(
            prop::collection::vec(cache_op_strategy(), 1..60),
            2..6
        )
    ) {
        let cache = Arc::new(RecencyCache::new(capacity).unwrap());
        let barrier = Arc::new(Barrier::new(workloads.len()));

        let handles: Vec<_> = workloads
            .into_iter()
            .map(|ops| {
                let cache = Arc::clone(&cache);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    for op in ops {
                        match op {
                            CacheOp::Put { key, value } => {
                                cache.put(key, value);
                            }
                            CacheOp::Get { key } => {
                                cache.get(&key);
                            }
                        }
                        assert!(cache.len() <= capacity);
                    }
                })
            })
            .collect();

        for handle in handles {
            prop_assert!(handle.join().is_ok());
        }

        prop_assert!(cache.len() <= capacity);
        prop_assert!(cache.check_invariants().is_ok(), "{:?}", cache.check_invariants());
        let keys = cache.keys_by_recency();
        prop_assert_eq!(keys.len(), cache.len());
    }
}
