//! Cache Module
//!
//! Provides a bounded, thread-safe LRU cache keyed by product ID.

mod entry;
mod lru;
mod recency;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use lru::RecencyList;
pub use recency::RecencyCache;
pub use stats::CacheStats;
pub use store::LruStore;

use crate::models::{ProductId, ProductSummary};

/// Cache used by the comparison path.
pub type ProductCache = RecencyCache<ProductId, ProductSummary>;
