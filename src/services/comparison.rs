//! Comparison Service
//!
//! Resolves two product IDs to prices through a read-through recency cache
//! and decides which product is more expensive.

use std::num::NonZeroUsize;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::cache::{CacheStats, ProductCache};
use crate::catalog::CatalogClient;
use crate::config::CacheScope;
use crate::error::{AppError, Result};
use crate::models::{ProductId, ProductSummary};

// == Comparison ==
/// Outcome of comparing two products by price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    /// Price of the first requested product
    pub product_one: f64,
    /// Price of the second requested product
    pub product_two: f64,
    /// Strictly pricier product, `None` on a tie
    pub winner: Option<ProductId>,
}

impl Comparison {
    pub fn new(first: (ProductId, f64), second: (ProductId, f64)) -> Self {
        let (first_id, product_one) = first;
        let (second_id, product_two) = second;

        let winner = if product_one > product_two {
            Some(first_id)
        } else if product_two > product_one {
            Some(second_id)
        } else {
            None
        };

        Self {
            product_one,
            product_two,
            winner,
        }
    }
}

enum CacheHandle {
    Shared(ProductCache),
    PerRequest {
        capacity: NonZeroUsize,
        /// Counters folded in from every finished per-request cache
        totals: Mutex<CacheStats>,
    },
}

/// Cache living for one comparison; folds its counters into `totals` when
/// dropped, including when the request future is cancelled mid-fetch.
struct RequestCache<'a> {
    cache: ProductCache,
    totals: &'a Mutex<CacheStats>,
}

impl Drop for RequestCache<'_> {
    fn drop(&mut self) {
        self.totals.lock().merge(&self.cache.stats());
    }
}

// == Comparison Service ==
/// Orchestrates the two read-through lookups behind `GET /compare`.
pub struct ComparisonService {
    catalog: Arc<dyn CatalogClient>,
    cache: CacheHandle,
}

impl ComparisonService {
    /// Creates a service whose cache lifetime follows `scope`.
    pub fn new(catalog: Arc<dyn CatalogClient>, scope: CacheScope, capacity: NonZeroUsize) -> Self {
        let cache = match scope {
            CacheScope::Shared => CacheHandle::Shared(ProductCache::with_capacity(capacity)),
            CacheScope::PerRequest => CacheHandle::PerRequest {
                capacity,
                totals: Mutex::new(CacheStats::new()),
            },
        };
        Self { catalog, cache }
    }

    pub fn scope(&self) -> CacheScope {
        match self.cache {
            CacheHandle::Shared(_) => CacheScope::Shared,
            CacheHandle::PerRequest { .. } => CacheScope::PerRequest,
        }
    }

    pub fn capacity(&self) -> usize {
        match &self.cache {
            CacheHandle::Shared(cache) => cache.capacity(),
            CacheHandle::PerRequest { capacity, .. } => capacity.get(),
        }
    }

    /// Process-wide cache, absent in per-request scope.
    pub fn shared_cache(&self) -> Option<&ProductCache> {
        match &self.cache {
            CacheHandle::Shared(cache) => Some(cache),
            CacheHandle::PerRequest { .. } => None,
        }
    }

    // == Compare ==
    /// Fetches both prices (cache first) and picks the strictly higher one.
    ///
    /// Lookups run one after the other, so comparing a product with itself
    /// costs a single catalog call. Any failed lookup fails the whole
    /// comparison.
    pub async fn compare(&self, first: ProductId, second: ProductId) -> Result<Comparison> {
        match &self.cache {
            CacheHandle::Shared(cache) => self.compare_with(cache, first, second).await,
            CacheHandle::PerRequest { capacity, totals } => {
                let scoped = RequestCache {
                    cache: ProductCache::with_capacity(*capacity),
                    totals,
                };
                let outcome = self.compare_with(&scoped.cache, first, second).await;
                drop(scoped);
                outcome
            }
        }
    }

    /// Hit/miss/eviction counters for the configured cache scope.
    pub fn cache_stats(&self) -> CacheStats {
        match &self.cache {
            CacheHandle::Shared(cache) => cache.stats(),
            CacheHandle::PerRequest { totals, .. } => totals.lock().clone(),
        }
    }

    async fn compare_with(
        &self,
        cache: &ProductCache,
        first: ProductId,
        second: ProductId,
    ) -> Result<Comparison> {
        let one = self.resolve(cache, first).await?;
        let two = self.resolve(cache, second).await?;

        Ok(Comparison::new((first, one.price), (second, two.price)))
    }

    // == Read-through ==
    /// Returns the cached summary for `id`, or fetches and caches it.
    ///
    /// The cache lock is only taken inside `get`/`put`, never across the fetch.
    /// A failed fetch leaves the cache untouched.
    async fn resolve(&self, cache: &ProductCache, id: ProductId) -> Result<ProductSummary> {
        if let Some(summary) = cache.get(&id) {
            debug!("Cache hit for product {}", id);
            return Ok(summary);
        }

        debug!("Cache miss for product {}", id);
        let summary = self.catalog.fetch_by_id(id).await.map_err(|source| {
            warn!("Catalog lookup for product {} failed: {}", id, source);
            AppError::UpstreamFetch {
                product_id: id,
                source,
            }
        })?;

        if let Some(evicted) = cache.put(id, summary) {
            debug!("Evicted product {} from cache", evicted);
        }
        Ok(summary)
    }
}
