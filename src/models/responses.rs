//! Response DTOs for the price comparison API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::config::CacheScope;
use crate::services::Comparison;

/// Response body for the compare operation (GET /compare)
#[derive(Debug, Clone, Serialize)]
pub struct CompareResponse {
    pub price: PriceComparison,
}

/// Prices of both products and the ID of the pricier one
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceComparison {
    pub product_one: f64,
    pub product_two: f64,
    /// Winning product ID as a string, empty on a tie
    pub winner: String,
}

impl From<Comparison> for CompareResponse {
    fn from(comparison: Comparison) -> Self {
        Self {
            price: PriceComparison {
                product_one: comparison.product_one,
                product_two: comparison.product_two,
                winner: comparison
                    .winner
                    .map(|id| id.to_string())
                    .unwrap_or_default(),
            },
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Cache lifetime policy in effect
    pub cache_scope: String,
    /// Configured cache capacity
    pub capacity: usize,
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    pub fn new(scope: CacheScope, capacity: usize, stats: &CacheStats) -> Self {
        Self {
            cache_scope: scope.to_string(),
            capacity,
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
