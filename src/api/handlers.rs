//! API Handlers
//!
//! HTTP request handlers for each service endpoint.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use tracing::debug;

use crate::catalog::{CatalogClient, HttpCatalogClient};
use crate::config::Config;
use crate::error::Result;
use crate::models::{CompareQuery, CompareResponse, HealthResponse, Product, StatsResponse};
use crate::services::{ComparisonService, ListingService};

/// Application state shared across all handlers.
///
/// Services are behind `Arc` so cloning the state per request is cheap; the
/// comparison cache inside synchronizes itself.
#[derive(Clone)]
pub struct AppState {
    pub comparison: Arc<ComparisonService>,
    pub listing: Arc<ListingService>,
}

impl AppState {
    /// Creates a new AppState over an arbitrary catalog implementation.
    pub fn new(catalog: Arc<dyn CatalogClient>, config: &Config) -> Self {
        Self {
            comparison: Arc::new(ComparisonService::new(
                Arc::clone(&catalog),
                config.cache_scope,
                config.cache_capacity,
            )),
            listing: Arc::new(ListingService::new(catalog)),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Connects to the HTTP catalog at the configured base URL.
    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = HttpCatalogClient::from_config(config)?;
        Ok(Self::new(Arc::new(catalog), config))
    }
}

/// Handler for GET /products
///
/// Returns the full catalog product list.
pub async fn list_products_handler(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = state.listing.list().await?;
    debug!("Listing {} products", products.len());

    Ok(Json(products))
}

/// Handler for GET /compare?productID1=&productID2=
///
/// Compares the prices of two products.
pub async fn compare_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<CompareResponse>> {
    let (first, second) = CompareQuery::from_pairs(pairs).product_ids()?;
    let comparison = state.comparison.compare(first, second).await?;

    Ok(Json(comparison.into()))
}

/// Handler for GET /stats
///
/// Returns comparison cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let service = &state.comparison;
    Json(StatsResponse::new(
        service.scope(),
        service.capacity(),
        &service.cache_stats(),
    ))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
