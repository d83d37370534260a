//! Listing Service
//!
//! Pass-through to the catalog for the full product collection.

use std::sync::Arc;

use tracing::warn;

use crate::catalog::CatalogClient;
use crate::error::{AppError, Result};
use crate::models::Product;

/// Serves `GET /products` straight from the catalog, uncached.
pub struct ListingService {
    catalog: Arc<dyn CatalogClient>,
}

impl ListingService {
    pub fn new(catalog: Arc<dyn CatalogClient>) -> Self {
        Self { catalog }
    }

    /// Returns the catalog's product collection unmodified.
    pub async fn list(&self) -> Result<Vec<Product>> {
        self.catalog.fetch_all().await.map_err(|e| {
            warn!("Catalog listing failed: {}", e);
            AppError::ListingUnavailable(e)
        })
    }
}
