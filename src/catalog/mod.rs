//! Catalog Module
//!
//! Boundary to the upstream product catalog. Callers only see the
//! [`CatalogClient`] trait; [`HttpCatalogClient`] is the production
//! implementation over HTTP+JSON.

mod client;

use async_trait::async_trait;

use crate::error::CatalogError;
use crate::models::{Product, ProductId, ProductSummary};

pub use client::HttpCatalogClient;

// == Catalog Client ==
/// Remote, possibly failing lookups against the product catalog.
///
/// Implementations do no caching of their own.
#[async_trait]
pub trait CatalogClient: Send + Sync + 'static {
    /// Fetches identity and price of one product.
    async fn fetch_by_id(&self, id: ProductId) -> Result<ProductSummary, CatalogError>;

    /// Fetches the full product collection.
    async fn fetch_all(&self) -> Result<Vec<Product>, CatalogError>;
}
