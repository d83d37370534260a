//! Domain and transport models for the price comparison service
//!
//! `product` holds the catalog records; `requests`/`responses` hold the DTOs
//! used for (de)serializing HTTP query strings and bodies.

pub mod product;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use product::{Product, ProductId, ProductSummary};
pub use requests::CompareQuery;
pub use responses::{
    CompareResponse, ErrorResponse, HealthResponse, PriceComparison, StatsResponse,
};
