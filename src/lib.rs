//! Price Compare - product catalog proxy with a read-through LRU cache
//!
//! Lists catalog products and compares the prices of two products, caching
//! per-product prices in a bounded, thread-safe recency cache.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use api::AppState;
pub use config::{CacheScope, Config};
pub use error::{AppError, CatalogError};
