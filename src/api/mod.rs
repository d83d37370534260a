//! API Module
//!
//! HTTP handlers and routing for the price comparison REST API.
//!
//! # Endpoints
//! - `GET /products` - List all catalog products
//! - `GET /compare` - Compare the prices of two products
//! - `GET /stats` - Comparison cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
