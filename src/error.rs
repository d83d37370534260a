//! Error types for the price comparison service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::{ErrorResponse, ProductId};

// == Catalog Error Enum ==
/// Failure of a single call to the upstream product catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Connection, TLS or timeout failure
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Catalog answered with a non-2xx status
    #[error("catalog returned {status} for {url}")]
    Status { status: u16, url: String },

    /// Body could not be decoded into the expected shape
    #[error("malformed payload from {url}: {message}")]
    Decode { url: String, message: String },
}

// == App Error Enum ==
/// Unified error type for the service.
#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid startup configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid request data
    #[error("{0}")]
    InvalidRequest(String),

    /// Catalog lookup for one product failed
    #[error("Failed to fetch product {product_id}: {source}")]
    UpstreamFetch {
        product_id: ProductId,
        #[source]
        source: CatalogError,
    },

    /// Catalog listing failed
    #[error("Failed to fetch products: {0}")]
    ListingUnavailable(#[source] CatalogError),
}

impl AppError {
    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::UpstreamFetch { .. }
            | AppError::ListingUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the service.
pub type Result<T> = std::result::Result<T, AppError>;
