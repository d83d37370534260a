//! HTTP Catalog Client
//!
//! reqwest-backed implementation of [`CatalogClient`].

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::catalog::CatalogClient;
use crate::config::Config;
use crate::error::{AppError, CatalogError, Result};
use crate::models::{Product, ProductId, ProductSummary};

/// Catalog client talking JSON over HTTP to a fixed base URL.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogClient {
    /// Builds a client for `base_url` with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Builds a client from the catalog section of the configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.catalog_base_url.clone(),
            Duration::from_millis(config.catalog_timeout_ms),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T>(&self, path: &str) -> std::result::Result<T, CatalogError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("Catalog returned {} for {}", status, url);
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            warn!("Undecodable catalog payload from {}: {}", url, e);
            CatalogError::Decode {
                url,
                message: e.to_string(),
            }
        })
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn fetch_by_id(&self, id: ProductId) -> std::result::Result<ProductSummary, CatalogError> {
        self.get_json(&format!("/products/{}", id)).await
    }

    async fn fetch_all(&self) -> std::result::Result<Vec<Product>, CatalogError> {
        self.get_json("/products").await
    }
}
