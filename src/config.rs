//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::error::{AppError, Result};

// == Defaults ==
const DEFAULT_CACHE_CAPACITY: usize = 10;
const DEFAULT_SERVER_PORT: u16 = 8080;
const DEFAULT_CATALOG_BASE_URL: &str = "https://fakestoreapi.com";
const DEFAULT_CATALOG_TIMEOUT_MS: u64 = 10_000;

// == Cache Scope ==
/// Lifetime of the recency cache used by the comparison path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheScope {
    /// One cache for the whole process, shared by every request.
    #[default]
    Shared,
    /// A fresh cache for every comparison; nothing carries over between requests.
    PerRequest,
}

impl CacheScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheScope::Shared => "shared",
            CacheScope::PerRequest => "per_request",
        }
    }
}

impl fmt::Display for CacheScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CacheScope {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shared" | "process" => Ok(CacheScope::Shared),
            "per_request" | "per-request" | "request" => Ok(CacheScope::PerRequest),
            other => Err(AppError::Config(format!("unknown cache scope '{}'", other))),
        }
    }
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of products the comparison cache holds
    pub cache_capacity: NonZeroUsize,
    /// Whether the comparison cache is process-wide or per request
    pub cache_scope: CacheScope,
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the upstream product catalog
    pub catalog_base_url: String,
    /// Timeout for a single catalog call in milliseconds
    pub catalog_timeout_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Cache capacity, must be at least 1 (default: 10)
    /// - `CACHE_SCOPE` - `shared` or `per_request` (default: shared)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `CATALOG_BASE_URL` - Catalog base URL (default: https://fakestoreapi.com)
    /// - `CATALOG_TIMEOUT_MS` - Catalog call timeout (default: 10000)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    ///
    /// Cache capacity, scope and base URL are validated strictly; the port and
    /// timeout fall back to their defaults when unparsable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cache_capacity = match lookup("CACHE_CAPACITY") {
            Some(raw) => parse_capacity(&raw)?,
            None => default_capacity(),
        };

        let cache_scope = match lookup("CACHE_SCOPE") {
            Some(raw) => raw.parse()?,
            None => CacheScope::default(),
        };

        let catalog_base_url = lookup("CATALOG_BASE_URL")
            .unwrap_or_else(|| DEFAULT_CATALOG_BASE_URL.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();
        if catalog_base_url.is_empty() {
            return Err(AppError::Config(
                "CATALOG_BASE_URL must not be empty".to_string(),
            ));
        }

        Ok(Self {
            cache_capacity,
            cache_scope,
            server_port: lookup("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            catalog_base_url,
            catalog_timeout_ms: lookup("CATALOG_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CATALOG_TIMEOUT_MS),
        })
    }
}

fn parse_capacity(raw: &str) -> Result<NonZeroUsize> {
    let value: usize = raw.trim().parse().map_err(|_| {
        AppError::Config(format!(
            "CACHE_CAPACITY must be a positive integer, got '{}'",
            raw
        ))
    })?;
    NonZeroUsize::new(value)
        .ok_or_else(|| AppError::Config("CACHE_CAPACITY must be at least 1".to_string()))
}

fn default_capacity() -> NonZeroUsize {
    NonZeroUsize::new(DEFAULT_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_capacity: default_capacity(),
            cache_scope: CacheScope::Shared,
            server_port: DEFAULT_SERVER_PORT,
            catalog_base_url: DEFAULT_CATALOG_BASE_URL.to_string(),
            catalog_timeout_ms: DEFAULT_CATALOG_TIMEOUT_MS,
        }
    }
}
