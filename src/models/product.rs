//! Catalog product records.

use serde::{Deserialize, Deserializer, Serialize};

/// Catalog identifier of a product.
pub type ProductId = i64;

// == Product ==
/// Full catalog record as returned by the product listing.
///
/// Descriptive text fields that are missing or `null` upstream decode as
/// empty strings; only `id` and `price` are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// == Product Summary ==
/// Identity and price of a single product; the value held by the recency cache.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: ProductId,
    pub price: f64,
}

impl ProductSummary {
    pub fn new(id: ProductId, price: f64) -> Self {
        Self { id, price }
    }
}

impl From<&Product> for ProductSummary {
    fn from(product: &Product) -> Self {
        Self::new(product.id, product.price)
    }
}
