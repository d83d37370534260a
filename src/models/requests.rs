//! Request DTOs for the price comparison API
//!
//! Defines the structure of incoming HTTP query strings.

use crate::error::{AppError, Result};
use crate::models::ProductId;

/// Query string of the compare operation (GET /compare)
///
/// Built from the raw key/value pairs of the query string so that a missing,
/// repeated or non-integer ID is reported as our own validation error rather
/// than an extractor rejection.
#[derive(Debug, Clone, Default)]
pub struct CompareQuery {
    /// First `productID1` value
    pub product_id1: Option<String>,
    /// First `productID2` value
    pub product_id2: Option<String>,
}

impl CompareQuery {
    /// Collects the ID parameters, keeping the first value of a repeated key.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "productID1" => &mut query.product_id1,
                "productID2" => &mut query.product_id2,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }

    /// Parses both product IDs, failing on the first invalid one.
    pub fn product_ids(&self) -> Result<(ProductId, ProductId)> {
        let first = parse_id(self.product_id1.as_deref(), "productID1")?;
        let second = parse_id(self.product_id2.as_deref(), "productID2")?;
        Ok((first, second))
    }
}

fn parse_id(raw: Option<&str>, name: &str) -> Result<ProductId> {
    raw.and_then(|value| value.parse().ok())
        .ok_or_else(|| AppError::InvalidRequest(format!("Invalid {}", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(first: Option<&str>, second: Option<&str>) -> CompareQuery {
        CompareQuery {
            product_id1: first.map(str::to_string),
            product_id2: second.map(str::to_string),
        }
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_compare_query_from_pairs() {
        let req = CompareQuery::from_pairs(pairs(&[
            ("productID1", "1"),
            ("utm_source", "mail"),
            ("productID2", "2"),
        ]));
        assert_eq!(req.product_ids().unwrap(), (1, 2));
    }

    #[test]
    fn test_repeated_key_keeps_first_value() {
        let req = CompareQuery::from_pairs(pairs(&[
            ("productID1", "1"),
            ("productID1", "3"),
            ("productID2", "2"),
            ("productID2", "oops"),
        ]));
        assert_eq!(req.product_ids().unwrap(), (1, 2));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let req = CompareQuery::from_pairs(pairs(&[("productid1", "1"), ("productID2", "2")]));
        let err = req.product_ids().unwrap_err();
        assert_eq!(err.to_string(), "Invalid productID1");
    }

    #[test]
    fn test_non_integer_first_id() {
        let err = query(Some("abc"), Some("2")).product_ids().unwrap_err();
        assert_eq!(err.to_string(), "Invalid productID1");
    }

    #[test]
    fn test_non_integer_second_id() {
        let err = query(Some("1"), Some("2.5")).product_ids().unwrap_err();
        assert_eq!(err.to_string(), "Invalid productID2");
    }

    #[test]
    fn test_missing_id() {
        let err = query(Some("1"), None).product_ids().unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest(_)));
    }

    #[test]
    fn test_signed_ids_are_integers() {
        assert_eq!(query(Some("+7"), Some("-3")).product_ids().unwrap(), (7, -3));
    }
}
