//! Services Module
//!
//! Request-independent business logic sitting between the HTTP handlers and
//! the catalog client.

mod comparison;
mod listing;

pub use comparison::{Comparison, ComparisonService};
pub use listing::ListingService;
