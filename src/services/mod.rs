//! Recipe matching engine
//!
//! Everything here is synchronous and free of shared state: the catalog and
//! the facet selection are passed in by the caller on every search.

use thiserror::Error;

pub mod catalog;
pub mod facet_filter;
pub mod normalizer;
pub mod pantry;
pub mod ranking;
pub mod scorer;

pub use ranking::{search, MATCH_THRESHOLD};

/// Error types for the matching engine
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("Please enter at least one ingredient")]
    EmptyInput,
    #[error("Recipe '{name}' has no ingredients")]
    InvalidRecipe { name: String },
}
