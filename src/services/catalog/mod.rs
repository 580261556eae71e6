//! Recipe catalog sources
//!
//! The catalog is read once at start-up from a local JSON file or a remote
//! URL. Both sources expect a JSON array of recipes.

use thiserror::Error;

use crate::models::{Catalog, Recipe};

pub mod file;
pub mod http;

pub use file::FileCatalogLoader;
pub use http::HttpCatalogLoader;

/// Error types for catalog loading
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to fetch catalog: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog request returned status {0}")]
    Status(u16),

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog contains no recipes")]
    Empty,
}

/// Trait for recipe catalog sources
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogLoader: Send + Sync {
    /// Loads the full catalog
    async fn load(&self) -> Result<Catalog, CatalogError>;

    /// Loader name for logging
    fn name(&self) -> &'static str;
}

/// Parses a JSON array of recipes
///
/// An empty array is rejected so the server never runs against an empty
/// catalog.
pub fn parse_catalog(json: &str) -> Result<Catalog, CatalogError> {
    let recipes: Vec<Recipe> = serde_json::from_str(json)?;
    if recipes.is_empty() {
        return Err(CatalogError::Empty);
    }
    Ok(Catalog::new(recipes))
}

/// Loads the catalog and reports what was found
pub async fn load_catalog(loader: &dyn CatalogLoader) -> Result<Catalog, CatalogError> {
    tracing::info!(loader = loader.name(), "Loading recipe catalog");

    let catalog = loader.load().await.map_err(|e| {
        tracing::error!(loader = loader.name(), error = %e, "Catalog load failed");
        e
    })?;

    let malformed = catalog.malformed_count();
    if malformed > 0 {
        tracing::warn!(
            malformed,
            "Catalog contains recipes without ingredients; they will be skipped"
        );
    }

    tracing::info!(
        loader = loader.name(),
        recipes = catalog.len(),
        "Loaded recipe catalog"
    );

    Ok(catalog)
}
