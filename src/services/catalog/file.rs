use std::path::PathBuf;

use crate::models::Catalog;

use super::{parse_catalog, CatalogError, CatalogLoader};

/// Reads the catalog from a JSON file on disk
#[derive(Debug, Clone)]
pub struct FileCatalogLoader {
    path: PathBuf,
}

impl FileCatalogLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl CatalogLoader for FileCatalogLoader {
    async fn load(&self) -> Result<Catalog, CatalogError> {
        tracing::debug!(path = %self.path.display(), "Reading catalog file");

        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogError::Io {
                path: self.path.display().to_string(),
                source,
            })?;

        parse_catalog(&json)
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
