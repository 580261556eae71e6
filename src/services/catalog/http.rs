use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::models::Catalog;

use super::{parse_catalog, CatalogError, CatalogLoader};

/// Fetches the catalog from a URL serving a JSON array of recipes
#[derive(Clone)]
pub struct HttpCatalogLoader {
    http_client: HttpClient,
    url: String,
}

impl HttpCatalogLoader {
    pub fn new(url: String, timeout: Duration) -> Result<Self, CatalogError> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self { http_client, url })
    }
}

#[async_trait::async_trait]
impl CatalogLoader for HttpCatalogLoader {
    async fn load(&self) -> Result<Catalog, CatalogError> {
        tracing::debug!(url = %self.url, "Fetching catalog");

        let response = self.http_client.get(&self.url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!(url = %self.url, status = %status, "Catalog request failed");
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        parse_catalog(&body)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
