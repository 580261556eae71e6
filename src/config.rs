use std::time::Duration;

use serde::Deserialize;

use crate::api::SessionLimits;
use crate::services::catalog::{CatalogError, CatalogLoader, FileCatalogLoader, HttpCatalogLoader};

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path of the JSON recipe catalog
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Remote catalog URL; takes precedence over `catalog_path` when set
    #[serde(default)]
    pub catalog_url: Option<String>,

    /// Timeout for fetching a remote catalog
    #[serde(default = "default_catalog_timeout_secs")]
    pub catalog_timeout_secs: u64,

    /// Upper bound on open sessions
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,

    /// Idle time after which a session is dropped
    #[serde(default = "default_session_idle_secs")]
    pub session_idle_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_catalog_path() -> String {
    "data/recipes.json".to_string()
}

fn default_catalog_timeout_secs() -> u64 {
    10
}

fn default_max_sessions() -> usize {
    10_000
}

fn default_session_idle_secs() -> u64 {
    30 * 60
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Address the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn session_limits(&self) -> SessionLimits {
        SessionLimits {
            max_sessions: self.max_sessions,
            idle_timeout: Duration::from_secs(self.session_idle_secs),
        }
    }

    /// Picks the catalog source: the URL if configured, otherwise the file
    pub fn catalog_loader(&self) -> Result<Box<dyn CatalogLoader>, CatalogError> {
        match &self.catalog_url {
            Some(url) => Ok(Box::new(HttpCatalogLoader::new(
                url.clone(),
                Duration::from_secs(self.catalog_timeout_secs),
            )?)),
            None => Ok(Box::new(FileCatalogLoader::new(&self.catalog_path))),
        }
    }
}
