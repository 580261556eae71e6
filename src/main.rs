use anyhow::Context;

use recipe_finder::api::{create_router, AppState};
use recipe_finder::config::Config;
use recipe_finder::services::catalog::load_catalog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("recipe_finder=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    // Searching an empty or partial catalog is never acceptable, so a load
    // failure stops the server here
    let loader = config.catalog_loader()?;
    let catalog = load_catalog(loader.as_ref())
        .await
        .context("Failed to load recipe catalog")?;

    let state = AppState::with_session_limits(catalog, config.session_limits());
    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    tracing::info!(address = %address, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
