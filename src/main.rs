use shopease_storefront::catalog::Catalog;
use shopease_storefront::config::Config;
use shopease_storefront::router::create_app_router;
use shopease_storefront::storefront::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Product data: a JSON file when configured, the embedded sample otherwise
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::sample(),
    };
    info!(products = catalog.len(), "Catalog ready");

    // Initialize application state
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(AppState::new(catalog, config));

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    info!(address = %addr, "Server running");

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
