//! MediaSearch server entry point

use anyhow::Result;
use mediasearch::{
    config,
    engines::EngineLoader,
    network::HttpClient,
    web::{create_router, AppState},
    Search,
};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("Starting MediaSearch v{}", mediasearch::VERSION);

    // Load configuration
    let settings = config::load()?;
    info!("Loaded configuration for instance: {}", settings.general.instance_name);

    // Initialize HTTP client
    let client = HttpClient::with_settings(&settings.outgoing)?;
    info!("HTTP client initialized");

    // Build providers
    let search = Search::from(EngineLoader::load(&settings, &client));

    // Create application state
    let state = AppState::new(settings.clone(), search)?;
    info!("Application state initialized");

    let app = create_router(state);

    let addr = SocketAddr::new(
        settings.server.bind_address.parse()?,
        settings.server.port,
    );

    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
