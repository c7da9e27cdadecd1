use std::time::Duration;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use travel_server::catalog::Catalog;
use travel_server::config::ServerConfig;
use travel_server::engine::EngineConfig;
use travel_server::web::{AppState, create_router};

/// How often to re-read the catalog files (1 hour).
const CATALOG_RELOAD_INTERVAL: Duration = Duration::from_secs(60 * 60);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env().unwrap_or_else(|e| {
        error!(error = %e, "invalid configuration");
        std::process::exit(1);
    });

    // Load the catalog (fail fast if unavailable)
    let catalog = Catalog::load(&config.data_dir).await.unwrap_or_else(|e| {
        error!(error = %e, "failed to load catalog");
        std::process::exit(1);
    });
    if catalog.is_empty().await {
        warn!("catalog has no destinations; budget searches will return 404");
    }

    let state = AppState::new(
        catalog,
        &config.cache,
        EngineConfig::default(),
        config.max_candidates,
    );

    // Spawn background task to pick up catalog edits
    let refresh = state.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(CATALOG_RELOAD_INTERVAL);
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            match refresh.catalog.reload().await {
                Ok(count) => {
                    let cleared = refresh.cache.entry_count();
                    refresh.cache.invalidate_all();
                    info!(destinations = count, cleared, "reloaded catalog");
                }
                Err(e) => warn!(error = %e, "failed to reload catalog"),
            }
        }
    });

    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .unwrap_or_else(|e| {
            error!(addr = %config.bind_addr, error = %e, "failed to bind");
            std::process::exit(1);
        });

    info!(addr = %config.bind_addr, "travel server listening");
    info!("  GET  /health           - Health check");
    info!("  GET  /api/destinations - Catalog listing");
    info!("  POST /api/budget       - Budget recommendations");
    info!("  GET  /api/nearby       - Nearby suggestions");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server error");
        std::process::exit(1);
    }
}
