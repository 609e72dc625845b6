//! Products API - REST server

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

/// Grace period for in-flight requests and connection cleanup on shutdown
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!("Connecting to database");
    let db =
        database::postgres::connect_from_config_with_retry(config.database.clone(), None).await?;

    // Schema sync runs before the listener starts; a failure here is fatal
    // to process startup.
    database::postgres::run_migrations::<migration::Migrator>(&db, "products-api").await?;

    // Initialize the application state
    let state = AppState {
        config: config.clone(),
        db,
    };

    // Build the REST router
    let api_routes = api::routes(&state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes);
    let app = router.merge(health_router(state.config.app));

    info!("Starting Products API on port {}", state.config.server.port);

    // Run the server with graceful shutdown: stop accepting requests, close
    // the store connection, drain in-flight requests within the grace period.
    let db_for_cleanup = state.db.clone();
    create_production_app(app, &state.config.server, SHUTDOWN_TIMEOUT, async move {
        info!("Shutting down: closing database connections");
        if let Err(e) = db_for_cleanup.close().await {
            tracing::warn!("Failed to close database connection cleanly: {}", e);
        }
    })
    .await?;

    info!("Products API shutdown complete");
    Ok(())
}
