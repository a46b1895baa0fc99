//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use axum::Router;
use guild_common::{AppConfig, AppError, AppResult};
use guild_db::{create_pool, schema};
use guild_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::{apply_middleware, apply_rate_limit};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Only the guild routes are rate limited.
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = apply_rate_limit(create_router(), &config.rate_limit).merge(health_routes());
    let router = apply_middleware(router, &config.cors, config.app.env.is_production());
    router.with_state(state)
}

/// Open the database, bootstrap the schema and create AppState
pub async fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    info!(url = %config.database.url, "Opening SQLite database...");
    let db_config = guild_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    schema::initialize(&pool, config.database.seed)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!(seeded = config.database.seed, "Database ready");

    Ok(AppState::new(ServiceContext::new(pool), config))
}

/// Run the HTTP server until a shutdown signal arrives
pub async fn run_server(app: Router, addr: &str) -> AppResult<()> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::internal)?;

    info!("HTTP server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let pool = state.service_context().pool().clone();

    let app = create_app(state);
    let result = run_server(app, &addr).await;

    pool.close().await;
    info!("Database connection closed");

    result
}

/// Resolve on SIGTERM or SIGINT (Ctrl+C elsewhere)
pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => info!("Received SIGTERM, shutting down"),
                    _ = sigint.recv() => info!("Received SIGINT, shutting down"),
                }
            }
            (Err(e), _) | (_, Err(e)) => {
                warn!(error = %e, "Failed to register signal handlers, falling back to Ctrl+C");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
        info!("Received Ctrl+C, shutting down");
    }
}
