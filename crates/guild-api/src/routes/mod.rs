//! Route definitions
//!
//! Guild routes live under /api; health and banner routes sit at the root.

use axum::{routing::get, Router};

use crate::handlers::{guilds, health};
use crate::state::AppState;

/// Create the main API router (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check and banner routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::banner))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new().merge(guild_routes())
}

/// Guild routes
fn guild_routes() -> Router<AppState> {
    Router::new()
        .route("/guilds", get(guilds::list_guilds).post(guilds::create_guild))
        .route(
            "/guilds/:id",
            get(guilds::get_guild)
                .put(guilds::update_guild)
                .delete(guilds::delete_guild),
        )
}
