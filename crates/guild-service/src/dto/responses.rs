//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use serde::{Deserialize, Serialize};

/// Guild as exposed over the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildResponse {
    pub id: i64,
    pub name: String,
    pub level: i64,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
