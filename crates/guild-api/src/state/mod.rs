//! Shared handler state

use std::sync::Arc;

use guild_common::AppConfig;
use guild_service::{GuildService, ServiceContext};

/// Cloned into every handler; both fields are reference counted
#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
        }
    }

    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Guild operations bound to this state's store
    pub fn guilds(&self) -> GuildService<'_> {
        GuildService::new(&self.service_context)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("env", &self.config.app.env)
            .field("database", &self.config.database.url)
            .finish_non_exhaustive()
    }
}
