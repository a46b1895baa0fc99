//! Service context - dependency container for services
//!
//! Holds the database pool and the guild repository. Created once at
//! startup and shared by every request; closing the pool is the owner's job.

use std::sync::Arc;

use guild_core::traits::GuildRepository;
use guild_db::{SqliteGuildRepository, SqlitePool};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    pool: SqlitePool,
    guild_repo: Arc<dyn GuildRepository>,
}

impl ServiceContext {
    /// Create a context backed by the SQLite repository on `pool`
    pub fn new(pool: SqlitePool) -> Self {
        let guild_repo = Arc::new(SqliteGuildRepository::new(pool.clone()));
        Self { pool, guild_repo }
    }

    /// Start building a context with custom dependencies
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get the guild repository
    pub fn guild_repo(&self) -> &dyn GuildRepository {
        self.guild_repo.as_ref()
    }

    /// Check that a connection can be acquired from the pool
    pub async fn database_healthy(&self) -> bool {
        !self.pool.is_closed() && self.pool.acquire().await.is_ok()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"SqlitePool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<SqlitePool>,
    guild_repo: Option<Arc<dyn GuildRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            guild_repo: None,
        }
    }

    pub fn pool(mut self, pool: SqlitePool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn guild_repo(mut self, repo: Arc<dyn GuildRepository>) -> Self {
        self.guild_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// Without an explicit repository the SQLite one on `pool` is used.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if no pool was supplied
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let pool = self
            .pool
            .ok_or_else(|| ServiceError::validation("pool is required"))?;
        let guild_repo = self
            .guild_repo
            .unwrap_or_else(|| Arc::new(SqliteGuildRepository::new(pool.clone())));

        Ok(ServiceContext { pool, guild_repo })
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
