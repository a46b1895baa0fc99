//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Guild, GuildChanges, NewGuild};
use crate::error::DomainError;
use crate::value_objects::GuildId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Guild Repository
// ============================================================================

/// Record store for guilds
///
/// Implementations must report a duplicate name as
/// [`DomainError::GuildNameExists`] and a missing row on update/delete as
/// [`DomainError::GuildNotFound`].
#[async_trait]
pub trait GuildRepository: Send + Sync {
    /// List all guilds ordered by name ascending
    async fn list(&self) -> RepoResult<Vec<Guild>>;

    /// Find guild by ID
    async fn find_by_id(&self, id: GuildId) -> RepoResult<Option<Guild>>;

    /// Insert a guild and return the stored row
    async fn create(&self, guild: &NewGuild) -> RepoResult<Guild>;

    /// Apply changes to an existing guild
    async fn update(&self, id: GuildId, changes: &GuildChanges) -> RepoResult<()>;

    /// Permanently delete a guild
    async fn delete(&self, id: GuildId) -> RepoResult<()>;

    /// Number of stored guilds
    async fn count(&self) -> RepoResult<i64>;
}
