//! Guild service
//!
//! Handles guild listing, creation, renaming/releveling and removal.

use guild_core::{
    DomainError, GuildChanges, GuildId, GuildName, Level, NewGuild, LEVEL_INVALID_MESSAGE,
};
use serde_json::Value;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CreateGuildRequest, GuildResponse, UpdateGuildRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Guild service
pub struct GuildService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GuildService<'a> {
    /// Create a new GuildService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List every guild, sorted by name
    #[instrument(skip(self))]
    pub async fn list_guilds(&self) -> ServiceResult<Vec<GuildResponse>> {
        let guilds = self.ctx.guild_repo().list().await?;
        Ok(guilds.into_iter().map(GuildResponse::from).collect())
    }

    /// Get guild by ID
    #[instrument(skip(self))]
    pub async fn get_guild(&self, guild_id: GuildId) -> ServiceResult<GuildResponse> {
        let guild = self
            .ctx
            .guild_repo()
            .find_by_id(guild_id)
            .await?
            .ok_or(DomainError::GuildNotFound(guild_id))?;

        Ok(GuildResponse::from(guild))
    }

    /// Create a new guild
    ///
    /// A missing or unusable level falls back to 1.
    #[instrument(skip(self, request))]
    pub async fn create_guild(&self, request: CreateGuildRequest) -> ServiceResult<GuildResponse> {
        request.validate()?;

        let name = GuildName::parse_optional(request.name.as_deref())?;
        let level = request
            .level
            .as_ref()
            .and_then(Level::from_json)
            .unwrap_or_default();

        let guild = self
            .ctx
            .guild_repo()
            .create(&NewGuild::new(name, level))
            .await?;

        info!(guild_id = %guild.id, name = %guild.name, level = %guild.level, "Guild created");

        Ok(GuildResponse::from(guild))
    }

    /// Update a guild's name and, when supplied, its level
    ///
    /// Returns the guild as re-read after the write.
    #[instrument(skip(self, request))]
    pub async fn update_guild(
        &self,
        guild_id: GuildId,
        request: UpdateGuildRequest,
    ) -> ServiceResult<GuildResponse> {
        request.validate()?;

        let name = GuildName::parse_optional(request.name.as_deref())?;
        let level = request.level.as_ref().map(resolve_level).transpose()?;
        let changes = GuildChanges::new(name, level);

        self.ctx.guild_repo().update(guild_id, &changes).await?;

        info!(
            guild_id = %guild_id,
            name_only = changes.is_name_only(),
            "Guild updated"
        );

        self.get_guild(guild_id).await
    }

    /// Permanently remove a guild
    #[instrument(skip(self))]
    pub async fn delete_guild(&self, guild_id: GuildId) -> ServiceResult<()> {
        self.ctx.guild_repo().delete(guild_id).await?;

        info!(guild_id = %guild_id, "Guild deleted");

        Ok(())
    }
}

/// A level that was supplied must be usable
fn resolve_level(value: &Value) -> ServiceResult<Level> {
    Level::from_json(value).ok_or_else(|| ServiceError::validation(LEVEL_INVALID_MESSAGE))
}
