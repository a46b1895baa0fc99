//! SQLite implementation of GuildRepository

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::instrument;

use guild_core::entities::{Guild, GuildChanges, NewGuild};
use guild_core::traits::{GuildRepository, RepoResult};
use guild_core::value_objects::GuildId;

use crate::mappers::{GuildInsert, GuildUpdate};
use crate::models::GuildModel;

use super::error::{guild_name_exists, guild_not_found, map_db_error, map_unique_violation};

/// SQLite implementation of GuildRepository
#[derive(Clone)]
pub struct SqliteGuildRepository {
    pool: SqlitePool,
}

impl SqliteGuildRepository {
    /// Create a new SqliteGuildRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GuildRepository for SqliteGuildRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Guild>> {
        let results = sqlx::query_as::<_, GuildModel>(
            r"
            SELECT guild_id, name, level, created_at
            FROM guilds
            ORDER BY name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Guild::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: GuildId) -> RepoResult<Option<Guild>> {
        let result = sqlx::query_as::<_, GuildModel>(
            r"
            SELECT guild_id, name, level, created_at
            FROM guilds
            WHERE guild_id = ?1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Guild::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, guild: &NewGuild) -> RepoResult<Guild> {
        let insert = GuildInsert::new(guild);

        let model = sqlx::query_as::<_, GuildModel>(
            r"
            INSERT INTO guilds (name, level)
            VALUES (?1, ?2)
            RETURNING guild_id, name, level, created_at
            ",
        )
        .bind(insert.name)
        .bind(insert.level)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, |details| guild_name_exists(insert.name, details)))?;

        Ok(Guild::from(model))
    }

    #[instrument(skip(self))]
    async fn update(&self, id: GuildId, changes: &GuildChanges) -> RepoResult<()> {
        let update = GuildUpdate::new(id, changes);

        let result = sqlx::query(
            r"
            UPDATE guilds
            SET name = ?1, level = COALESCE(?2, level)
            WHERE guild_id = ?3
            ",
        )
        .bind(update.name)
        .bind(update.level)
        .bind(update.id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, |details| guild_name_exists(update.name, details)))?;

        if result.rows_affected() == 0 {
            return Err(guild_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: GuildId) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM guilds
            WHERE guild_id = ?1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(guild_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        let result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM guilds")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result)
    }
}
