//! Guild database model

use chrono::NaiveDateTime;
use sqlx::FromRow;

/// Database model for guilds table
///
/// The primary key column is `guild_id`; it is exposed as `id` everywhere else.
#[derive(Debug, Clone, FromRow)]
pub struct GuildModel {
    pub guild_id: i64,
    pub name: String,
    pub level: i64,
    /// `CURRENT_TIMESTAMP` text, always UTC
    pub created_at: NaiveDateTime,
}
