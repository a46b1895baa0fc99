//! Guild entity <-> model mapper

use guild_core::entities::{Guild, GuildChanges, NewGuild};
use guild_core::value_objects::{GuildId, Level};

use crate::models::GuildModel;

/// Convert GuildModel to Guild entity
impl From<GuildModel> for Guild {
    fn from(model: GuildModel) -> Self {
        Guild {
            id: GuildId::new(model.guild_id),
            name: model.name,
            // The CHECK constraint keeps stored levels >= 1
            level: Level::new(model.level).unwrap_or_default(),
            created_at: model.created_at.and_utc(),
        }
    }
}

/// Values bound when inserting a new guild
pub struct GuildInsert<'a> {
    pub name: &'a str,
    pub level: i64,
}

impl<'a> GuildInsert<'a> {
    pub fn new(guild: &'a NewGuild) -> Self {
        Self {
            name: guild.name.as_str(),
            level: guild.level.into_inner(),
        }
    }
}

/// Values bound when updating a guild; `level: None` keeps the stored level
pub struct GuildUpdate<'a> {
    pub id: i64,
    pub name: &'a str,
    pub level: Option<i64>,
}

impl<'a> GuildUpdate<'a> {
    pub fn new(id: GuildId, changes: &'a GuildChanges) -> Self {
        Self {
            id: id.into_inner(),
            name: changes.name.as_str(),
            level: changes.level.map(Level::into_inner),
        }
    }
}
