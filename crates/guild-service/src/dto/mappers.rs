//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use guild_core::Guild;

use super::responses::GuildResponse;

impl From<&Guild> for GuildResponse {
    fn from(guild: &Guild) -> Self {
        Self {
            id: guild.id.into_inner(),
            name: guild.name.clone(),
            level: guild.level.into_inner(),
        }
    }
}

impl From<Guild> for GuildResponse {
    fn from(guild: Guild) -> Self {
        Self {
            id: guild.id.into_inner(),
            name: guild.name,
            level: guild.level.into_inner(),
        }
    }
}
