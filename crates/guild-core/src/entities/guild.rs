//! Guild entity - a named, leveled group record

use chrono::{DateTime, Utc};

use crate::value_objects::{GuildId, GuildName, Level};

/// Guild entity as stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guild {
    pub id: GuildId,
    pub name: String,
    pub level: Level,
    pub created_at: DateTime<Utc>,
}

/// Values for a guild that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGuild {
    pub name: GuildName,
    pub level: Level,
}

impl NewGuild {
    pub fn new(name: GuildName, level: Level) -> Self {
        Self { name, level }
    }
}

/// Changes applied to an existing guild
///
/// `level: None` keeps the stored level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildChanges {
    pub name: GuildName,
    pub level: Option<Level>,
}

impl GuildChanges {
    pub fn new(name: GuildName, level: Option<Level>) -> Self {
        Self { name, level }
    }

    /// Whether only the name is being changed
    #[inline]
    pub fn is_name_only(&self) -> bool {
        self.level.is_none()
    }
}
