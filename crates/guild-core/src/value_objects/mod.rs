//! Value objects - immutable types that represent domain concepts

mod guild_id;
mod guild_name;
mod level;

pub use guild_id::{GuildId, GuildIdParseError};
pub use guild_name::{GuildName, NAME_REQUIRED_MESSAGE};
pub use level::{Level, LEVEL_INVALID_MESSAGE};
