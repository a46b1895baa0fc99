//! Domain entities - core business objects

mod guild;

pub use guild::{Guild, GuildChanges, NewGuild};
