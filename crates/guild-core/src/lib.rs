//! # guild-core
//!
//! Domain layer containing the guild entity, value objects, the repository port and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Guild, GuildChanges, NewGuild};
pub use error::DomainError;
pub use traits::{GuildRepository, RepoResult};
pub use value_objects::{
    GuildId, GuildIdParseError, GuildName, Level, LEVEL_INVALID_MESSAGE, NAME_REQUIRED_MESSAGE,
};
