//! Repository implementations
//!
//! SQLite implementations of the repository traits defined in guild-core.

mod error;
mod guild;

pub use guild::SqliteGuildRepository;
