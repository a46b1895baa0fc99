//! Database models - SQLx-compatible structs for SQLite tables

mod guild;

pub use guild::GuildModel;
