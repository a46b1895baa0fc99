//! Error handling utilities for repositories

use guild_core::error::DomainError;
use guild_core::value_objects::GuildId;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
///
/// Relies on the driver's error kind, not on the message text.
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce(String) -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique(db_err.message().to_string());
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "guild name exists" error
pub fn guild_name_exists(name: &str, details: String) -> DomainError {
    DomainError::GuildNameExists {
        name: name.to_string(),
        details,
    }
}

/// Create a "guild not found" error
pub fn guild_not_found(id: GuildId) -> DomainError {
    DomainError::GuildNotFound(id)
}
