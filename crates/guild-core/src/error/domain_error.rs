//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::GuildId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Guild with ID {0} not found.")]
    GuildNotFound(GuildId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("{0}")]
    ValidationError(String),

    #[error("Invalid Guild ID provided.")]
    InvalidGuildId,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Guild name already exists")]
    GuildNameExists { name: String, details: String },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::GuildNotFound(_) => "UNKNOWN_GUILD",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidGuildId => "INVALID_GUILD_ID",
            Self::GuildNameExists { .. } => "GUILD_NAME_EXISTS",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Extra diagnostic text, surfaced as `details` in error bodies
    pub fn details(&self) -> Option<&str> {
        match self {
            Self::GuildNameExists { details, .. } => Some(details),
            Self::DatabaseError(msg) => Some(msg),
            _ => None,
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::GuildNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::InvalidGuildId)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::GuildNameExists { .. })
    }
}
