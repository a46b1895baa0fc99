//! Guild name - trimmed, non-empty display name

use std::fmt;

use crate::error::DomainError;

/// Message used whenever a guild name is missing or blank
pub const NAME_REQUIRED_MESSAGE: &str = "Guild name is required and must be a non-empty string.";

/// A guild name with surrounding whitespace removed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuildName(String);

impl GuildName {
    /// Trim and validate a raw name
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::ValidationError(NAME_REQUIRED_MESSAGE.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Validate an optional raw name (absent counts as missing)
    pub fn parse_optional(raw: Option<&str>) -> Result<Self, DomainError> {
        raw.map_or_else(
            || Err(DomainError::ValidationError(NAME_REQUIRED_MESSAGE.to_string())),
            Self::parse,
        )
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for GuildName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GuildName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
