//! Guild ID - store-assigned positive integer identifier

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned by the record store on insertion
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuildId(i64);

impl GuildId {
    /// Create a new GuildId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Parse from a path segment
    ///
    /// Only base-10 integers greater than zero are accepted. Surrounding
    /// whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, GuildIdParseError> {
        match s.trim().parse::<i64>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            Ok(_) => Err(GuildIdParseError::NotPositive),
            Err(_) => Err(GuildIdParseError::InvalidFormat),
        }
    }
}

/// Error when parsing a GuildId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GuildIdParseError {
    #[error("invalid guild id format")]
    InvalidFormat,

    #[error("guild id must be positive")]
    NotPositive,
}

impl fmt::Display for GuildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for GuildId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<GuildId> for i64 {
    fn from(id: GuildId) -> Self {
        id.0
    }
}

impl std::str::FromStr for GuildId {
    type Err = GuildIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GuildId::parse(s)
    }
}
