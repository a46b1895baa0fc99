//! Request DTOs for API endpoints
//!
//! Both guild bodies accept loosely-typed input: a `name` that is not a
//! string, or is blank, deserializes to `None` and fails the `required`
//! check; `level` is kept as raw JSON and resolved by the service.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use validator::Validate;

/// Create guild request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateGuildRequest {
    #[serde(default, deserialize_with = "non_blank_string")]
    #[validate(required(message = "Guild name is required and must be a non-empty string."))]
    pub name: Option<String>,

    /// Number or numeric string; anything else falls back to level 1
    #[serde(default)]
    pub level: Option<Value>,
}

impl CreateGuildRequest {
    pub fn new(name: impl Into<String>, level: Option<Value>) -> Self {
        Self {
            name: Some(name.into()),
            level,
        }
    }
}

/// Update guild request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateGuildRequest {
    #[serde(default, deserialize_with = "non_blank_string")]
    #[validate(required(message = "Guild name is required and must be a non-empty string."))]
    pub name: Option<String>,

    /// When present it must resolve to a positive number; `null` counts as absent
    #[serde(default)]
    pub level: Option<Value>,
}

impl UpdateGuildRequest {
    pub fn new(name: impl Into<String>, level: Option<Value>) -> Self {
        Self {
            name: Some(name.into()),
            level,
        }
    }
}

/// Keep only strings with visible content, trimmed
fn non_blank_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        _ => None,
    })
}
