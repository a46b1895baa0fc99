//! Path parameter extractors
//!
//! Type-safe extraction of guild identifiers from path parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use guild_core::{DomainError, GuildId};

use crate::response::ApiError;

/// Extract a guild id from the `:id` path segment
///
/// Anything other than a positive base-10 integer is rejected with
/// `Invalid Guild ID provided.` before the handler runs.
#[derive(Debug, Clone, Copy)]
pub struct GuildIdPath(pub GuildId);

#[async_trait]
impl<S> FromRequestParts<S> for GuildIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Domain(DomainError::InvalidGuildId))?;

        let id = GuildId::parse(&raw).map_err(|_| ApiError::Domain(DomainError::InvalidGuildId))?;

        Ok(GuildIdPath(id))
    }
}
