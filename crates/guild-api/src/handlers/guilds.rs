//! Guild CRUD handlers

use axum::{extract::State, Json};
use guild_service::{CreateGuildRequest, GuildResponse, UpdateGuildRequest};

use crate::extractors::{GuildIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List all guilds sorted by name
///
/// GET /api/guilds
pub async fn list_guilds(State(state): State<AppState>) -> ApiResult<Json<Vec<GuildResponse>>> {
    let response = state.guilds().list_guilds().await?;
    Ok(Json(response))
}

/// Create a new guild
///
/// POST /api/guilds
pub async fn create_guild(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateGuildRequest>,
) -> ApiResult<Created<Json<GuildResponse>>> {
    let response = state.guilds().create_guild(request).await?;
    Ok(Created(Json(response)))
}

/// Get guild by ID
///
/// GET /api/guilds/{id}
pub async fn get_guild(
    State(state): State<AppState>,
    GuildIdPath(guild_id): GuildIdPath,
) -> ApiResult<Json<GuildResponse>> {
    let response = state.guilds().get_guild(guild_id).await?;
    Ok(Json(response))
}

/// Rename a guild and optionally change its level
///
/// PUT /api/guilds/{id}
pub async fn update_guild(
    State(state): State<AppState>,
    GuildIdPath(guild_id): GuildIdPath,
    ValidatedJson(request): ValidatedJson<UpdateGuildRequest>,
) -> ApiResult<Json<GuildResponse>> {
    let response = state.guilds().update_guild(guild_id, request).await?;
    Ok(Json(response))
}

/// Delete a guild
///
/// DELETE /api/guilds/{id}
pub async fn delete_guild(
    State(state): State<AppState>,
    GuildIdPath(guild_id): GuildIdPath,
) -> ApiResult<NoContent> {
    state.guilds().delete_guild(guild_id).await?;
    Ok(NoContent)
}
