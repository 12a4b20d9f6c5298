//! Permanent ban handlers
//!
//! Endpoints for banning, kicking, unbanning, and ban lookups.

use axum::{
    extract::{Path, State},
    Json,
};
use moderation_service::{
    BanRequest, BanStatusResponse, CommandResponse, KickRequest, ModerationService,
    UnbanRequest, UserIdQuery,
};

use crate::extractors::{JsonBody, QueryParams};
use crate::response::ApiResult;
use crate::state::AppState;

/// Permanently ban a user
///
/// POST /ban
pub async fn ban(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<BanRequest>,
) -> ApiResult<Json<CommandResponse>> {
    let service = ModerationService::new(state.service_context());
    let response = service.ban(request).await?;
    Ok(Json(response))
}

/// Acknowledge a kick; the game server performs it
///
/// POST /kick
pub async fn kick(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<KickRequest>,
) -> ApiResult<Json<CommandResponse>> {
    let service = ModerationService::new(state.service_context());
    let response = service.kick(request).await?;
    Ok(Json(response))
}

/// Lift a permanent ban
///
/// POST /unban
pub async fn unban(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<UnbanRequest>,
) -> ApiResult<Json<CommandResponse>> {
    let service = ModerationService::new(state.service_context());
    let response = service.unban(request).await?;
    Ok(Json(response))
}

/// Permanent ban lookup
///
/// GET /ban-check?user_id={user_id}
pub async fn check_ban(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<UserIdQuery>,
) -> ApiResult<Json<BanStatusResponse>> {
    let service = ModerationService::new(state.service_context());
    let response = service.check_ban(&query).await?;
    Ok(Json(response))
}

/// Combined permanent and timed ban lookup
///
/// GET /api/isBanned/{user_id}
pub async fn is_banned(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<BanStatusResponse>> {
    let service = ModerationService::new(state.service_context());
    let response = service.is_banned(&user_id).await?;
    Ok(Json(response))
}
