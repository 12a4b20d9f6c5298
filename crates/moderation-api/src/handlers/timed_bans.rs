//! Timed ban handlers

use axum::{extract::State, Json};
use moderation_service::{
    BanStatusResponse, CommandResponse, ModerationService, TimedBanRequest, UserIdQuery,
};

use crate::extractors::{JsonBody, QueryParams};
use crate::response::ApiResult;
use crate::state::AppState;

/// Ban a user for a number of seconds
///
/// POST /timed-ban
pub async fn timed_ban(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<TimedBanRequest>,
) -> ApiResult<Json<CommandResponse>> {
    let service = ModerationService::new(state.service_context());
    let response = service.timed_ban(request).await?;
    Ok(Json(response))
}

/// GET /timed-ban-check?user_id={user_id}
pub async fn check_timed_ban(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<UserIdQuery>,
) -> ApiResult<Json<BanStatusResponse>> {
    let service = ModerationService::new(state.service_context());
    let response = service.check_timed_ban(&query).await?;
    Ok(Json(response))
}
