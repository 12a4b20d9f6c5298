//! Action listing handler

use axum::{extract::State, Json};
use moderation_service::{ActionsResponse, ModerationService};

use crate::response::ApiResult;
use crate::state::AppState;

/// All permanent bans and all active timed bans
///
/// GET /api/getActions
pub async fn get_actions(State(state): State<AppState>) -> ApiResult<Json<ActionsResponse>> {
    let service = ModerationService::new(state.service_context());
    let response = service.list_actions().await?;
    Ok(Json(response))
}
