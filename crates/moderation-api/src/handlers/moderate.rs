//! Command dispatch handler

use axum::{extract::State, Json};
use moderation_service::{CommandResponse, ModerateRequest, ModerationService};

use crate::extractors::JsonBody;
use crate::response::ApiResult;
use crate::state::AppState;

/// Run a named moderation command
///
/// POST /api/moderate
pub async fn moderate(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ModerateRequest>,
) -> ApiResult<Json<CommandResponse>> {
    let service = ModerationService::new(state.service_context());
    let response = service.moderate(request).await?;
    Ok(Json(response))
}
