//! Health check handlers
//!
//! Endpoints for liveness probes.

use axum::Json;
use moderation_service::HealthResponse;

/// Liveness string the bot checks on startup
pub const LIVENESS_MESSAGE: &str = "Roblox Moderation API is live.";

/// Plain-text liveness check
///
/// GET /
pub async fn index() -> &'static str {
    LIVENESS_MESSAGE
}

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
