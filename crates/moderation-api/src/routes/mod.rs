//! Route definitions
//!
//! Paths are fixed by the bot and game clients, so nothing is versioned or
//! nested.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{actions, bans, health, moderate, timed_bans};
use crate::state::AppState;

/// Every registered route as (method, path), logged at startup
pub const ROUTES: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/health"),
    ("POST", "/ban"),
    ("POST", "/kick"),
    ("POST", "/unban"),
    ("GET", "/ban-check"),
    ("POST", "/timed-ban"),
    ("GET", "/timed-ban-check"),
    ("POST", "/api/moderate"),
    ("GET", "/api/isBanned/:user_id"),
    ("GET", "/api/getActions"),
];

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .merge(ban_routes())
        .merge(timed_ban_routes())
        .merge(game_routes())
}

/// Liveness routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::index))
        .route("/health", get(health::health_check))
}

/// Permanent ban and kick routes used by the bot
fn ban_routes() -> Router<AppState> {
    Router::new()
        .route("/ban", post(bans::ban))
        .route("/kick", post(bans::kick))
        .route("/unban", post(bans::unban))
        .route("/ban-check", get(bans::check_ban))
}

/// Timed ban routes
fn timed_ban_routes() -> Router<AppState> {
    Router::new()
        .route("/timed-ban", post(timed_bans::timed_ban))
        .route("/timed-ban-check", get(timed_bans::check_timed_ban))
}

/// Routes polled by game servers
fn game_routes() -> Router<AppState> {
    Router::new()
        .route("/api/moderate", post(moderate::moderate))
        .route("/api/isBanned/:user_id", get(bans::is_banned))
        .route("/api/getActions", get(actions::get_actions))
}
