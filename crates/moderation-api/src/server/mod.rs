//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use moderation_common::{AppConfig, AppError};
use moderation_core::{SharedClock, SystemClock};
use moderation_service::ServiceContextBuilder;
use moderation_store::{InMemoryBanRepository, InMemoryTimedBanRepository};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, ROUTES};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config().api.request_timeout_secs);
    let router = create_router();
    let router = apply_middleware(router, timeout);
    router.with_state(state)
}

/// Create AppState backed by fresh in-memory stores and the system clock
pub fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    create_app_state_with_clock(config, Arc::new(SystemClock))
}

/// Create AppState with an explicit clock
pub fn create_app_state_with_clock(
    config: AppConfig,
    clock: SharedClock,
) -> Result<AppState, AppError> {
    let ban_repo = Arc::new(InMemoryBanRepository::new());
    let timed_ban_repo = Arc::new(InMemoryTimedBanRepository::new());

    let service_context = ServiceContextBuilder::new()
        .ban_repo(ban_repo)
        .timed_ban_repo(timed_ban_repo)
        .clock(clock)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Log the registered route table
fn log_routes() {
    for &(method, path) in ROUTES {
        info!(method, path, "Route registered");
    }
}

/// Run the HTTP server on an already bound listener
pub async fn serve(app: Router, listener: TcpListener) -> Result<(), AppError> {
    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Server(e.to_string()))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Server(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    serve(app, listener).await
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.socket_addr()?;

    // Create app state
    let state = create_app_state(config)?;

    // Build application
    let app = create_app(state);
    log_routes();

    // Run server
    run_server(app, addr).await
}
