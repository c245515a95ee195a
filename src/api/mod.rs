//! HTTP control API
//!
//! Settings intake, the pause transport and the exit channel, exposed as
//! JSON endpoints.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/setup", post(setup_handler))
        .route("/restart", post(restart_handler))
        .route("/pause", post(pause_handler))
        .route("/pause/wait", get(pause_wait_handler))
        .route("/resume", post(resume_handler))
        .route("/mute", post(mute_handler))
        .route("/unmute", post(unmute_handler))
        .route("/exit", post(exit_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
