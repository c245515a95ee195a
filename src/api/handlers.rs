//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::{error, info, warn};

use crate::{
    error::TimerError,
    state::AppState,
    timer::{SettingsBounds, SettingsPayload, TimerSettings},
};
use super::responses::{ApiResponse, HealthResponse, PauseWaitResponse, StatusResponse};

type Rejection = (StatusCode, Json<ApiResponse>);

fn reject(state: &AppState, err: TimerError) -> Rejection {
    let code = match &err {
        TimerError::InvalidSettings { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        TimerError::NotRunning | TimerError::NoSettings => StatusCode::CONFLICT,
        TimerError::ShuttingDown => StatusCode::SERVICE_UNAVAILABLE,
        TimerError::StateLock(_) => {
            error!("{}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    warn!("Request rejected: {}", err);
    (code, Json(ApiResponse::error(err.to_string(), state.display_snapshot())))
}

/// Decode a settings body and check it against the intake bounds
fn parse_settings(body: &[u8]) -> Result<TimerSettings, TimerError> {
    let payload: SettingsPayload = serde_json::from_slice(body)
        .map_err(|e| TimerError::invalid("payload", e.to_string()))?;
    SettingsBounds::default().check(&payload)
}

/// Handle POST /setup - Validate settings and start a session
pub async fn setup_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ApiResponse>, Rejection> {
    let settings = parse_settings(&body).map_err(|e| reject(&state, e))?;

    state
        .controller
        .start(settings)
        .await
        .map_err(|e| reject(&state, e))?;

    info!("Setup endpoint called - session started");
    Ok(Json(ApiResponse::ok("Timer started", state.display_snapshot())))
}

/// Handle POST /restart - Start again with the last or newly supplied settings
pub async fn restart_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ApiResponse>, Rejection> {
    let settings = if body.iter().all(u8::is_ascii_whitespace) {
        None
    } else {
        Some(parse_settings(&body).map_err(|e| reject(&state, e))?)
    };

    state
        .controller
        .restart(settings)
        .await
        .map_err(|e| reject(&state, e))?;

    info!("Restart endpoint called - session restarted");
    Ok(Json(ApiResponse::ok("Timer restarted", state.display_snapshot())))
}

/// Handle POST /pause - Suspend the running countdown
pub async fn pause_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, Rejection> {
    let changed = state.controller.pause().map_err(|e| reject(&state, e))?;
    let message = if changed { "Timer paused" } else { "Timer already paused" };
    Ok(Json(ApiResponse::ok(message, state.display_snapshot())))
}

/// Handle POST /resume - Close the pause window
pub async fn resume_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, Rejection> {
    state.controller.resume().map_err(|e| reject(&state, e))?;
    Ok(Json(ApiResponse::ok("Timer resumed", state.display_snapshot())))
}

/// Handle GET /pause/wait - Block until the pause window closes
pub async fn pause_wait_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PauseWaitResponse>, Rejection> {
    let paused = state
        .controller
        .wait_resume()
        .await
        .map_err(|e| reject(&state, e))?;
    Ok(Json(PauseWaitResponse { paused }))
}

/// Handle POST /mute - Silence the break beep
pub async fn mute_handler(State(state): State<Arc<AppState>>) -> Json<ApiResponse> {
    state.controller.set_muted(true);
    Json(ApiResponse::ok("Audio muted", state.display_snapshot()))
}

/// Handle POST /unmute - Restore the break beep
pub async fn unmute_handler(State(state): State<Arc<AppState>>) -> Json<ApiResponse> {
    state.controller.set_muted(false);
    Json(ApiResponse::ok("Audio unmuted", state.display_snapshot()))
}

/// Handle POST /exit - Close the timer according to the exit behavior
pub async fn exit_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse>, Rejection> {
    let behavior = state.controller.exit().await.map_err(|e| reject(&state, e))?;
    let message = if behavior.terminates() {
        "Shutting down"
    } else {
        "Windows closed"
    };
    Ok(Json(ApiResponse::ok(message, state.display_snapshot())))
}

/// Handle GET /status - Return the sequence and display state
pub async fn status_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatusResponse>, Rejection> {
    let status = state.controller.status().map_err(|e| reject(&state, e))?;

    Ok(Json(StatusResponse::new(
        status,
        state.display_snapshot(),
        state.get_uptime(),
        state.started_at,
        state.host.clone(),
        state.port,
    )))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
