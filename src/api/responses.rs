//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    session::SessionStatus,
    state::{DisplayState, SequenceState},
    timer::TimerSettings,
};

/// Response for control endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub display: DisplayState,
}

impl ApiResponse {
    pub fn new(status: &str, message: impl Into<String>, display: DisplayState) -> Self {
        Self {
            status: status.to_string(),
            message: message.into(),
            timestamp: Utc::now(),
            display,
        }
    }

    pub fn ok(message: impl Into<String>, display: DisplayState) -> Self {
        Self::new("ok", message, display)
    }

    pub fn error(message: impl Into<String>, display: DisplayState) -> Self {
        Self::new("error", message, display)
    }
}

/// Reply to a pause-wait request once the pause window has closed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PauseWaitResponse {
    pub paused: bool,
}

/// Full status of the timer and the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub sequence: SequenceState,
    pub paused: bool,
    pub settings: Option<TimerSettings>,
    pub display: DisplayState,
    pub uptime: String,
    pub started_at: DateTime<Utc>,
    pub host: String,
    pub port: u16,
}

impl StatusResponse {
    pub fn new(
        status: SessionStatus,
        display: DisplayState,
        uptime: String,
        started_at: DateTime<Utc>,
        host: String,
        port: u16,
    ) -> Self {
        Self {
            sequence: status.sequence,
            paused: status.paused,
            settings: status.settings,
            display,
            uptime,
            started_at,
            host,
            port,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
