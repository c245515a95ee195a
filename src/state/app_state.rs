//! Main application state shared with the HTTP handlers

use std::{sync::Arc, time::Instant};
use chrono::{DateTime, Utc};

use crate::{session::SessionController, timer::format_time, view::DisplayBoard};
use super::DisplayState;

/// Application state handed to every HTTP handler
pub struct AppState {
    /// Session lifecycle and pause transport
    pub controller: Arc<SessionController>,
    /// What the timer window currently shows
    pub display: Arc<DisplayBoard>,
    /// Server metadata
    pub start_time: Instant,
    pub started_at: DateTime<Utc>,
    pub port: u16,
    pub host: String,
}

impl AppState {
    pub fn new(
        controller: Arc<SessionController>,
        display: Arc<DisplayBoard>,
        port: u16,
        host: String,
    ) -> Self {
        Self {
            controller,
            display,
            start_time: Instant::now(),
            started_at: Utc::now(),
            port,
            host,
        }
    }

    pub fn display_snapshot(&self) -> DisplayState {
        self.display.snapshot()
    }

    /// Server uptime in counter notation
    pub fn get_uptime(&self) -> String {
        format_time(self.start_time.elapsed().as_secs())
    }
}
