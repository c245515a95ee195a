//! What the timer window would currently show

use serde::{Deserialize, Serialize};

/// Colour accent of the counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    None,
    Primary,
    Red,
    End,
}

/// Progress bar animation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Progress {
    Idle,
    Running,
    Removed,
}

/// Snapshot of the display board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    pub counter: String,
    pub info: String,
    pub stations: String,
    pub accent: Accent,
    pub progress: Progress,
    /// Red progress bar during breaks
    pub progress_alert: bool,
    /// Number of times the progress bar animation was restarted this session
    pub progress_restarts: u64,
    /// Audible beeps played this session
    pub beeps: u64,
    /// Dim overlay while the pause window is open
    pub dimmed: bool,
    pub pause_visible: bool,
    pub restart_visible: bool,
    pub muted: bool,
    pub closed: bool,
}

impl DisplayState {
    pub fn new() -> Self {
        Self {
            counter: String::new(),
            info: String::new(),
            stations: String::new(),
            accent: Accent::None,
            progress: Progress::Idle,
            progress_alert: false,
            progress_restarts: 0,
            beeps: 0,
            dimmed: false,
            pause_visible: true,
            restart_visible: false,
            muted: false,
            closed: false,
        }
    }

    /// Clear every per-session marker, keeping the mute preference
    pub fn reset(&mut self) {
        let muted = self.muted;
        *self = Self::new();
        self.muted = muted;
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}
