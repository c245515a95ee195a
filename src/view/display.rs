//! Headless display board with optional terminal echo

use std::{
    io::Write,
    sync::Mutex,
};
use tracing::{debug, info, warn};

use crate::{
    state::{Accent, DisplayState, Phase, Progress},
    timer::{format_time, stations_label},
};
use super::SessionView;

/// Counter text shown once the session is complete
pub const END_COUNTER: &str = "0";

/// Info line for each phase
pub const INFO_ACTIVE: &str = "Complete your activity";
pub const INFO_BREAK: &str = "Go to your next station";
pub const INFO_COMPLETE: &str = "Return to your original station";

/// Tracks what the timer window shows and optionally echoes it to stdout
#[derive(Debug)]
pub struct DisplayBoard {
    state: Mutex<DisplayState>,
    echo: bool,
}

impl DisplayBoard {
    pub fn new(echo: bool) -> Self {
        Self {
            state: Mutex::new(DisplayState::new()),
            echo,
        }
    }

    /// Current display contents
    pub fn snapshot(&self) -> DisplayState {
        match self.state.lock() {
            Ok(state) => state.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn update<F>(&self, updater: F) -> Option<DisplayState>
    where
        F: FnOnce(&mut DisplayState),
    {
        match self.state.lock() {
            Ok(mut state) => {
                updater(&mut state);
                Some(state.clone())
            }
            Err(e) => {
                warn!("Failed to lock display state: {}", e);
                None
            }
        }
    }

    fn print(&self, text: &str) {
        if !self.echo {
            return;
        }
        let mut out = std::io::stdout().lock();
        if let Err(e) = write!(out, "{}", text).and_then(|_| out.flush()) {
            debug!("Failed to echo display: {}", e);
        }
    }
}

impl SessionView for DisplayBoard {
    fn reset(&self) {
        self.update(DisplayState::reset);
    }

    fn phase_entered(&self, phase: Phase, stations_remaining: u32) {
        let (accent, alert, text) = match phase {
            Phase::Break => (Accent::Red, true, INFO_BREAK),
            _ => (Accent::Primary, false, INFO_ACTIVE),
        };
        let label = stations_label(stations_remaining);

        self.update(|state| {
            state.accent = accent;
            state.progress_alert = alert;
            state.info = text.to_string();
            state.stations = label.clone();
        });

        info!("{:?} phase: {} ({})", phase, text, label);
        self.print(&format!("\n{} - {}\n", label, text));
    }

    fn tick(&self, phase: Phase, remaining: u64) {
        let counter = format_time(remaining);
        self.update(|state| state.counter = counter.clone());

        debug!("{:?} tick: {}", phase, counter);
        self.print(&format!("\r{:>10}", counter));
    }

    fn restart_progress(&self) {
        self.update(|state| {
            state.progress = Progress::Running;
            state.progress_restarts += 1;
        });
    }

    fn beep(&self) {
        let audible = self
            .update(|state| {
                if !state.muted {
                    state.beeps += 1;
                }
            })
            .map(|state| !state.muted)
            .unwrap_or(false);

        if audible {
            self.print("\x07");
        }
    }

    fn complete(&self) {
        self.update(|state| {
            state.progress = Progress::Removed;
            state.progress_alert = false;
            state.accent = Accent::End;
            state.counter = END_COUNTER.to_string();
            state.info = INFO_COMPLETE.to_string();
            state.stations = stations_label(0);
            state.pause_visible = false;
            state.restart_visible = true;
        });

        info!("Session complete: {}", INFO_COMPLETE);
        self.print(&format!("\r{:>10}\n{}\n", END_COUNTER, INFO_COMPLETE));
    }

    fn pause_shown(&self, shown: bool) {
        self.update(|state| state.dimmed = shown);
        if shown {
            self.print("\n[paused]\n");
        }
    }

    fn set_muted(&self, muted: bool) {
        self.update(|state| state.muted = muted);
        info!("Audio {}", if muted { "muted" } else { "unmuted" });
    }

    fn closed(&self) {
        self.update(|state| {
            state.closed = true;
            state.dimmed = false;
        });
        self.print("\n");
    }
}
