//! Sequence state structure and transitions

use serde::{Deserialize, Serialize};

use crate::timer::TimerSettings;

/// Phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Active,
    Break,
    Complete,
}

impl Phase {
    /// True while a countdown is running for this phase
    pub fn is_counting(&self) -> bool {
        matches!(self, Phase::Active | Phase::Break)
    }
}

/// Sequence state for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceState {
    pub phase: Phase,
    pub stations_remaining: u32,
    /// Seconds left in the current phase as of the last tick
    pub remaining_seconds: u64,
}

impl SequenceState {
    /// State before any session has started
    pub fn idle() -> Self {
        Self {
            phase: Phase::Idle,
            stations_remaining: 0,
            remaining_seconds: 0,
        }
    }

    /// Move to the next phase.
    ///
    /// Idle enters the first Active phase, Active hands over to Break, and a
    /// finished Break consumes one station before either looping back to Active
    /// or completing. Complete is terminal.
    pub fn advance(self, settings: &TimerSettings) -> Self {
        match self.phase {
            Phase::Idle => Self {
                phase: Phase::Active,
                stations_remaining: settings.num_repeats,
                remaining_seconds: settings.duration,
            },
            Phase::Active => Self {
                phase: Phase::Break,
                stations_remaining: self.stations_remaining,
                remaining_seconds: settings.break_duration,
            },
            Phase::Break => {
                let stations_remaining = self.stations_remaining.saturating_sub(1);
                if stations_remaining > 0 {
                    Self {
                        phase: Phase::Active,
                        stations_remaining,
                        remaining_seconds: settings.duration,
                    }
                } else {
                    Self {
                        phase: Phase::Complete,
                        stations_remaining: 0,
                        remaining_seconds: 0,
                    }
                }
            }
            Phase::Complete => self,
        }
    }

    /// Configured length of the current phase
    pub fn phase_duration(&self, settings: &TimerSettings) -> u64 {
        match self.phase {
            Phase::Active => settings.duration,
            Phase::Break => settings.break_duration,
            Phase::Idle | Phase::Complete => 0,
        }
    }
}

impl Default for SequenceState {
    fn default() -> Self {
        Self::idle()
    }
}
