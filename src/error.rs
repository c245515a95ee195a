//! Error types for the timer core and its control surface

use thiserror::Error;

/// Errors raised by the timer engine and the session controller.
///
/// Abandoning a running sequence is not an error; it is reported as an
/// outcome (see [`crate::timer::SequenceOutcome`]).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    /// Settings were rejected before a sequence could start
    #[error("Invalid settings: {field} {reason}")]
    InvalidSettings { field: &'static str, reason: String },

    /// A pause was requested while no countdown is running
    #[error("No countdown is running")]
    NotRunning,

    /// Restart was requested before any settings were supplied
    #[error("No settings available to restart the timer")]
    NoSettings,

    /// An exit has already asked the process to end
    #[error("The timer is shutting down")]
    ShuttingDown,

    /// Controller bookkeeping could not be locked
    #[error("Failed to lock {0}")]
    StateLock(String),
}

impl TimerError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidSettings {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type alias for TimerError
pub type Result<T, E = TimerError> = std::result::Result<T, E>;
