//! Exit behavior

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// What an exit request does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExitBehavior {
    /// Abandon the session and shut the process down
    #[default]
    Terminate,
    /// Abandon the session and close the view, but keep serving so a new
    /// session can be set up
    HideAndCloseWindows,
}

impl ExitBehavior {
    pub fn terminates(&self) -> bool {
        matches!(self, ExitBehavior::Terminate)
    }
}
