//! State management module
//!
//! This module contains the sequence state machine, the display snapshot and
//! the application state shared with the HTTP handlers.

pub mod app_state;
pub mod display_state;
pub mod sequence_state;

// Re-export main types
pub use app_state::AppState;
pub use display_state::{Accent, DisplayState, Progress};
pub use sequence_state::{Phase, SequenceState};
