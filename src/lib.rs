//! Station Timer - an interval timer for circuit-style sessions
//!
//! This library sequences active and break countdown phases across a number
//! of stations, with pause/resume, restart and exit driven by an HTTP
//! control surface.

pub mod api;
pub mod config;
pub mod error;
pub mod session;
pub mod state;
pub mod tasks;
pub mod timer;
pub mod utils;
pub mod view;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use error::TimerError;
pub use session::{ExitBehavior, SessionController};
pub use state::AppState;
pub use timer::{PauseGate, PhaseCountdown, TimerSequencer, TimerSettings};
pub use utils::signals::shutdown_signal;
pub use view::{DisplayBoard, SessionView};
