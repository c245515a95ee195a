//! Session lifecycle
//!
//! The controller owns the running session and is the only thing the
//! control surface talks to.

pub mod controller;
pub mod exit;

pub use controller::{SessionController, SessionStatus};
pub use exit::ExitBehavior;
