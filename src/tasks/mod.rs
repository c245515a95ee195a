//! Background tasks module
//!
//! This module contains the task that runs a timer session alongside the
//! control server.

pub mod session_task;

// Re-export main functions
pub use session_task::{session_task, spawn_session};
