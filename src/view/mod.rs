//! Render hooks the timer core calls into
//!
//! The core never draws anything itself. It reports resets, phase changes,
//! ticks and side effects to a [`SessionView`], which decides how to show them.

pub mod display;

pub use display::DisplayBoard;

use crate::state::Phase;

/// Capability-based view interface.
///
/// All hooks take `&self`; implementations use interior mutability so a view
/// can be shared between the running sequence and the control surface.
pub trait SessionView: Send + Sync {
    /// Clear transient markers (complete, paused) before a new session
    fn reset(&self);

    /// A phase started with the given number of stations still to run
    fn phase_entered(&self, phase: Phase, stations_remaining: u32);

    /// One second of the current phase elapsed; `remaining` is the value shown
    fn tick(&self, phase: Phase, remaining: u64);

    /// Restart the progress bar animation
    fn restart_progress(&self) {}

    /// Play the audible cue
    fn beep(&self) {}

    /// Every station has finished
    fn complete(&self);

    /// Show or hide the pause overlay
    fn pause_shown(&self, _shown: bool) {}

    fn set_muted(&self, _muted: bool) {}

    /// The hosting surface was closed
    fn closed(&self) {}
}
