//! Countdown and phase-sequencing engine
//!
//! Leaves first: counter formatting and station labels, settings, the pause
//! gate, a single-phase countdown, and the sequencer that strings phases
//! together into stations.

pub mod countdown;
pub mod format;
pub mod pause;
pub mod sequencer;
pub mod settings;
pub mod words;

pub use countdown::{CountdownOutcome, PhaseCountdown, TICK};
pub use format::format_time;
pub use pause::PauseGate;
pub use sequencer::{SequenceOutcome, TimerSequencer};
pub use settings::{FieldValue, SettingsBounds, SettingsPayload, TimerSettings};
pub use words::{cardinal, stations_label};
