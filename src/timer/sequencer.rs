//! Station sequencer: N repeats of (active, break) ending in complete

use std::{sync::Arc, time::Duration};

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::{
    error::Result,
    state::{Phase, SequenceState},
    view::SessionView,
};
use super::{
    countdown::{CountdownOutcome, PhaseCountdown, TICK},
    pause::PauseGate,
    settings::TimerSettings,
};

/// How a sequence ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceOutcome {
    Completed,
    Abandoned,
}

/// Drives one session through its stations
pub struct TimerSequencer {
    settings: TimerSettings,
    view: Arc<dyn SessionView>,
    tick: Duration,
    state_tx: watch::Sender<SequenceState>,
}

impl TimerSequencer {
    /// Create a sequencer, refusing settings it cannot run
    pub fn new(settings: TimerSettings, view: Arc<dyn SessionView>) -> Result<Self> {
        settings.validate()?;
        let (state_tx, _) = watch::channel(SequenceState::idle());
        Ok(Self {
            settings,
            view,
            tick: TICK,
            state_tx,
        })
    }

    /// Override the tick period
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn settings(&self) -> &TimerSettings {
        &self.settings
    }

    /// Current sequence state
    pub fn state(&self) -> SequenceState {
        *self.state_tx.borrow()
    }

    /// Observe sequence state changes
    pub fn subscribe(&self) -> watch::Receiver<SequenceState> {
        self.state_tx.subscribe()
    }

    /// Run every station to completion, or until `cancel` fires.
    ///
    /// Once cancellation is observed no further view hooks are called.
    pub async fn run(&self, gate: &PauseGate, cancel: &CancellationToken) -> SequenceOutcome {
        if cancel.is_cancelled() {
            return SequenceOutcome::Abandoned;
        }

        info!(
            "Starting sequence: {} stations of {}s active / {}s break",
            self.settings.num_repeats, self.settings.duration, self.settings.break_duration
        );
        self.view.reset();

        let countdown = PhaseCountdown::new(gate, cancel).with_tick(self.tick);
        let mut state = SequenceState::idle().advance(&self.settings);

        loop {
            if cancel.is_cancelled() {
                info!("Sequence abandoned before {:?} phase", state.phase);
                return SequenceOutcome::Abandoned;
            }
            self.state_tx.send_replace(state);

            if state.phase == Phase::Complete {
                self.view.complete();
                info!("Sequence complete");
                return SequenceOutcome::Completed;
            }

            let phase = state.phase;
            debug!(
                "Entering {:?} phase with {} stations remaining",
                phase, state.stations_remaining
            );
            self.view.phase_entered(phase, state.stations_remaining);

            let outcome = countdown
                .run(state.phase_duration(&self.settings), |remaining| {
                    if phase == Phase::Break {
                        self.view.beep();
                    }
                    self.view.restart_progress();
                    self.view.tick(phase, remaining);
                    self.state_tx
                        .send_modify(|current| current.remaining_seconds = remaining);
                })
                .await;

            if outcome == CountdownOutcome::Abandoned {
                info!("Sequence abandoned during {:?} phase", phase);
                return SequenceOutcome::Abandoned;
            }

            state = state.advance(&self.settings);
        }
    }
}
