//! Background task running one timer session

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::timer::{PauseGate, SequenceOutcome, TimerSequencer};

/// Run a session's sequencer until it completes or is abandoned
pub async fn session_task(
    sequencer: TimerSequencer,
    gate: PauseGate,
    cancel: CancellationToken,
) -> SequenceOutcome {
    let settings = *sequencer.settings();
    debug!("Session task started with {:?}", settings);

    let outcome = sequencer.run(&gate, &cancel).await;
    match outcome {
        SequenceOutcome::Completed => {
            info!("Session finished all {} stations", settings.num_repeats)
        }
        SequenceOutcome::Abandoned => info!("Session abandoned"),
    }
    outcome
}

/// Spawn [`session_task`] on the runtime
pub fn spawn_session(
    sequencer: TimerSequencer,
    gate: PauseGate,
    cancel: CancellationToken,
) -> JoinHandle<SequenceOutcome> {
    tokio::spawn(session_task(sequencer, gate, cancel))
}
