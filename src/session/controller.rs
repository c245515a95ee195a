//! Session controller: settings intake, pause transport and lifecycle triggers

use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};
use serde::Serialize;
use tokio::{sync::watch, task::JoinHandle};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::{
    error::{Result, TimerError},
    state::{Phase, SequenceState},
    tasks::spawn_session,
    timer::{PauseGate, SequenceOutcome, TimerSequencer, TimerSettings, TICK},
    view::SessionView,
};
use super::ExitBehavior;

/// The running (or most recently finished) session
struct Session {
    gate: PauseGate,
    cancel: CancellationToken,
    state_rx: watch::Receiver<SequenceState>,
    handle: JoinHandle<SequenceOutcome>,
}

impl Session {
    fn is_pausable(&self) -> bool {
        let phase = self.state_rx.borrow().phase;
        // Idle until the spawned task publishes its first phase
        !self.handle.is_finished() && (phase == Phase::Idle || phase.is_counting())
    }
}

#[derive(Default)]
struct ControllerInner {
    /// Last settings a session was started with
    settings: Option<TimerSettings>,
    session: Option<Session>,
}

/// Point-in-time view of the controller
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatus {
    pub sequence: SequenceState,
    pub paused: bool,
    pub settings: Option<TimerSettings>,
}

/// Owns the current session and turns external requests into engine actions
pub struct SessionController {
    view: Arc<dyn SessionView>,
    exit_behavior: ExitBehavior,
    tick: Duration,
    /// Parent of every session token; cancelled when the process should end
    shutdown: CancellationToken,
    inner: Mutex<ControllerInner>,
    /// Serializes start/restart/exit so sessions never overlap
    transitions: tokio::sync::Mutex<()>,
}

impl SessionController {
    pub fn new(view: Arc<dyn SessionView>, exit_behavior: ExitBehavior) -> Self {
        Self {
            view,
            exit_behavior,
            tick: TICK,
            shutdown: CancellationToken::new(),
            inner: Mutex::new(ControllerInner::default()),
            transitions: tokio::sync::Mutex::new(()),
        }
    }

    /// Override the tick period for every session
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    fn lock(&self) -> Result<MutexGuard<'_, ControllerInner>> {
        self.inner
            .lock()
            .map_err(|e| TimerError::StateLock(format!("controller state: {}", e)))
    }

    /// Start a new session, abandoning the current one first
    pub async fn start(&self, settings: TimerSettings) -> Result<()> {
        let _transition = self.transitions.lock().await;

        if self.shutdown.is_cancelled() {
            warn!("Refusing to start a session while shutting down");
            return Err(TimerError::ShuttingDown);
        }

        let sequencer = TimerSequencer::new(settings, Arc::clone(&self.view))?.with_tick(self.tick);

        let previous = {
            let mut inner = self.lock()?;
            inner.settings = Some(settings);
            inner.session.take()
        };
        if let Some(previous) = previous {
            info!("Abandoning running session before starting a new one");
            abandon(previous).await;
        }

        let gate = PauseGate::new();
        let cancel = self.shutdown.child_token();
        let state_rx = sequencer.subscribe();
        let handle = spawn_session(sequencer, gate.clone(), cancel.clone());

        self.lock()?.session = Some(Session {
            gate,
            cancel,
            state_rx,
            handle,
        });

        info!(
            "Session started: duration={}s, break={}s, stations={}",
            settings.duration, settings.break_duration, settings.num_repeats
        );
        Ok(())
    }

    /// Start again with new settings, or with the last ones used
    pub async fn restart(&self, settings: Option<TimerSettings>) -> Result<()> {
        let settings = match settings {
            Some(settings) => settings,
            None => self.lock()?.settings.ok_or(TimerError::NoSettings)?,
        };
        info!("Restarting session");
        self.start(settings).await
    }

    /// Request a pause. Returns true if the session was not already paused.
    pub fn pause(&self) -> Result<bool> {
        let inner = self.lock()?;
        let changed = match inner.session.as_ref() {
            Some(session) if session.is_pausable() => session.gate.pause(),
            _ => return Err(TimerError::NotRunning),
        };

        // Overlay updates under the lock so it always mirrors the gate
        self.view.pause_shown(true);
        drop(inner);

        info!("Pause requested");
        Ok(changed)
    }

    /// Close the pause window. Always reports the new paused flag, `false`.
    pub fn resume(&self) -> Result<bool> {
        let inner = self.lock()?;
        let resumed = inner.session.as_ref().is_some_and(|s| s.gate.resume());
        self.view.pause_shown(false);
        drop(inner);

        if resumed {
            info!("Resumed");
        }
        Ok(false)
    }

    /// Wait until the current pause is released.
    ///
    /// Resolves immediately when nothing is paused, and with `false` if the
    /// session is torn down while waiting.
    pub async fn wait_resume(&self) -> Result<bool> {
        let waiting = self
            .lock()?
            .session
            .as_ref()
            .map(|s| (s.gate.clone(), s.cancel.clone()));

        let Some((gate, cancel)) = waiting else {
            return Ok(false);
        };

        tokio::select! {
            paused = gate.await_resume() => Ok(paused),
            _ = cancel.cancelled() => Ok(false),
        }
    }

    pub fn set_muted(&self, muted: bool) {
        self.view.set_muted(muted);
    }

    /// Handle an exit request according to the configured exit behavior
    pub async fn exit(&self) -> Result<ExitBehavior> {
        let _transition = self.transitions.lock().await;

        let session = self.lock()?.session.take();
        if let Some(session) = session {
            abandon(session).await;
        }
        self.view.closed();

        if self.exit_behavior.terminates() {
            info!("Exit requested, shutting down");
            self.shutdown.cancel();
        } else {
            info!("Exit requested, view closed and waiting for a new session");
        }
        Ok(self.exit_behavior)
    }

    /// Abandon any running session and signal shutdown regardless of exit behavior
    pub async fn shutdown(&self) {
        let _transition = self.transitions.lock().await;

        self.shutdown.cancel();
        let session = match self.lock() {
            Ok(mut inner) => inner.session.take(),
            Err(e) => {
                warn!("{}", e);
                None
            }
        };
        if let Some(session) = session {
            abandon(session).await;
        }
    }

    /// Resolves once the process has been asked to end
    pub async fn exit_requested(&self) {
        self.shutdown.cancelled().await
    }

    pub fn status(&self) -> Result<SessionStatus> {
        let inner = self.lock()?;
        let (sequence, paused) = match inner.session.as_ref() {
            Some(session) => (*session.state_rx.borrow(), session.gate.is_paused()),
            None => (SequenceState::idle(), false),
        };

        Ok(SessionStatus {
            sequence,
            paused,
            settings: inner.settings,
        })
    }
}

/// Cancel a session and wait for its task to stop
async fn abandon(session: Session) {
    session.cancel.cancel();
    if let Err(e) = session.handle.await {
        warn!("Session task ended abnormally: {}", e);
    }
}
