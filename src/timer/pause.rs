//! Pause gate shared by a session's countdowns and its control surface

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

/// Suspend/resume primitive for one session.
///
/// The paused flag is latched: repeated pauses coalesce into one, a resume
/// releases every waiter, and a pause that lands after a resume but before a
/// waiter wakes keeps that waiter suspended.
#[derive(Debug, Clone)]
pub struct PauseGate {
    paused: Arc<watch::Sender<bool>>,
}

impl PauseGate {
    /// Create an open (unpaused) gate
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self {
            paused: Arc::new(tx),
        }
    }

    /// Close the gate. Returns true if this call changed the flag.
    pub fn pause(&self) -> bool {
        let changed = !self.paused.send_replace(true);
        debug!("Pause gate closed (changed={})", changed);
        changed
    }

    /// Open the gate, releasing any waiter. Returns true if this call changed the flag.
    pub fn resume(&self) -> bool {
        let changed = self.paused.send_replace(false);
        debug!("Pause gate opened (changed={})", changed);
        changed
    }

    pub fn is_paused(&self) -> bool {
        *self.paused.borrow()
    }

    /// Observe the paused flag, e.g. to show or hide a pause overlay
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.paused.subscribe()
    }

    /// Wait until the gate is open, then report the current paused flag.
    ///
    /// Resolves immediately when the gate is already open. There is no timeout.
    pub async fn await_resume(&self) -> bool {
        let mut rx = self.paused.subscribe();
        // The sender lives as long as `self`, so the wait cannot fail.
        let _ = rx.wait_for(|paused| !*paused).await;
        self.is_paused()
    }
}

impl Default for PauseGate {
    fn default() -> Self {
        Self::new()
    }
}
