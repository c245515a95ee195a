//! Single-phase countdown

use std::time::Duration;

use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::pause::PauseGate;

/// Period between ticks in production
pub const TICK: Duration = Duration::from_secs(1);

/// How a countdown ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownOutcome {
    /// Reached zero with no pause pending
    Finished,
    /// The session was torn down; no callbacks ran after the cancellation was seen
    Abandoned,
}

/// Runs one countdown, honoring the session's pause gate and cancellation token
#[derive(Debug, Clone)]
pub struct PhaseCountdown<'a> {
    gate: &'a PauseGate,
    cancel: &'a CancellationToken,
    tick: Duration,
}

impl<'a> PhaseCountdown<'a> {
    pub fn new(gate: &'a PauseGate, cancel: &'a CancellationToken) -> Self {
        Self {
            gate,
            cancel,
            tick: TICK,
        }
    }

    /// Override the tick period
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// Count down from `duration` seconds, calling `on_tick` with the remaining
    /// value before each decrement.
    ///
    /// While the gate is paused no tick fires and nothing is decremented. A
    /// pause requested during the final second is honored before returning.
    pub async fn run<F>(&self, duration: u64, mut on_tick: F) -> CountdownOutcome
    where
        F: FnMut(u64),
    {
        let mut remaining = duration;

        while remaining > 0 {
            if self.cancel.is_cancelled() {
                return CountdownOutcome::Abandoned;
            }

            if self.gate.is_paused() {
                debug!("Countdown suspended at {}s", remaining);
                if self.wait_for_resume().await == CountdownOutcome::Abandoned {
                    return CountdownOutcome::Abandoned;
                }
                continue;
            }

            on_tick(remaining);
            remaining -= 1;

            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => return CountdownOutcome::Abandoned,
                _ = sleep(self.tick) => {}
            }
        }

        if self.gate.is_paused() {
            debug!("Countdown finished while paused, waiting for resume");
            return self.wait_for_resume().await;
        }

        if self.cancel.is_cancelled() {
            return CountdownOutcome::Abandoned;
        }

        CountdownOutcome::Finished
    }

    async fn wait_for_resume(&self) -> CountdownOutcome {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => CountdownOutcome::Abandoned,
            _ = self.gate.await_resume() => {
                if self.cancel.is_cancelled() {
                    CountdownOutcome::Abandoned
                } else {
                    CountdownOutcome::Finished
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorder() -> (Arc<Mutex<Vec<u64>>>, impl FnMut(u64)) {
        let ticks = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&ticks);
        (ticks, move |remaining| sink.lock().unwrap().push(remaining))
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_down_to_one() {
        let gate = PauseGate::new();
        let cancel = CancellationToken::new();
        let (ticks, on_tick) = recorder();

        let outcome = PhaseCountdown::new(&gate, &cancel).run(3, on_tick).await;

        assert_eq!(outcome, CountdownOutcome::Finished);
        assert_eq!(*ticks.lock().unwrap(), vec![3, 2, 1]);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_duration_never_ticks() {
        let gate = PauseGate::new();
        let cancel = CancellationToken::new();
        let (ticks, on_tick) = recorder();
        let started = tokio::time::Instant::now();

        let outcome = PhaseCountdown::new(&gate, &cancel).run(0, on_tick).await;

        assert_eq!(outcome, CountdownOutcome::Finished);
        assert!(ticks.lock().unwrap().is_empty());
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn pause_holds_remaining_value() {
        let gate = PauseGate::new();
        let cancel = CancellationToken::new();
        let (ticks, on_tick) = recorder();

        let task = tokio::spawn({
            let gate = gate.clone();
            let cancel = cancel.clone();
            async move { PhaseCountdown::new(&gate, &cancel).run(5, on_tick).await }
        });

        tokio::time::sleep(Duration::from_millis(2_500)).await;
        gate.pause();
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(*ticks.lock().unwrap(), vec![5, 4, 3]);

        gate.resume();
        assert_eq!(task.await.unwrap(), CountdownOutcome::Finished);
        assert_eq!(*ticks.lock().unwrap(), vec![5, 4, 3, 2, 1]);
    }

    #[tokio::test(start_paused = true)]
    async fn pause_in_final_second_is_honored() {
        let gate = PauseGate::new();
        let cancel = CancellationToken::new();

        let task = tokio::spawn({
            let gate = gate.clone();
            let cancel = cancel.clone();
            async move { PhaseCountdown::new(&gate, &cancel).run(1, |_| {}).await }
        });

        tokio::time::sleep(Duration::from_millis(500)).await;
        gate.pause();
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(!task.is_finished());

        gate.resume();
        assert_eq!(task.await.unwrap(), CountdownOutcome::Finished);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_ticking() {
        let gate = PauseGate::new();
        let cancel = CancellationToken::new();
        let (ticks, on_tick) = recorder();

        let task = tokio::spawn({
            let gate = gate.clone();
            let cancel = cancel.clone();
            async move { PhaseCountdown::new(&gate, &cancel).run(10, on_tick).await }
        });

        tokio::time::sleep(Duration::from_millis(1_500)).await;
        cancel.cancel();

        assert_eq!(task.await.unwrap(), CountdownOutcome::Abandoned);
        assert_eq!(*ticks.lock().unwrap(), vec![10, 9]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_releases_paused_countdown() {
        let gate = PauseGate::new();
        let cancel = CancellationToken::new();
        gate.pause();

        let task = tokio::spawn({
            let gate = gate.clone();
            let cancel = cancel.clone();
            async move { PhaseCountdown::new(&gate, &cancel).run(10, |_| {}).await }
        });

        tokio::time::sleep(Duration::from_secs(5)).await;
        cancel.cancel();
        assert_eq!(task.await.unwrap(), CountdownOutcome::Abandoned);
    }

    #[tokio::test(start_paused = true)]
    async fn custom_tick_period() {
        let gate = PauseGate::new();
        let cancel = CancellationToken::new();
        let started = tokio::time::Instant::now();

        PhaseCountdown::new(&gate, &cancel)
            .with_tick(Duration::from_millis(10))
            .run(4, |_| {})
            .await;

        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(40));
        assert!(elapsed < Duration::from_secs(1));
    }
}
