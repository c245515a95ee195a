//! Sequencer behavior against a recording view, on a paused clock

mod common;

use std::{sync::Arc, time::Duration};

use tokio::time::{sleep, Instant};
use tokio_util::sync::CancellationToken;

use common::{Event, RecordingView};
use station_timer::{
    state::Phase,
    timer::{stations_label, PauseGate, SequenceOutcome, TimerSequencer, TimerSettings},
    TimerError,
};

fn sequencer(view: &Arc<RecordingView>, duration: u64, break_duration: u64, repeats: u32) -> TimerSequencer {
    let settings = TimerSettings::new(duration, break_duration, repeats).unwrap();
    TimerSequencer::new(settings, view.clone()).unwrap()
}

#[tokio::test(start_paused = true)]
async fn stations_alternate_then_complete_once() {
    let view = Arc::new(RecordingView::new());
    let sequencer = sequencer(&view, 2, 1, 3);

    let outcome = sequencer
        .run(&PauseGate::new(), &CancellationToken::new())
        .await;

    assert_eq!(outcome, SequenceOutcome::Completed);
    assert_eq!(
        view.phase_entries(),
        vec![
            (Phase::Active, 3),
            (Phase::Break, 3),
            (Phase::Active, 2),
            (Phase::Break, 2),
            (Phase::Active, 1),
            (Phase::Break, 1),
        ]
    );

    let events = view.events();
    assert_eq!(events.first(), Some(&Event::Reset));
    assert_eq!(events.last(), Some(&Event::Complete));
    assert_eq!(view.count(&Event::Complete), 1);
    assert_eq!(view.count(&Event::Reset), 1);
}

#[tokio::test(start_paused = true)]
async fn station_labels_count_down() {
    let view = Arc::new(RecordingView::new());
    let sequencer = sequencer(&view, 1, 1, 3);

    sequencer
        .run(&PauseGate::new(), &CancellationToken::new())
        .await;

    let labels: Vec<String> = view
        .phase_entries()
        .into_iter()
        .filter(|(phase, _)| *phase == Phase::Active)
        .map(|(_, stations)| stations_label(stations))
        .collect();
    assert_eq!(
        labels,
        vec!["Three stations remaining", "Two stations remaining", "Last station"]
    );
    assert_eq!(sequencer.state().stations_remaining, 0);
    assert_eq!(stations_label(sequencer.state().stations_remaining), "No more stations");
}

#[tokio::test(start_paused = true)]
async fn only_breaks_beep() {
    let view = Arc::new(RecordingView::new());
    let sequencer = sequencer(&view, 3, 2, 2);

    sequencer
        .run(&PauseGate::new(), &CancellationToken::new())
        .await;

    assert_eq!(view.ticks(Phase::Active), vec![3, 2, 1, 3, 2, 1]);
    assert_eq!(view.ticks(Phase::Break), vec![2, 1, 2, 1]);
    assert_eq!(view.count(&Event::Beep), 4);
    assert_eq!(view.count(&Event::Progress), 10);

    // Break side effects run before the counter updates
    let events = view.events();
    let first_break = events
        .iter()
        .position(|e| *e == Event::PhaseEntered(Phase::Break, 2))
        .unwrap();
    assert_eq!(
        &events[first_break + 1..first_break + 4],
        &[Event::Beep, Event::Progress, Event::Tick(Phase::Break, 2)]
    );
}

#[tokio::test(start_paused = true)]
async fn zero_length_phases_complete_immediately() {
    let view = Arc::new(RecordingView::new());
    let sequencer = sequencer(&view, 0, 0, 4);
    let started = Instant::now();

    let outcome = sequencer
        .run(&PauseGate::new(), &CancellationToken::new())
        .await;

    assert_eq!(outcome, SequenceOutcome::Completed);
    assert_eq!(started.elapsed(), Duration::ZERO);
    assert_eq!(view.phase_entries().len(), 8);
    assert!(view.ticks(Phase::Active).is_empty());
    assert!(view.ticks(Phase::Break).is_empty());
    assert_eq!(view.count(&Event::Complete), 1);
}

#[tokio::test(start_paused = true)]
async fn pause_suspends_without_losing_seconds() {
    let view = Arc::new(RecordingView::new());
    let sequencer = sequencer(&view, 5, 2, 1);
    let gate = PauseGate::new();
    let cancel = CancellationToken::new();

    let task = tokio::spawn({
        let gate = gate.clone();
        let cancel = cancel.clone();
        async move { sequencer.run(&gate, &cancel).await }
    });

    sleep(Duration::from_millis(2_500)).await;
    gate.pause();
    sleep(Duration::from_secs(120)).await;

    assert_eq!(view.ticks(Phase::Active), vec![5, 4, 3]);
    assert!(view.ticks(Phase::Break).is_empty());
    assert!(!task.is_finished());

    gate.resume();
    assert_eq!(task.await.unwrap(), SequenceOutcome::Completed);
    assert_eq!(view.ticks(Phase::Active), vec![5, 4, 3, 2, 1]);
    assert_eq!(view.ticks(Phase::Break), vec![2, 1]);
}

#[tokio::test(start_paused = true)]
async fn abandoning_mid_break_stops_all_callbacks() {
    let view = Arc::new(RecordingView::new());
    let sequencer = sequencer(&view, 2, 3, 2);
    let cancel = CancellationToken::new();

    let task = tokio::spawn({
        let cancel = cancel.clone();
        async move { sequencer.run(&PauseGate::new(), &cancel).await }
    });

    sleep(Duration::from_millis(3_500)).await;
    cancel.cancel();
    let recorded = view.len();

    assert_eq!(task.await.unwrap(), SequenceOutcome::Abandoned);
    sleep(Duration::from_secs(60)).await;

    assert_eq!(view.len(), recorded);
    assert_eq!(view.events().last(), Some(&Event::Tick(Phase::Break, 2)));
    assert_eq!(view.count(&Event::Complete), 0);
    assert_eq!(view.phase_entries(), vec![(Phase::Active, 2), (Phase::Break, 2)]);
}

#[tokio::test(start_paused = true)]
async fn abandoning_while_paused_stops_all_callbacks() {
    let view = Arc::new(RecordingView::new());
    let sequencer = sequencer(&view, 4, 4, 1);
    let gate = PauseGate::new();
    let cancel = CancellationToken::new();

    let task = tokio::spawn({
        let gate = gate.clone();
        let cancel = cancel.clone();
        async move { sequencer.run(&gate, &cancel).await }
    });

    sleep(Duration::from_millis(1_500)).await;
    gate.pause();
    sleep(Duration::from_secs(5)).await;
    cancel.cancel();
    let recorded = view.len();
    gate.resume();

    assert_eq!(task.await.unwrap(), SequenceOutcome::Abandoned);
    assert_eq!(view.len(), recorded);
    assert_eq!(view.ticks(Phase::Active), vec![4, 3]);
}

#[tokio::test]
async fn cancelled_before_start_renders_nothing() {
    let view = Arc::new(RecordingView::new());
    let sequencer = sequencer(&view, 1, 1, 1);
    let cancel = CancellationToken::new();
    cancel.cancel();

    let outcome = sequencer.run(&PauseGate::new(), &cancel).await;

    assert_eq!(outcome, SequenceOutcome::Abandoned);
    assert!(view.events().is_empty());
}

#[test]
fn zero_repeats_are_refused() {
    let view: Arc<RecordingView> = Arc::new(RecordingView::new());
    let settings = TimerSettings {
        duration: 10,
        break_duration: 5,
        num_repeats: 0,
    };

    let result = TimerSequencer::new(settings, view);
    assert!(matches!(
        result,
        Err(TimerError::InvalidSettings { field: "numRepeats", .. })
    ));
}

#[tokio::test(start_paused = true)]
async fn state_is_published() {
    let view = Arc::new(RecordingView::new());
    let sequencer = sequencer(&view, 2, 2, 1);
    let mut rx = sequencer.subscribe();
    assert_eq!(rx.borrow().phase, Phase::Idle);

    sequencer
        .run(&PauseGate::new(), &CancellationToken::new())
        .await;

    assert!(rx.has_changed().unwrap());
    let state = *rx.borrow_and_update();
    assert_eq!(state.phase, Phase::Complete);
    assert_eq!(state.remaining_seconds, 0);
}
