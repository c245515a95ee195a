//! Shared helpers for integration tests

#![allow(dead_code)]

use std::sync::Mutex;

use station_timer::{state::Phase, SessionView};

/// Every hook call a view received, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Reset,
    PhaseEntered(Phase, u32),
    Tick(Phase, u64),
    Progress,
    Beep,
    Complete,
    PauseShown(bool),
    Muted(bool),
    Closed,
}

/// View that records hook calls instead of rendering them
#[derive(Debug, Default)]
pub struct RecordingView {
    events: Mutex<Vec<Event>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn count(&self, wanted: &Event) -> usize {
        self.events().iter().filter(|e| *e == wanted).count()
    }

    pub fn phase_entries(&self) -> Vec<(Phase, u32)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::PhaseEntered(phase, stations) => Some((phase, stations)),
                _ => None,
            })
            .collect()
    }

    pub fn ticks(&self, wanted: Phase) -> Vec<u64> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Tick(phase, remaining) if phase == wanted => Some(remaining),
                _ => None,
            })
            .collect()
    }

    /// Events recorded after the last reset
    pub fn since_last_reset(&self) -> Vec<Event> {
        let events = self.events();
        match events.iter().rposition(|e| *e == Event::Reset) {
            Some(index) => events[index + 1..].to_vec(),
            None => events,
        }
    }
}

impl SessionView for RecordingView {
    fn reset(&self) {
        self.push(Event::Reset);
    }

    fn phase_entered(&self, phase: Phase, stations_remaining: u32) {
        self.push(Event::PhaseEntered(phase, stations_remaining));
    }

    fn tick(&self, phase: Phase, remaining: u64) {
        self.push(Event::Tick(phase, remaining));
    }

    fn restart_progress(&self) {
        self.push(Event::Progress);
    }

    fn beep(&self) {
        self.push(Event::Beep);
    }

    fn complete(&self) {
        self.push(Event::Complete);
    }

    fn pause_shown(&self, shown: bool) {
        self.push(Event::PauseShown(shown));
    }

    fn set_muted(&self, muted: bool) {
        self.push(Event::Muted(muted));
    }

    fn closed(&self) {
        self.push(Event::Closed);
    }
}
