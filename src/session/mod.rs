//! Session module - exercise tracker plus its rest timer
//!
//! - `tracker.rs`: set/rep state machine, no I/O
//! - `timer.rs`: cancellable one-second ticker on tokio

pub mod timer;
pub mod tracker;

pub use timer::{RestTimer, Tick};
pub use tracker::{Phase, SessionState, Tracker};

use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

use crate::exercises::ExerciseRecord;

/// Rest countdown resolution
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// User-triggered transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    IncrementRep,
    DecrementRep,
    CompleteSet,
    ToggleRestTimer,
    Reset,
}

/// A tracker bound to its rest timer.
///
/// The timer runs exactly while the tracker says it should: it is started
/// when a rest begins or resumes, and dropped on pause, expiry, reset, or
/// when the session itself is dropped.
pub struct ExerciseSession {
    tracker: Tracker,
    timer: Option<RestTimer>,
    next_timer_id: u64,
    period: Duration,
    tx: UnboundedSender<Tick>,
    rx: UnboundedReceiver<Tick>,
}

impl ExerciseSession {
    pub fn new(record: &ExerciseRecord) -> Self {
        Self::with_tracker(Tracker::new(record), TICK_PERIOD)
    }

    pub fn with_tracker(tracker: Tracker, period: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tracker,
            timer: None,
            next_timer_id: 0,
            period,
            tx,
            rx,
        }
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    pub fn state(&self) -> SessionState {
        self.tracker.state()
    }

    /// Whether a countdown task is currently alive
    pub fn has_timer(&self) -> bool {
        self.timer.is_some()
    }

    pub fn apply(&mut self, action: Action) -> bool {
        let changed = match action {
            Action::IncrementRep => self.tracker.increment_rep(),
            Action::DecrementRep => self.tracker.decrement_rep(),
            Action::CompleteSet => self.tracker.complete_set(),
            Action::ToggleRestTimer => self.tracker.toggle_rest_timer(),
            Action::Reset => {
                self.tracker.reset();
                true
            }
        };

        if changed {
            debug!("{:?} -> {:?}", action, self.tracker.state());
        } else {
            debug!("{:?} ignored", action);
        }

        self.sync_timer();
        changed
    }

    /// Apply every tick already delivered. Returns how many were applied.
    pub fn drain_ticks(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(tick) = self.rx.try_recv() {
            if self.handle_tick(tick) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait for the running timer's next tick and apply it.
    /// Returns `false` right away when no timer is running.
    pub async fn next_tick(&mut self) -> bool {
        while self.timer.is_some() {
            match self.rx.recv().await {
                Some(tick) => {
                    if self.handle_tick(tick) {
                        return true;
                    }
                }
                None => return false,
            }
        }
        false
    }

    fn handle_tick(&mut self, tick: Tick) -> bool {
        let current = self.timer.as_ref().map(RestTimer::id);
        if current != Some(tick.timer_id) {
            debug!("Stale tick from timer {} dropped", tick.timer_id);
            return false;
        }

        let applied = self.tracker.tick();
        if applied && !self.tracker.is_resting() {
            info!("Rest finished, set {}", self.tracker.current_set());
        }
        self.sync_timer();
        applied
    }

    fn sync_timer(&mut self) {
        match (self.tracker.is_rest_timer_active(), self.timer.is_some()) {
            (true, false) => {
                let id = self.next_timer_id;
                self.next_timer_id += 1;
                self.timer = Some(RestTimer::start(id, self.period, self.tx.clone()));
            }
            (false, true) => self.timer = None,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> ExerciseSession {
        ExerciseSession::with_tracker(Tracker::with_limits(3, Some(15), 30), TICK_PERIOD)
    }

    #[test]
    fn test_no_timer_while_active() {
        let mut s = session();
        s.apply(Action::IncrementRep);
        s.apply(Action::DecrementRep);
        assert!(!s.has_timer());
        assert_eq!(s.drain_ticks(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_complete_set_starts_timer() {
        let mut s = session();
        assert!(s.apply(Action::CompleteSet));
        assert!(s.has_timer());
        assert!(s.state().is_rest_timer_active);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rest_expires_after_rest_time() {
        let mut s = session();
        s.apply(Action::CompleteSet);

        let mut ticks = 0;
        while s.next_tick().await {
            ticks += 1;
        }

        assert_eq!(ticks, 30);
        assert!(!s.has_timer());
        assert_eq!(s.state(), SessionState {
            current_set: 2,
            current_rep: 0,
            is_resting: false,
            rest_time_left: 30,
            is_rest_timer_active: false,
        });
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_stops_timer_and_resume_restarts() {
        let mut s = session();
        s.apply(Action::CompleteSet);
        assert!(s.next_tick().await);

        s.apply(Action::ToggleRestTimer);
        assert!(!s.has_timer());
        assert!(!s.next_tick().await);
        assert_eq!(s.state().rest_time_left, 29);

        s.apply(Action::ToggleRestTimer);
        assert!(s.has_timer());
        assert!(s.next_tick().await);
        assert_eq!(s.state().rest_time_left, 28);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_stops_timer() {
        let mut s = session();
        s.apply(Action::CompleteSet);
        assert!(s.next_tick().await);

        assert!(s.apply(Action::Reset));
        assert!(!s.has_timer());
        assert_eq!(s.state(), Tracker::with_limits(3, Some(15), 30).state());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_ticks_ignored() {
        let mut s = session();
        s.apply(Action::CompleteSet);
        let old_id = s.timer.as_ref().map(RestTimer::id).unwrap();

        s.apply(Action::ToggleRestTimer);
        s.apply(Action::ToggleRestTimer);
        s.tx.send(Tick { timer_id: old_id }).unwrap();

        assert_eq!(s.drain_ticks(), 0);
        assert_eq!(s.state().rest_time_left, 30);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drain_applies_delivered_ticks() {
        let mut s = session();
        s.apply(Action::CompleteSet);

        tokio::time::sleep(TICK_PERIOD * 3 + TICK_PERIOD / 2).await;
        assert_eq!(s.drain_ticks(), 3);
        assert_eq!(s.state().rest_time_left, 27);
    }
}
