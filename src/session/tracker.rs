//! Set/rep tracker with a rest countdown between sets

use serde::Serialize;

use crate::exercises::ExerciseRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Working through the current set
    Active,
    /// Resting between sets
    Resting { time_left: u32, timer_running: bool },
}

/// Snapshot of the tracker for rendering and assertions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionState {
    pub current_set: u32,
    pub current_rep: u32,
    pub is_resting: bool,
    pub rest_time_left: u32,
    pub is_rest_timer_active: bool,
}

/// Progress through one exercise.
///
/// Boundary transitions (decrement at 0, increment at the rep ceiling,
/// completing the last set) are no-ops. Every transition returns whether it
/// changed anything.
#[derive(Debug, Clone)]
pub struct Tracker {
    total_sets: u32,
    max_reps: Option<u32>,
    rest_time_secs: u32,
    current_set: u32,
    current_rep: u32,
    phase: Phase,
}

impl Tracker {
    pub fn new(record: &ExerciseRecord) -> Self {
        Self::with_limits(record.sets, record.reps.max, record.rest_time_secs)
    }

    /// A tracker without a rep ceiling (`max_reps: None`) accepts no increments
    pub fn with_limits(total_sets: u32, max_reps: Option<u32>, rest_time_secs: u32) -> Self {
        Self {
            total_sets,
            max_reps,
            rest_time_secs,
            current_set: 1,
            current_rep: 0,
            phase: Phase::Active,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_set(&self) -> u32 {
        self.current_set
    }

    pub fn current_rep(&self) -> u32 {
        self.current_rep
    }

    pub fn total_sets(&self) -> u32 {
        self.total_sets
    }

    pub fn max_reps(&self) -> Option<u32> {
        self.max_reps
    }

    pub fn is_resting(&self) -> bool {
        matches!(self.phase, Phase::Resting { .. })
    }

    pub fn is_rest_timer_active(&self) -> bool {
        matches!(self.phase, Phase::Resting { timer_running: true, .. })
    }

    /// Seconds left in the rest period; pre-armed to the full rest time while active
    pub fn rest_time_left(&self) -> u32 {
        match self.phase {
            Phase::Active => self.rest_time_secs,
            Phase::Resting { time_left, .. } => time_left,
        }
    }

    pub fn state(&self) -> SessionState {
        SessionState {
            current_set: self.current_set,
            current_rep: self.current_rep,
            is_resting: self.is_resting(),
            rest_time_left: self.rest_time_left(),
            is_rest_timer_active: self.is_rest_timer_active(),
        }
    }

    /// Fraction of sets reached, for the progress bar
    pub fn progress(&self) -> f64 {
        if self.total_sets == 0 {
            return 0.0;
        }
        (self.current_set as f64 / self.total_sets as f64).min(1.0)
    }

    pub fn increment_rep(&mut self) -> bool {
        if self.phase != Phase::Active {
            return false;
        }
        match self.max_reps {
            Some(max) if self.current_rep < max => {
                self.current_rep += 1;
                true
            }
            _ => false,
        }
    }

    pub fn decrement_rep(&mut self) -> bool {
        if self.phase != Phase::Active || self.current_rep == 0 {
            return false;
        }
        self.current_rep -= 1;
        true
    }

    /// Finish the current set and start resting. No-op on the last set.
    pub fn complete_set(&mut self) -> bool {
        if self.phase != Phase::Active || self.current_set >= self.total_sets {
            return false;
        }
        self.current_set += 1;
        self.current_rep = 0;
        // An empty rest period expires on the spot
        if self.rest_time_secs > 0 {
            self.phase = Phase::Resting {
                time_left: self.rest_time_secs,
                timer_running: true,
            };
        }
        true
    }

    pub fn toggle_rest_timer(&mut self) -> bool {
        match &mut self.phase {
            Phase::Resting { timer_running, .. } => {
                *timer_running = !*timer_running;
                true
            }
            Phase::Active => false,
        }
    }

    /// One second of rest elapsed. Ignored unless the rest timer is running.
    pub fn tick(&mut self) -> bool {
        let Phase::Resting { time_left, timer_running: true } = &mut self.phase else {
            return false;
        };
        *time_left = time_left.saturating_sub(1);
        if *time_left == 0 {
            self.phase = Phase::Active;
        }
        true
    }

    pub fn reset(&mut self) {
        self.current_set = 1;
        self.current_rep = 0;
        self.phase = Phase::Active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> Tracker {
        Tracker::with_limits(3, Some(15), 30)
    }

    fn active(set: u32, rep: u32) -> SessionState {
        SessionState {
            current_set: set,
            current_rep: rep,
            is_resting: false,
            rest_time_left: 30,
            is_rest_timer_active: false,
        }
    }

    #[test]
    fn test_initial_state() {
        assert_eq!(tracker().state(), active(1, 0));
    }

    #[test]
    fn test_decrement_at_zero_is_noop() {
        let mut t = tracker();
        assert!(!t.decrement_rep());
        assert_eq!(t.state(), active(1, 0));
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut t = tracker();
        assert!(t.increment_rep());
        assert!(t.increment_rep());
        assert!(t.decrement_rep());
        assert_eq!(t.current_rep(), 1);
    }

    #[test]
    fn test_increment_saturates_at_max() {
        let mut t = tracker();
        for _ in 0..15 {
            assert!(t.increment_rep());
        }
        let before = t.state();
        assert!(!t.increment_rep());
        assert_eq!(t.state(), before);
        assert_eq!(t.current_rep(), 15);
    }

    #[test]
    fn test_no_rep_ceiling_blocks_increment() {
        let mut t = Tracker::with_limits(3, None, 30);
        assert!(!t.increment_rep());
        assert_eq!(t.current_rep(), 0);
    }

    #[test]
    fn test_complete_set_enters_rest() {
        let mut t = tracker();
        t.increment_rep();
        t.increment_rep();
        assert!(t.complete_set());
        assert_eq!(t.state(), SessionState {
            current_set: 2,
            current_rep: 0,
            is_resting: true,
            rest_time_left: 30,
            is_rest_timer_active: true,
        });
    }

    #[test]
    fn test_complete_last_set_is_noop() {
        let mut t = Tracker::with_limits(1, Some(10), 30);
        t.increment_rep();
        let before = t.state();
        assert!(!t.complete_set());
        assert_eq!(t.state(), before);
    }

    #[test]
    fn test_rep_ops_ignored_while_resting() {
        let mut t = tracker();
        t.complete_set();
        let before = t.state();
        assert!(!t.increment_rep());
        assert!(!t.decrement_rep());
        assert!(!t.complete_set());
        assert_eq!(t.state(), before);
    }

    #[test]
    fn test_toggle_only_while_resting() {
        let mut t = tracker();
        assert!(!t.toggle_rest_timer());
        assert!(!t.is_rest_timer_active());

        t.complete_set();
        assert!(t.toggle_rest_timer());
        assert!(t.is_resting());
        assert!(!t.is_rest_timer_active());
        assert!(t.toggle_rest_timer());
        assert!(t.is_rest_timer_active());
    }

    #[test]
    fn test_paused_timer_ignores_ticks() {
        let mut t = tracker();
        t.complete_set();
        t.tick();
        t.toggle_rest_timer();
        assert!(!t.tick());
        assert_eq!(t.rest_time_left(), 29);
    }

    #[test]
    fn test_tick_outside_rest_is_noop() {
        let mut t = tracker();
        assert!(!t.tick());
        assert_eq!(t.state(), active(1, 0));
    }

    #[test]
    fn test_countdown_returns_to_active_after_exactly_rest_time() {
        let mut t = tracker();
        t.complete_set();
        for i in 0..29 {
            assert!(t.tick());
            assert!(t.is_resting(), "still resting after {} ticks", i + 1);
        }
        assert!(t.tick());
        assert_eq!(t.state(), active(2, 0));
    }

    #[test]
    fn test_zero_rest_time_skips_rest() {
        let mut t = Tracker::with_limits(3, Some(10), 0);
        assert!(t.complete_set());
        assert_eq!(t.current_set(), 2);
        assert!(!t.is_resting());
        assert!(!t.is_rest_timer_active());
    }

    #[test]
    fn test_reset_from_every_phase() {
        let mut t = tracker();
        t.increment_rep();
        t.reset();
        assert_eq!(t.state(), active(1, 0));

        t.complete_set();
        t.tick();
        t.reset();
        assert_eq!(t.state(), active(1, 0));

        t.complete_set();
        t.toggle_rest_timer();
        t.reset();
        assert_eq!(t.state(), active(1, 0));
    }

    #[test]
    fn test_timer_active_implies_resting() {
        let mut t = tracker();
        let check = |t: &Tracker| {
            let s = t.state();
            assert!(!s.is_rest_timer_active || s.is_resting);
        };
        check(&t);
        t.complete_set();
        check(&t);
        for _ in 0..30 {
            t.tick();
            check(&t);
        }
        t.toggle_rest_timer();
        check(&t);
    }

    #[test]
    fn test_full_session_scenario() {
        let mut t = tracker();
        assert_eq!(t.state(), active(1, 0));

        for _ in 0..15 {
            t.increment_rep();
        }
        assert_eq!(t.current_rep(), 15);
        assert!(!t.increment_rep());

        assert!(t.complete_set());
        assert_eq!(t.phase(), Phase::Resting { time_left: 30, timer_running: true });
        assert_eq!(t.current_set(), 2);
        assert_eq!(t.current_rep(), 0);

        for _ in 0..30 {
            t.tick();
        }
        assert_eq!(t.state(), active(2, 0));
        assert_eq!(t.rest_time_left(), 30);

        assert!(t.complete_set());
        assert_eq!(t.current_set(), 3);
        assert!(t.is_resting());

        for _ in 0..30 {
            t.tick();
        }
        assert!(!t.complete_set());
        assert_eq!(t.state(), active(3, 0));
    }

    #[test]
    fn test_progress() {
        let mut t = tracker();
        assert!((t.progress() - 1.0 / 3.0).abs() < 1e-9);
        t.complete_set();
        assert!((t.progress() - 2.0 / 3.0).abs() < 1e-9);
    }
}
