//! Countdown engine
//!
//! Explicit state machine for the rest countdown. While running, the
//! deadline is authoritative; while paused, the captured remaining seconds
//! are. Converting between the two never adds or drops a second, so time
//! spent paused is excluded from the countdown.
//!
//! Out-of-state commands (`pause` when not running, `resume` when not
//! paused, `abort` when idle or completed, `start` when already active) are
//! tolerated and leave the engine unchanged.

use crate::time::{Duration, Instant};

/// Countdown errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CountdownError {
    /// A countdown must last at least one second
    InvalidDuration,
}

/// Externally visible countdown phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CountdownPhase {
    /// No countdown configured
    Idle,
    /// Counting toward the deadline
    Running,
    /// Frozen at a captured remaining time
    Paused,
    /// Reached zero
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CountdownState {
    Idle,
    Running { deadline: Instant },
    Paused { remaining_s: u32 },
    Completed,
}

/// Rest countdown
#[derive(Debug, Clone)]
pub struct CountdownEngine {
    state: CountdownState,
    /// Remaining seconds as of the last command or tick
    remaining_s: u32,
    /// Last value handed out by `tick`, for render debouncing
    last_emitted: Option<u32>,
}

impl Default for CountdownEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CountdownEngine {
    /// Create an idle engine
    pub const fn new() -> Self {
        Self {
            state: CountdownState::Idle,
            remaining_s: 0,
            last_emitted: None,
        }
    }

    /// Current phase
    pub fn phase(&self) -> CountdownPhase {
        match self.state {
            CountdownState::Idle => CountdownPhase::Idle,
            CountdownState::Running { .. } => CountdownPhase::Running,
            CountdownState::Paused { .. } => CountdownPhase::Paused,
            CountdownState::Completed => CountdownPhase::Completed,
        }
    }

    /// Remaining seconds as of the last command or tick
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_s
    }

    /// Check if the countdown reached zero
    pub fn is_completed(&self) -> bool {
        self.state == CountdownState::Completed
    }

    /// Check if the countdown is running
    pub fn is_running(&self) -> bool {
        matches!(self.state, CountdownState::Running { .. })
    }

    /// Check if the countdown is paused
    pub fn is_paused(&self) -> bool {
        matches!(self.state, CountdownState::Paused { .. })
    }

    /// Check if a countdown is in progress (running or paused)
    pub fn is_active(&self) -> bool {
        self.is_running() || self.is_paused()
    }

    /// Start a countdown of `duration_s` seconds from `now`
    ///
    /// Valid from Idle or Completed. Calling it while a countdown is in
    /// progress leaves that countdown untouched.
    pub fn start(&mut self, duration_s: u32, now: Instant) -> Result<(), CountdownError> {
        if duration_s == 0 {
            return Err(CountdownError::InvalidDuration);
        }
        if self.is_active() {
            return Ok(());
        }

        self.state = CountdownState::Running {
            deadline: now + Duration::from_secs(duration_s as u64),
        };
        self.remaining_s = duration_s;
        self.last_emitted = None;
        Ok(())
    }

    /// Advance the countdown to `now`
    ///
    /// Returns the remaining seconds when there is something new to show:
    /// - running: only when the value changed since the last emission
    /// - paused: the frozen value on every call
    /// - completed: `0`, exactly once
    /// - idle: never
    pub fn tick(&mut self, now: Instant) -> Option<u32> {
        match self.state {
            CountdownState::Idle => None,
            CountdownState::Running { deadline } => {
                let remaining = seconds_until(deadline, now);
                self.remaining_s = remaining;
                if remaining == 0 {
                    self.state = CountdownState::Completed;
                }
                self.emit_if_changed(remaining)
            }
            CountdownState::Paused { remaining_s } => {
                self.last_emitted = Some(remaining_s);
                Some(remaining_s)
            }
            CountdownState::Completed => self.emit_if_changed(0),
        }
    }

    /// Freeze the countdown at the current remaining time
    ///
    /// If less than a second is left, the countdown completes instead.
    pub fn pause(&mut self, now: Instant) {
        if let CountdownState::Running { deadline } = self.state {
            let remaining = seconds_until(deadline, now);
            self.remaining_s = remaining;
            self.state = if remaining == 0 {
                CountdownState::Completed
            } else {
                CountdownState::Paused {
                    remaining_s: remaining,
                }
            };
        }
    }

    /// Continue a paused countdown from `now`
    pub fn resume(&mut self, now: Instant) {
        if let CountdownState::Paused { remaining_s } = self.state {
            self.state = CountdownState::Running {
                deadline: now + Duration::from_secs(remaining_s as u64),
            };
            self.remaining_s = remaining_s;
        }
    }

    /// Discard a running or paused countdown
    pub fn abort(&mut self) {
        if self.is_active() {
            self.state = CountdownState::Idle;
            self.remaining_s = 0;
            self.last_emitted = None;
        }
    }

    fn emit_if_changed(&mut self, value: u32) -> Option<u32> {
        if self.last_emitted == Some(value) {
            return None;
        }
        self.last_emitted = Some(value);
        Some(value)
    }
}

/// Whole seconds from `now` until `deadline`, truncated, zero once passed
fn seconds_until(deadline: Instant, now: Instant) -> u32 {
    deadline.saturating_duration_since(now).whole_secs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(millis: u64) -> Instant {
        Instant::from_millis(millis)
    }

    #[test]
    fn test_start_reports_full_duration() {
        for d in (60..=600).step_by(30) {
            let mut engine = CountdownEngine::new();
            engine.start(d, at(5_000)).unwrap();
            assert_eq!(engine.remaining_seconds(), d);
            assert_eq!(engine.tick(at(5_000)), Some(d));
            assert_eq!(engine.phase(), CountdownPhase::Running);
        }
    }

    #[test]
    fn test_start_rejects_zero() {
        let mut engine = CountdownEngine::new();
        assert_eq!(engine.start(0, at(0)), Err(CountdownError::InvalidDuration));
        assert_eq!(engine.phase(), CountdownPhase::Idle);
    }

    #[test]
    fn test_tick_truncates_and_debounces() {
        let mut engine = CountdownEngine::new();
        engine.start(60, at(0)).unwrap();

        assert_eq!(engine.tick(at(0)), Some(60));
        assert_eq!(engine.tick(at(0)), None);
        // Any fraction of a second drops the whole-second reading
        assert_eq!(engine.tick(at(100)), Some(59));
        assert_eq!(engine.tick(at(500)), None);
        assert_eq!(engine.tick(at(1_000)), None);
        assert_eq!(engine.tick(at(1_001)), Some(58));
        assert_eq!(engine.remaining_seconds(), 58);
    }

    #[test]
    fn test_tick_skips_missed_seconds() {
        let mut engine = CountdownEngine::new();
        engine.start(60, at(0)).unwrap();
        engine.tick(at(0));

        assert_eq!(engine.tick(at(10_500)), Some(49));
    }

    #[test]
    fn test_completes_once() {
        let mut engine = CountdownEngine::new();
        engine.start(60, at(0)).unwrap();
        engine.tick(at(0));

        assert_eq!(engine.tick(at(59_000)), Some(1));
        assert_eq!(engine.tick(at(59_001)), Some(0));
        assert!(engine.is_completed());
        assert_eq!(engine.remaining_seconds(), 0);

        assert_eq!(engine.tick(at(59_500)), None);
        assert_eq!(engine.tick(at(600_000)), None);
        assert_eq!(engine.remaining_seconds(), 0);
    }

    #[test]
    fn test_late_tick_completes_directly() {
        let mut engine = CountdownEngine::new();
        engine.start(60, at(0)).unwrap();

        assert_eq!(engine.tick(at(3_600_000)), Some(0));
        assert!(engine.is_completed());
        assert_eq!(engine.tick(at(3_600_001)), None);
    }

    #[test]
    fn test_pause_resume_excludes_paused_time() {
        let mut engine = CountdownEngine::new();
        engine.start(90, at(0)).unwrap();
        assert_eq!(engine.tick(at(10_500)), Some(79));

        engine.pause(at(10_500));
        assert!(engine.is_paused());
        assert_eq!(engine.remaining_seconds(), 79);

        // Paused ticks keep handing out the frozen value
        assert_eq!(engine.tick(at(20_000)), Some(79));
        assert_eq!(engine.tick(at(25_000)), Some(79));

        engine.resume(at(30_000));
        assert!(engine.is_running());
        assert_eq!(engine.remaining_seconds(), 79);
        assert_eq!(engine.tick(at(30_000)), None);
        assert_eq!(engine.tick(at(30_001)), Some(78));
        assert_eq!(engine.tick(at(109_000)), Some(0));
        assert!(engine.is_completed());
    }

    #[test]
    fn test_immediate_pause_resume_keeps_remaining() {
        let mut engine = CountdownEngine::new();
        engine.start(120, at(1_000)).unwrap();
        engine.tick(at(4_000));
        let before = engine.remaining_seconds();

        engine.pause(at(4_000));
        engine.resume(at(4_000));
        assert_eq!(engine.remaining_seconds(), before);
        assert_eq!(engine.tick(at(4_000)), None);
    }

    #[test]
    fn test_pause_in_last_second_completes() {
        let mut engine = CountdownEngine::new();
        engine.start(60, at(0)).unwrap();

        engine.pause(at(59_500));
        assert!(engine.is_completed());
        assert_eq!(engine.tick(at(59_600)), Some(0));
        assert_eq!(engine.tick(at(59_700)), None);
    }

    #[test]
    fn test_abort_returns_to_idle() {
        let mut engine = CountdownEngine::new();
        engine.start(60, at(0)).unwrap();
        engine.abort();
        assert_eq!(engine.phase(), CountdownPhase::Idle);
        assert_eq!(engine.tick(at(1_000)), None);

        engine.start(60, at(0)).unwrap();
        engine.pause(at(1_000));
        engine.abort();
        assert_eq!(engine.phase(), CountdownPhase::Idle);
        assert_eq!(engine.remaining_seconds(), 0);
    }

    #[test]
    fn test_out_of_state_commands_are_ignored() {
        let mut engine = CountdownEngine::new();
        engine.pause(at(0));
        engine.resume(at(0));
        engine.abort();
        assert_eq!(engine.phase(), CountdownPhase::Idle);

        engine.start(60, at(0)).unwrap();
        engine.resume(at(5_000));
        assert_eq!(engine.tick(at(5_000)), Some(55));

        engine.tick(at(60_000));
        assert!(engine.is_completed());
        engine.pause(at(61_000));
        engine.abort();
        assert!(engine.is_completed());
    }

    #[test]
    fn test_start_while_active_keeps_countdown() {
        let mut engine = CountdownEngine::new();
        engine.start(60, at(0)).unwrap();
        engine.tick(at(10_000));

        assert_eq!(engine.start(600, at(10_000)), Ok(()));
        assert_eq!(engine.remaining_seconds(), 50);

        engine.pause(at(10_000));
        assert_eq!(engine.start(600, at(10_000)), Ok(()));
        assert!(engine.is_paused());
    }

    #[test]
    fn test_restart_after_completion() {
        let mut engine = CountdownEngine::new();
        engine.start(60, at(0)).unwrap();
        engine.tick(at(60_000));
        assert!(engine.is_completed());

        engine.start(90, at(70_000)).unwrap();
        assert!(engine.is_running());
        assert_eq!(engine.tick(at(70_000)), Some(90));
    }
}
