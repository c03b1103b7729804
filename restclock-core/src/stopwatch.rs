//! Workout stopwatch
//!
//! Counts up from the instant it was created. There is no upper bound; the
//! long readout widens past 99 hours.

use crate::time::Instant;

/// Elapsed-time counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StopwatchEngine {
    started_at: Instant,
}

impl StopwatchEngine {
    /// Start counting from `now`
    pub const fn new(now: Instant) -> Self {
        Self { started_at: now }
    }

    /// Instant the stopwatch counts from
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Whole seconds since the start, truncated
    pub fn elapsed_seconds(&self, now: Instant) -> u32 {
        now.saturating_duration_since(self.started_at).whole_secs()
    }

    /// Restart counting from `now`
    pub fn reset(&mut self, now: Instant) {
        self.started_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{Clock, ManualClock};

    #[test]
    fn test_counts_whole_seconds() {
        let clock = ManualClock::new();
        clock.advance_millis(1_234);
        let watch = StopwatchEngine::new(clock.now());

        assert_eq!(watch.elapsed_seconds(clock.now()), 0);
        clock.advance_millis(999);
        assert_eq!(watch.elapsed_seconds(clock.now()), 0);
        clock.advance_millis(1);
        assert_eq!(watch.elapsed_seconds(clock.now()), 1);
        clock.advance_millis(3_600_000);
        assert_eq!(watch.elapsed_seconds(clock.now()), 3601);
    }

    #[test]
    fn test_does_not_wrap_at_a_day() {
        let watch = StopwatchEngine::new(Instant::ZERO);
        assert_eq!(watch.elapsed_seconds(Instant::from_secs(90_000)), 90_000);
    }

    #[test]
    fn test_earlier_instant_reads_zero() {
        let watch = StopwatchEngine::new(Instant::from_secs(10));
        assert_eq!(watch.elapsed_seconds(Instant::from_secs(3)), 0);
    }

    #[test]
    fn test_reset() {
        let mut watch = StopwatchEngine::new(Instant::ZERO);
        watch.reset(Instant::from_secs(100));
        assert_eq!(watch.started_at(), Instant::from_secs(100));
        assert_eq!(watch.elapsed_seconds(Instant::from_secs(130)), 30);
    }
}
