//! Monotonic time abstraction
//!
//! The engines never read a clock themselves. The caller samples a
//! [`Clock`] once per loop iteration and passes the resulting [`Instant`]
//! into every command, which keeps all engine logic deterministic.

use core::ops::Add;

/// Milliseconds per second
pub const MILLIS_PER_SECOND: u64 = 1000;

/// A point on a monotonic timeline, in milliseconds since an arbitrary epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Instant {
    millis: u64,
}

impl Instant {
    /// The epoch of the timeline
    pub const ZERO: Self = Self { millis: 0 };

    /// Create an instant from milliseconds since the epoch
    pub const fn from_millis(millis: u64) -> Self {
        Self { millis }
    }

    /// Create an instant from whole seconds since the epoch
    pub const fn from_secs(secs: u64) -> Self {
        Self {
            millis: secs * MILLIS_PER_SECOND,
        }
    }

    /// Milliseconds since the epoch
    pub const fn as_millis(&self) -> u64 {
        self.millis
    }

    /// Time elapsed from `earlier` to `self`, or zero if `earlier` is later
    pub fn saturating_duration_since(&self, earlier: Instant) -> Duration {
        Duration::from_millis(self.millis.saturating_sub(earlier.millis))
    }
}

impl Add<Duration> for Instant {
    type Output = Instant;

    fn add(self, rhs: Duration) -> Instant {
        Instant {
            millis: self.millis.saturating_add(rhs.millis),
        }
    }
}

/// A span of time with millisecond resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Duration {
    millis: u64,
}

impl Duration {
    /// Zero-length span
    pub const ZERO: Self = Self { millis: 0 };

    /// Create a span from milliseconds
    pub const fn from_millis(millis: u64) -> Self {
        Self { millis }
    }

    /// Create a span from whole seconds
    pub const fn from_secs(secs: u64) -> Self {
        Self {
            millis: secs * MILLIS_PER_SECOND,
        }
    }

    /// Length in milliseconds
    pub const fn as_millis(&self) -> u64 {
        self.millis
    }

    /// Whole seconds in this span, truncated toward zero
    ///
    /// Saturates at `u32::MAX`, which is far beyond anything the display
    /// can show.
    pub fn whole_secs(&self) -> u32 {
        let secs = self.millis / MILLIS_PER_SECOND;
        u32::try_from(secs).unwrap_or(u32::MAX)
    }
}

/// Monotonic time source
///
/// Implementations must never go backwards. Wall-clock time that can be
/// adjusted by the system is not a valid implementation.
pub trait Clock {
    /// Current instant
    fn now(&self) -> Instant;
}

/// Clock that only moves when told to
///
/// Used by host tests and simulations to drive the engines through
/// exact instants.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: core::cell::Cell<u64>,
}

impl ManualClock {
    /// Create a clock at the epoch
    pub const fn new() -> Self {
        Self {
            now: core::cell::Cell::new(0),
        }
    }

    /// Move the clock forward
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get().saturating_add(by.as_millis()));
    }

    /// Move the clock forward by a number of milliseconds
    pub fn advance_millis(&self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        Instant::from_millis(self.now.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_secs_truncates() {
        assert_eq!(Duration::from_millis(0).whole_secs(), 0);
        assert_eq!(Duration::from_millis(999).whole_secs(), 0);
        assert_eq!(Duration::from_millis(1000).whole_secs(), 1);
        assert_eq!(Duration::from_millis(59_999).whole_secs(), 59);
    }

    #[test]
    fn test_duration_since_saturates() {
        let early = Instant::from_secs(5);
        let late = Instant::from_secs(8);
        assert_eq!(late.saturating_duration_since(early), Duration::from_secs(3));
        assert_eq!(early.saturating_duration_since(late), Duration::ZERO);
    }

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::new();
        assert_eq!(clock.now(), Instant::ZERO);

        clock.advance(Duration::from_secs(2));
        clock.advance_millis(250);
        assert_eq!(clock.now().as_millis(), 2250);
    }
}
