//! Monotonic clock backed by the embassy time driver

use restclock_core::{Clock, Instant};

/// Clock reading the RP2040 timer through embassy-time
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now(&self) -> Instant {
        Instant::from_millis(embassy_time::Instant::now().as_millis())
    }
}
