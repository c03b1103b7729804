//! Tick task for time-based updates
//!
//! Provides periodic ticks to the controller for:
//! - Countdown completion
//! - Goodbye timeout
//! - Live readout refresh

use core::sync::atomic::Ordering;

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker};
use restclock_core::{Clock, Instant};

use crate::channels::HALTED;
use crate::clock::EmbassyClock;

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u64 = 100;

/// Signal to notify controller of tick
pub static TICK_SIGNAL: Signal<CriticalSectionRawMutex, Instant> = Signal::new();

/// Tick task - sends periodic tick signals with timestamp
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let clock = EmbassyClock;
    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));

    while !HALTED.load(Ordering::Acquire) {
        ticker.next().await;
        TICK_SIGNAL.signal(clock.now());
    }

    info!("Tick task stopped");
}
