//! Button polling task
//!
//! Samples the pad at a fixed rate and forwards each debounced press to
//! the controller.

use core::sync::atomic::Ordering;

use defmt::*;
use embassy_time::{Duration, Ticker};
use restclock_core::Clock;
use restclock_display::{ButtonPad, InputSource};

use crate::board::ButtonInput;
use crate::channels::{HALTED, INPUT_CHANNEL};
use crate::clock::EmbassyClock;

/// Sampling interval in milliseconds
pub const POLL_INTERVAL_MS: u64 = 5;

/// Input task - polls the buttons until the controller halts
#[embassy_executor::task]
pub async fn input_task(mut pad: ButtonPad<ButtonInput>) {
    info!("Input task started");

    let clock = EmbassyClock;
    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));

    while !HALTED.load(Ordering::Acquire) {
        ticker.next().await;

        for event in pad.poll(clock.now()) {
            trace!("Press: {:?}", event);
            if INPUT_CHANNEL.try_send(event).is_err() {
                warn!("Input channel full, dropping {:?}", event);
            }
        }
    }

    info!("Input task stopped");
}
