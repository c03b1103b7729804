//! Main controller task
//!
//! Owns the screen state machine. Receives button presses and tick
//! signals, and publishes a fresh screen whenever the controller reports
//! a change.

use core::sync::atomic::Ordering;

use defmt::*;
use embassy_futures::select::{select, Either};
use restclock_core::config::TimerConfig;
use restclock_core::{Clock, Controller, Instant};
use restclock_display::Renderer;

use crate::channels::{HALTED, INPUT_CHANNEL, PANEL_OFF, SCREEN_BUFFER, SCREEN_UPDATE};
use crate::clock::EmbassyClock;
use crate::tasks::tick::TICK_SIGNAL;

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task(config: &'static TimerConfig) {
    info!("Controller task started");

    let clock = EmbassyClock;
    let mut controller = Controller::new(config, clock.now());
    let renderer = Renderer::new(config.display);

    render_current_state(&controller, &renderer, clock.now()).await;

    loop {
        match select(INPUT_CHANNEL.receive(), TICK_SIGNAL.wait()).await {
            Either::First(input) => {
                debug!("Input: {:?}", input);
                let before = controller.state();
                let now = clock.now();

                if controller.handle_input(input, now) {
                    if controller.state() != before {
                        info!("State: {:?} -> {:?}", before, controller.state());
                    }
                    render_current_state(&controller, &renderer, now).await;
                }
            }

            Either::Second(now) => {
                let before = controller.state();

                if controller.tick(now) {
                    if controller.state() != before {
                        info!("State: {:?} -> {:?}", before, controller.state());
                    }
                    render_current_state(&controller, &renderer, now).await;
                }
            }
        }

        if controller.is_halted() {
            info!("Controller halted");
            HALTED.store(true, Ordering::Release);
            PANEL_OFF.signal(());
            return;
        }
    }
}

/// Render the current view into the shared screen buffer
async fn render_current_state(controller: &Controller, renderer: &Renderer, now: Instant) {
    let screen = renderer.render(&controller.view(now));

    {
        let mut buffer = SCREEN_BUFFER.lock().await;
        *buffer = screen;
    }

    SCREEN_UPDATE.signal(());
}
