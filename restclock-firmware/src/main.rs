//! Restclock - Rest Timer Firmware
//!
//! Main firmware binary for an RP2040 board with an SSD1306 OLED and a
//! joystick-and-two-button pad. Offers a rest countdown between sets, a
//! workout length stopwatch, and a shutdown entry that blanks the panel.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::Input;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C1;
use restclock_core::config::TimerConfig;
use restclock_core::Duration;
use restclock_display::{ButtonPad, Ssd1306};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use crate::board::{active_level, idle_pull, ButtonInput, OLED_I2C_FREQUENCY};

mod board;
mod channels;
mod clock;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    I2C1_IRQ => i2c::InterruptHandler<I2C1>;
});

// Configuration must live forever for task references
static TIMER_CONFIG: StaticCell<TimerConfig> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Restclock firmware starting...");

    let p = embassy_rp::init(Default::default());

    let config = TIMER_CONFIG.init(config::load_config());
    info!(
        "Rest budget {}..={} s in {} s steps, default {} s",
        config.budget.min_s, config.budget.max_s, config.budget.step_s, config.budget.default_s
    );

    // Buttons, in InputEvent::ALL order
    let active = active_level(config.ui.buttons_active_low);
    let pull = idle_pull(active);
    let buttons = [
        ButtonInput::new(Input::new(p.PIN_10, pull)),
        ButtonInput::new(Input::new(p.PIN_11, pull)),
        ButtonInput::new(Input::new(p.PIN_12, pull)),
        ButtonInput::new(Input::new(p.PIN_13, pull)),
        ButtonInput::new(Input::new(p.PIN_14, pull)),
        ButtonInput::new(Input::new(p.PIN_15, pull)),
        ButtonInput::new(Input::new(p.PIN_16, pull)),
    ];
    let pad = ButtonPad::new(
        buttons,
        active,
        Duration::from_millis(u64::from(config.ui.debounce_ms)),
    );
    info!("Button pad ready ({:?} active)", active);

    // OLED on I2C1
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = OLED_I2C_FREQUENCY;
    let bus = I2c::new_async(p.I2C1, p.PIN_3, p.PIN_2, Irqs, i2c_config);
    let panel = Ssd1306::new(bus);

    spawner.spawn(tasks::display_task(panel)).unwrap();
    spawner.spawn(tasks::tick_task()).unwrap();
    spawner.spawn(tasks::input_task(pad)).unwrap();
    spawner.spawn(tasks::controller_task(config)).unwrap();

    info!("All tasks spawned");
}
