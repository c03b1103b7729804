//! Board wiring
//!
//! Pin assignments for the joystick-and-two-button pad and the OLED bus.
//!
//! | Signal       | Pin  |
//! |--------------|------|
//! | Up           | GP10 |
//! | Down         | GP11 |
//! | Left         | GP12 |
//! | Right        | GP13 |
//! | Center       | GP14 |
//! | A            | GP15 |
//! | B            | GP16 |
//! | OLED SDA     | GP2  |
//! | OLED SCL     | GP3  |

use embassy_rp::gpio::{Input, Pull};
use restclock_hal::{ActiveLevel, InputPin};

/// I2C clock for the SSD1306 (fast mode)
pub const OLED_I2C_FREQUENCY: u32 = 400_000;

/// A button line read through an embassy GPIO input
pub struct ButtonInput {
    pin: Input<'static>,
}

impl ButtonInput {
    /// Wrap a configured input pin
    pub fn new(pin: Input<'static>) -> Self {
        Self { pin }
    }
}

impl InputPin for ButtonInput {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

/// Pull resistor that keeps an idle button inactive
pub fn idle_pull(active: ActiveLevel) -> Pull {
    match active {
        ActiveLevel::Low => Pull::Up,
        ActiveLevel::High => Pull::Down,
    }
}

/// Active level for the configured wiring
pub fn active_level(active_low: bool) -> ActiveLevel {
    if active_low {
        ActiveLevel::Low
    } else {
        ActiveLevel::High
    }
}
