//! GPIO pin abstractions
//!
//! Provides the digital input trait the button pad is read through.

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

impl<T: InputPin + ?Sized> InputPin for &T {
    fn is_high(&self) -> bool {
        (**self).is_high()
    }
}

/// Logic level a pressed button drives its pin to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    /// Pressed reads low (pull-up wiring)
    #[default]
    Low,
    /// Pressed reads high (pull-down wiring)
    High,
}

impl ActiveLevel {
    /// Check whether `pin` currently reads as active
    pub fn is_active<P: InputPin + ?Sized>(&self, pin: &P) -> bool {
        match self {
            ActiveLevel::Low => pin.is_low(),
            ActiveLevel::High => pin.is_high(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct MockPin(Cell<bool>);

    impl InputPin for MockPin {
        fn is_high(&self) -> bool {
            self.0.get()
        }
    }

    #[test]
    fn test_active_level() {
        let pin = MockPin(Cell::new(true));
        assert!(!ActiveLevel::Low.is_active(&pin));
        assert!(ActiveLevel::High.is_active(&pin));

        pin.0.set(false);
        assert!(ActiveLevel::Low.is_active(&pin));
        assert!(!ActiveLevel::High.is_active(&&pin));
    }
}
