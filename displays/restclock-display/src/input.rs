//! Button pad input
//!
//! Seven push buttons (five-way stick plus A and B) read through
//! [`InputPin`]s. Each button is debounced on its own; a press is reported
//! once, when the pin has read active for the whole debounce window.
//! Holding a button does not repeat.

use heapless::Vec;
use restclock_core::input::InputEvent;
use restclock_core::time::{Duration, Instant};
use restclock_hal::{ActiveLevel, InputPin};

/// Number of buttons on the pad
pub const BUTTON_COUNT: usize = InputEvent::ALL.len();

/// Events produced by one poll
pub type InputEvents = Vec<InputEvent, BUTTON_COUNT>;

/// Source of user input events
pub trait InputSource {
    /// Sample the inputs at `now` and return new presses
    fn poll(&mut self, now: Instant) -> InputEvents;
}

/// Debounce state for one button
#[derive(Debug, Clone, Copy, Default)]
struct Debouncer {
    /// Debounced level
    stable: bool,
    /// Most recent raw level
    candidate: bool,
    /// When the raw level last changed
    since: Instant,
}

impl Debouncer {
    /// Feed a raw sample; returns `true` on a debounced press
    fn update(&mut self, raw: bool, now: Instant, window: Duration) -> bool {
        if raw != self.candidate {
            self.candidate = raw;
            self.since = now;
        }

        if self.candidate != self.stable && now.saturating_duration_since(self.since) >= window {
            self.stable = self.candidate;
            return self.stable;
        }

        false
    }
}

/// Polled, debounced button pad
///
/// Pins are given in [`InputEvent::ALL`] order: up, down, left, right,
/// center, A, B.
pub struct ButtonPad<P> {
    pins: [P; BUTTON_COUNT],
    active: ActiveLevel,
    window: Duration,
    state: [Debouncer; BUTTON_COUNT],
}

impl<P: InputPin> ButtonPad<P> {
    /// Create a pad
    pub fn new(pins: [P; BUTTON_COUNT], active: ActiveLevel, window: Duration) -> Self {
        Self {
            pins,
            active,
            window,
            state: [Debouncer::default(); BUTTON_COUNT],
        }
    }
}

impl<P: InputPin> InputSource for ButtonPad<P> {
    fn poll(&mut self, now: Instant) -> InputEvents {
        let mut events = InputEvents::new();

        for ((pin, state), event) in self
            .pins
            .iter()
            .zip(self.state.iter_mut())
            .zip(InputEvent::ALL)
        {
            let raw = self.active.is_active(pin);
            if state.update(raw, now, self.window) {
                // Capacity equals the number of buttons
                let _ = events.push(event);
            }
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    /// Pull-up wired button: reads high until pressed
    struct MockPin<'a>(&'a Cell<bool>);

    impl InputPin for MockPin<'_> {
        fn is_high(&self) -> bool {
            !self.0.get()
        }
    }

    fn pad(pressed: &[Cell<bool>; BUTTON_COUNT]) -> ButtonPad<MockPin<'_>> {
        ButtonPad::new(
            core::array::from_fn(|i| MockPin(&pressed[i])),
            ActiveLevel::Low,
            Duration::from_millis(20),
        )
    }

    fn at(millis: u64) -> Instant {
        Instant::from_millis(millis)
    }

    #[test]
    fn test_press_reported_after_window() {
        let pressed: [Cell<bool>; BUTTON_COUNT] = Default::default();
        let mut pad = pad(&pressed);

        assert!(pad.poll(at(0)).is_empty());
        pressed[5].set(true);
        assert!(pad.poll(at(5)).is_empty());
        assert!(pad.poll(at(20)).is_empty());
        assert_eq!(pad.poll(at(25)).as_slice(), &[InputEvent::A]);

        // Held: no repeat
        assert!(pad.poll(at(500)).is_empty());
    }

    #[test]
    fn test_bounce_is_ignored() {
        let pressed: [Cell<bool>; BUTTON_COUNT] = Default::default();
        let mut pad = pad(&pressed);

        for t in (0..40).step_by(5) {
            pressed[0].set(t % 10 == 0);
            assert!(pad.poll(at(t)).is_empty());
        }

        pressed[0].set(true);
        pad.poll(at(40));
        assert_eq!(pad.poll(at(60)).as_slice(), &[InputEvent::Up]);
    }

    #[test]
    fn test_release_then_press_again() {
        let pressed: [Cell<bool>; BUTTON_COUNT] = Default::default();
        let mut pad = pad(&pressed);

        pressed[6].set(true);
        pad.poll(at(0));
        assert_eq!(pad.poll(at(20)).as_slice(), &[InputEvent::B]);

        pressed[6].set(false);
        pad.poll(at(30));
        assert!(pad.poll(at(50)).is_empty());

        pressed[6].set(true);
        pad.poll(at(60));
        assert_eq!(pad.poll(at(80)).as_slice(), &[InputEvent::B]);
    }

    #[test]
    fn test_simultaneous_presses() {
        let pressed: [Cell<bool>; BUTTON_COUNT] = Default::default();
        let mut pad = pad(&pressed);

        pressed[2].set(true);
        pressed[4].set(true);
        pad.poll(at(0));
        assert_eq!(
            pad.poll(at(20)).as_slice(),
            &[InputEvent::Left, InputEvent::Center]
        );
    }

    #[test]
    fn test_active_high_wiring() {
        let pressed: [Cell<bool>; BUTTON_COUNT] = Default::default();
        let mut pad = ButtonPad::new(
            core::array::from_fn(|i| MockPin(&pressed[i])),
            ActiveLevel::High,
            Duration::from_millis(20),
        );

        // Unpressed pull-up pins read high, which is "active" here
        pad.poll(at(0));
        assert_eq!(pad.poll(at(20)).len(), BUTTON_COUNT);
    }
}
