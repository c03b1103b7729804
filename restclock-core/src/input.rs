//! Button input events
//!
//! One event per debounced press on the joystick-and-two-button pad.

/// Input event values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Joystick pushed up
    Up,
    /// Joystick pushed down
    Down,
    /// Joystick pushed left
    Left,
    /// Joystick pushed right
    Right,
    /// Joystick pressed in
    Center,
    /// Button A (start/resume)
    A,
    /// Button B (back/pause)
    B,
}

impl InputEvent {
    /// Every event, in pad wiring order
    pub const ALL: [InputEvent; 7] = [
        InputEvent::Up,
        InputEvent::Down,
        InputEvent::Left,
        InputEvent::Right,
        InputEvent::Center,
        InputEvent::A,
        InputEvent::B,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_distinct() {
        for (i, a) in InputEvent::ALL.iter().enumerate() {
            for b in InputEvent::ALL.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
