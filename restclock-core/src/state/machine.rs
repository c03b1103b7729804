//! State machine definition
//!
//! Which screen is shown, and which engine is live, is a function of the
//! current state and an event.

use super::events::Event;

/// Screen states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Main menu with item pointer
    #[default]
    Menu,
    /// Rest time picker
    SelectRest,
    /// Countdown running
    Countdown,
    /// Countdown frozen by the user
    Paused,
    /// Workout length (time since power-on)
    TotalTime,
    /// Goodbye message before halting
    Goodbye,
    /// Display blanked, nothing left to do
    Halted,
}

impl State {
    /// Check if this is the final state
    pub fn is_terminal(&self) -> bool {
        matches!(self, State::Halted)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            // Menu transitions
            (Menu, OpenRestPicker) => SelectRest,
            (Menu, OpenWorkoutLength) => TotalTime,
            (Menu, Shutdown) => Goodbye,

            // SelectRest transitions
            (SelectRest, Start) => Countdown,
            (SelectRest, Back) => Menu,

            // Countdown transitions
            (Countdown, Pause) => Paused,
            (Countdown, CountdownFinished) => SelectRest,

            // Paused transitions
            (Paused, Resume) => Countdown,
            (Paused, Abort) => SelectRest,
            // Pausing in the last second completes the countdown
            (Paused, CountdownFinished) => SelectRest,

            // TotalTime transitions
            (TotalTime, Back) => Menu,

            // Goodbye transitions
            (Goodbye, GoodbyeElapsed) => Halted,

            // Default: stay in current state
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_items() {
        assert_eq!(State::Menu.transition(Event::OpenRestPicker), State::SelectRest);
        assert_eq!(State::Menu.transition(Event::OpenWorkoutLength), State::TotalTime);
        assert_eq!(State::Menu.transition(Event::Shutdown), State::Goodbye);
    }

    #[test]
    fn test_countdown_cycle() {
        let state = State::SelectRest.transition(Event::Start);
        assert_eq!(state, State::Countdown);

        let state = state.transition(Event::Pause);
        assert_eq!(state, State::Paused);

        let state = state.transition(Event::Resume);
        assert_eq!(state, State::Countdown);

        let state = state.transition(Event::CountdownFinished);
        assert_eq!(state, State::SelectRest);
    }

    #[test]
    fn test_abort_returns_to_picker() {
        assert_eq!(State::Paused.transition(Event::Abort), State::SelectRest);
        // A running countdown has to be paused first
        assert_eq!(State::Countdown.transition(Event::Abort), State::Countdown);
    }

    #[test]
    fn test_back_returns_to_menu() {
        assert_eq!(State::SelectRest.transition(Event::Back), State::Menu);
        assert_eq!(State::TotalTime.transition(Event::Back), State::Menu);
        assert_eq!(State::Countdown.transition(Event::Back), State::Countdown);
    }

    #[test]
    fn test_shutdown_halts() {
        let state = State::Menu.transition(Event::Shutdown);
        assert_eq!(state.transition(Event::Back), State::Goodbye);
        let state = state.transition(Event::GoodbyeElapsed);
        assert!(state.is_terminal());
    }

    #[test]
    fn test_halted_ignores_everything() {
        let events = [
            Event::OpenRestPicker,
            Event::OpenWorkoutLength,
            Event::Shutdown,
            Event::Back,
            Event::Start,
            Event::Pause,
            Event::Resume,
            Event::Abort,
            Event::CountdownFinished,
            Event::GoodbyeElapsed,
        ];

        for event in events {
            assert_eq!(State::Halted.transition(event), State::Halted);
        }
    }
}
