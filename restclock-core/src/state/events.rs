//! Events that trigger state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Menu events
    /// User opened the rest timer picker
    OpenRestPicker,
    /// User opened the workout length screen
    OpenWorkoutLength,
    /// User chose shutdown
    Shutdown,
    /// User wants to go back
    Back,

    // Countdown control events
    /// User pressed start
    Start,
    /// User pressed pause
    Pause,
    /// User pressed resume
    Resume,
    /// User discarded a paused countdown
    Abort,

    // Timer events
    /// Countdown reached zero
    CountdownFinished,
    /// Goodbye screen has been shown long enough
    GoodbyeElapsed,
}
