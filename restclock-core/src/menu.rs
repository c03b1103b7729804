//! Main menu items

use crate::state::Event;

/// Entries on the main menu, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuItem {
    /// Rest countdown picker
    #[default]
    RestTimer,
    /// Time since power-on
    WorkoutLength,
    /// Say goodbye and halt
    Shutdown,
}

impl MenuItem {
    /// Every item, in display order
    pub const ALL: [MenuItem; 3] = [
        MenuItem::RestTimer,
        MenuItem::WorkoutLength,
        MenuItem::Shutdown,
    ];

    /// Text shown for this item
    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::RestTimer => "Rest Timer",
            MenuItem::WorkoutLength => "Workout Length",
            MenuItem::Shutdown => "Shutdown",
        }
    }

    /// Position in [`MenuItem::ALL`]
    pub fn index(&self) -> usize {
        match self {
            MenuItem::RestTimer => 0,
            MenuItem::WorkoutLength => 1,
            MenuItem::Shutdown => 2,
        }
    }

    /// Item below this one, wrapping to the top
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Item above this one, wrapping to the bottom
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Event raised when this item is selected
    pub fn event(&self) -> Event {
        match self {
            MenuItem::RestTimer => Event::OpenRestPicker,
            MenuItem::WorkoutLength => Event::OpenWorkoutLength,
            MenuItem::Shutdown => Event::Shutdown,
        }
    }
}
