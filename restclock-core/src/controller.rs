//! Controller coordinating the screen state machine and the engines
//!
//! The controller:
//! - Maps button presses to state machine events for the current screen
//! - Commands the countdown engine and the rest budget
//! - Watches the countdown and goodbye timers
//! - Describes what should be on screen as a [`View`]
//!
//! It never reads a clock. Every call takes the current [`Instant`].

use crate::budget::TimeBudget;
use crate::config::TimerConfig;
use crate::countdown::CountdownEngine;
use crate::input::InputEvent;
use crate::menu::MenuItem;
use crate::state::{Event, State};
use crate::stopwatch::StopwatchEngine;
use crate::time::{Duration, Instant};

/// What the display should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum View {
    /// Main menu with the pointer on `selected`
    Menu { selected: MenuItem },
    /// Rest time picker
    SelectRest { budget_s: u32 },
    /// Countdown readout
    Countdown { remaining_s: u32, paused: bool },
    /// Workout length readout
    TotalTime { elapsed_s: u32 },
    /// Goodbye message
    Goodbye,
    /// Panel off
    Blank,
}

/// Rest timer controller
#[derive(Debug, Clone)]
pub struct Controller {
    /// Current screen
    state: State,
    /// Menu pointer
    selected: MenuItem,
    /// Rest length for the next countdown
    budget: TimeBudget,
    /// Rest countdown
    countdown: CountdownEngine,
    /// Time since power-on
    stopwatch: StopwatchEngine,
    /// Last stopwatch second shown
    last_elapsed_s: Option<u32>,
    /// How long the goodbye screen stays up
    goodbye_for: Duration,
    /// When the goodbye screen gives way to a blank panel
    goodbye_until: Option<Instant>,
}

impl Controller {
    /// Create a controller on the main menu, with the stopwatch starting at `now`
    pub fn new(config: &TimerConfig, now: Instant) -> Self {
        Self {
            state: State::Menu,
            selected: MenuItem::default(),
            budget: TimeBudget::new(config.budget),
            countdown: CountdownEngine::new(),
            stopwatch: StopwatchEngine::new(now),
            last_elapsed_s: None,
            goodbye_for: Duration::from_millis(config.ui.goodbye_ms as u64),
            goodbye_until: None,
        }
    }

    /// Get current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Get the menu pointer
    pub fn selected(&self) -> MenuItem {
        self.selected
    }

    /// Get the rest budget
    pub fn budget(&self) -> &TimeBudget {
        &self.budget
    }

    /// Get the countdown engine
    pub fn countdown(&self) -> &CountdownEngine {
        &self.countdown
    }

    /// Check if the controller reached its final state
    pub fn is_halted(&self) -> bool {
        self.state.is_terminal()
    }

    /// Process a button press
    ///
    /// Returns `true` if the screen needs a redraw.
    pub fn handle_input(&mut self, input: InputEvent, now: Instant) -> bool {
        match self.state {
            State::Menu => self.handle_menu_input(input, now),
            State::SelectRest => self.handle_picker_input(input, now),
            State::Countdown => match input {
                InputEvent::B => {
                    self.countdown.pause(now);
                    if self.countdown.is_completed() {
                        self.transition(Event::CountdownFinished);
                    } else {
                        self.transition(Event::Pause);
                    }
                    true
                }
                _ => false,
            },
            State::Paused => match input {
                InputEvent::A => {
                    self.countdown.resume(now);
                    self.transition(Event::Resume);
                    true
                }
                InputEvent::B => {
                    self.countdown.abort();
                    self.transition(Event::Abort);
                    true
                }
                _ => false,
            },
            State::TotalTime => match input {
                InputEvent::B => {
                    self.transition(Event::Back);
                    true
                }
                _ => false,
            },
            State::Goodbye | State::Halted => false,
        }
    }

    fn handle_menu_input(&mut self, input: InputEvent, now: Instant) -> bool {
        match input {
            InputEvent::Up => {
                self.selected = self.selected.previous();
                true
            }
            InputEvent::Down => {
                self.selected = self.selected.next();
                true
            }
            InputEvent::Center => {
                let event = self.selected.event();
                match event {
                    Event::OpenWorkoutLength => self.last_elapsed_s = None,
                    Event::Shutdown => self.goodbye_until = Some(now + self.goodbye_for),
                    _ => {}
                }
                self.transition(event);
                true
            }
            _ => false,
        }
    }

    fn handle_picker_input(&mut self, input: InputEvent, now: Instant) -> bool {
        match input {
            InputEvent::Left => self.budget.decrement(),
            InputEvent::Right => self.budget.increment(),
            InputEvent::A => match self.countdown.start(self.budget.seconds(), now) {
                Ok(()) => {
                    self.transition(Event::Start);
                    true
                }
                // Budget bounds keep the duration non-zero
                Err(_) => false,
            },
            InputEvent::B => {
                self.transition(Event::Back);
                true
            }
            _ => false,
        }
    }

    /// Periodic update
    ///
    /// Call regularly (every 100 ms in the firmware) with the current
    /// instant. Returns `true` if the screen needs a redraw.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.state {
            State::Countdown | State::Paused => {
                if self.countdown.tick(now).is_none() {
                    return false;
                }
                if self.countdown.is_completed() {
                    self.transition(Event::CountdownFinished);
                }
                true
            }
            State::TotalTime => {
                let elapsed = self.stopwatch.elapsed_seconds(now);
                let changed = self.last_elapsed_s != Some(elapsed);
                self.last_elapsed_s = Some(elapsed);
                changed
            }
            State::Goodbye => match self.goodbye_until {
                Some(until) if now < until => false,
                _ => {
                    self.goodbye_until = None;
                    self.transition(Event::GoodbyeElapsed);
                    true
                }
            },
            State::Menu | State::SelectRest | State::Halted => false,
        }
    }

    /// Describe the current screen
    pub fn view(&self, now: Instant) -> View {
        match self.state {
            State::Menu => View::Menu {
                selected: self.selected,
            },
            State::SelectRest => View::SelectRest {
                budget_s: self.budget.seconds(),
            },
            State::Countdown | State::Paused => View::Countdown {
                remaining_s: self.countdown.remaining_seconds(),
                paused: self.state == State::Paused,
            },
            State::TotalTime => View::TotalTime {
                elapsed_s: self.stopwatch.elapsed_seconds(now),
            },
            State::Goodbye => View::Goodbye,
            State::Halted => View::Blank,
        }
    }

    /// Perform state transition
    fn transition(&mut self, event: Event) {
        self.state = self.state.transition(event);
    }
}
