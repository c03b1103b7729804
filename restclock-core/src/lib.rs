//! Board-agnostic core logic for the rest timer firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Segment glyph table and renderer
//! - Duration formatting
//! - Countdown and stopwatch engines
//! - Screen state machine and controller
//! - Configuration types and parser
//! - Hardware abstraction traits (frame sink)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod budget;
pub mod config;
pub mod controller;
pub mod countdown;
pub mod format;
pub mod glyph;
pub mod input;
pub mod menu;
pub mod segment;
pub mod state;
pub mod stopwatch;
pub mod time;
pub mod traits;

pub use controller::{Controller, View};
pub use countdown::{CountdownEngine, CountdownError, CountdownPhase};
pub use format::{format_long, format_short};
pub use glyph::RenderError;
pub use input::InputEvent;
pub use segment::{render, RenderGrid, RenderScale};
pub use stopwatch::StopwatchEngine;
pub use time::{Clock, Duration, Instant};
