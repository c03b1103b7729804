//! Display, panel driver and button input for Restclock
//!
//! This crate provides:
//! - `DisplayBackend` / `GraphicsDisplayBackend` traits and the
//!   `SegmentSink` adapter the segment renderer draws through
//! - `FrameBuffer`, a 128x64 page buffer drawable with embedded-graphics
//! - `Ssd1306`, an async I2C driver that pushes the frame buffer to the panel
//! - `Screen` and `Renderer`, turning controller views into screen content
//! - `ButtonPad`, a debounced seven-button `InputSource`
//!
//! # Architecture
//!
//! The controller in `restclock-core` describes what to show as a `View`.
//! The `Renderer` turns that into a `Screen`, which is drawn onto any
//! graphics backend. The firmware draws into the SSD1306 frame buffer and
//! flushes it over I2C.

#![cfg_attr(not(test), no_std)]

pub mod backend;
pub mod framebuffer;
pub mod input;
pub mod renderer;
pub mod screen;
pub mod ssd1306;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError, GraphicsDisplayBackend, SegmentSink};
pub use framebuffer::FrameBuffer;
pub use input::{ButtonPad, InputSource, BUTTON_COUNT};
pub use renderer::Renderer;
pub use screen::Screen;
pub use ssd1306::Ssd1306;
