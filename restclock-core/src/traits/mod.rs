//! Hardware abstraction traits
//!
//! These traits define the interface between the timer logic and
//! hardware-specific output implementations.

pub mod display;

pub use display::FrameSink;
