//! Screen state machine
//!
//! Defines which screen is shown and how inputs move between screens.
//! The state machine is explicit, finite, and deterministic.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::State;
