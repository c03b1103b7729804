//! Restclock Hardware Abstraction Layer
//!
//! Hardware abstraction traits implemented by the firmware for its chip.
//! The display crate is written against these so it can be tested on the
//! host with mock pins.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  restclock-firmware (embassy-rp impls)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  restclock-display (button pad)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  restclock-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`] - Button inputs

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

pub use gpio::{ActiveLevel, InputPin};
