//! Timer configuration
//!
//! Types with defaults and validation, plus a small TOML reader for the
//! firmware's embedded `timer.toml`.

pub mod parse;
pub mod types;

pub use parse::{parse_config, ParseError};
pub use types::*;
