//! Embedded configuration loading
//!
//! timer.toml is checked by the build script and compiled into the image.
//! It is parsed again at boot with the no_std parser from restclock-core.

use defmt::*;
use restclock_core::config::{parse_config, TimerConfig};

/// Embedded configuration (compiled into firmware)
/// Edit timer.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../timer.toml");

/// Parse and validate the embedded configuration
///
/// Falls back to the built-in defaults if either step fails, so a bad
/// file never leaves the device without a working menu.
pub fn load_config() -> TimerConfig {
    let config = match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to parse timer.toml: {:?}, using defaults", e);
            return TimerConfig::default();
        }
    };

    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            warn!("Invalid timer.toml: {:?}, using defaults", e);
            TimerConfig::default()
        }
    }
}
