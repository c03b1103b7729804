//! Configuration type definitions
//!
//! These types describe the timer configuration. The firmware embeds a
//! `timer.toml` and parses it at boot; anything missing keeps its default.

use crate::segment::RenderScale;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Budget minimum is zero
    ZeroMinimum,
    /// Budget step is zero
    ZeroStep,
    /// Budget minimum is above the maximum
    EmptyRange,
    /// Default budget lies outside `[min, max]`
    DefaultOutOfRange,
    /// A render scale has a zero pitch or cell size
    ZeroScale,
    /// A render scale cell is larger than its pitch
    OverlappingCells,
    /// A render scale pitch, gap or origin exceeds [`MAX_SCALE_PX`]
    ScaleTooLarge,
}

/// Largest pitch, glyph gap or origin offset a render scale may use
///
/// One panel width. Anything larger draws every glyph off screen.
pub const MAX_SCALE_PX: u32 = 128;

/// Rest budget bounds, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BudgetConfig {
    /// Shortest selectable rest
    pub min_s: u32,
    /// Longest selectable rest
    pub max_s: u32,
    /// Left/right adjustment step
    pub step_s: u32,
    /// Budget selected at power-on
    pub default_s: u32,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            min_s: 60,
            max_s: 600,
            step_s: 30,
            default_s: 60,
        }
    }
}

impl BudgetConfig {
    /// Validate bounds
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_s == 0 {
            return Err(ConfigError::ZeroMinimum);
        }
        if self.step_s == 0 {
            return Err(ConfigError::ZeroStep);
        }
        if self.min_s > self.max_s {
            return Err(ConfigError::EmptyRange);
        }
        if self.default_s < self.min_s || self.default_s > self.max_s {
            return Err(ConfigError::DefaultOutOfRange);
        }
        Ok(())
    }
}

/// Segment readout geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Scale for the `mm:ss` countdown readout
    pub short: RenderScale,
    /// Scale for the `0h:mm:ss` session readout
    pub long: RenderScale,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            short: RenderScale::SHORT,
            long: RenderScale::LONG,
        }
    }
}

impl DisplayConfig {
    /// Validate both scales
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_scale(&self.short)?;
        validate_scale(&self.long)
    }
}

fn validate_scale(scale: &RenderScale) -> Result<(), ConfigError> {
    if scale.col_pitch == 0
        || scale.row_pitch == 0
        || scale.cell_width == 0
        || scale.cell_height == 0
    {
        return Err(ConfigError::ZeroScale);
    }
    if scale.cell_width > scale.col_pitch || scale.cell_height > scale.row_pitch {
        return Err(ConfigError::OverlappingCells);
    }
    if scale.col_pitch > MAX_SCALE_PX
        || scale.row_pitch > MAX_SCALE_PX
        || scale.glyph_gap > MAX_SCALE_PX
        || scale.origin_x.unsigned_abs() > MAX_SCALE_PX
        || scale.origin_y.unsigned_abs() > MAX_SCALE_PX
    {
        return Err(ConfigError::ScaleTooLarge);
    }
    Ok(())
}

/// UI timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UiConfig {
    /// How long the goodbye screen stays up before halting (ms)
    pub goodbye_ms: u32,
    /// Button debounce window (ms)
    pub debounce_ms: u32,
    /// Buttons pull their line low when pressed
    pub buttons_active_low: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            goodbye_ms: 3000,
            debounce_ms: 20,
            buttons_active_low: true,
        }
    }
}

/// Complete timer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimerConfig {
    /// Rest budget bounds
    pub budget: BudgetConfig,
    /// Readout geometry
    pub display: DisplayConfig,
    /// UI timing
    pub ui: UiConfig,
}

impl TimerConfig {
    /// Validate every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.budget.validate()?;
        self.display.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = TimerConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.budget.min_s, 60);
        assert_eq!(config.budget.max_s, 600);
        assert_eq!(config.budget.step_s, 30);
        assert_eq!(config.ui.goodbye_ms, 3000);
    }

    #[test]
    fn test_budget_validation() {
        let base = BudgetConfig::default();

        let zero_min = BudgetConfig { min_s: 0, ..base };
        assert_eq!(zero_min.validate(), Err(ConfigError::ZeroMinimum));

        let zero_step = BudgetConfig { step_s: 0, ..base };
        assert_eq!(zero_step.validate(), Err(ConfigError::ZeroStep));

        let inverted = BudgetConfig {
            min_s: 600,
            max_s: 60,
            ..base
        };
        assert_eq!(inverted.validate(), Err(ConfigError::EmptyRange));

        let outside = BudgetConfig {
            default_s: 900,
            ..base
        };
        assert_eq!(outside.validate(), Err(ConfigError::DefaultOutOfRange));
    }

    #[test]
    fn test_scale_validation() {
        let mut config = TimerConfig::default();
        config.display.long.col_pitch = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroScale));

        let mut config = TimerConfig::default();
        config.display.short.cell_width = 8;
        assert_eq!(config.validate(), Err(ConfigError::OverlappingCells));
    }

    #[test]
    fn test_oversized_scale_is_rejected() {
        let mut config = TimerConfig::default();
        config.display.short.col_pitch = 1_500_000_000;
        config.display.short.cell_width = 1;
        assert_eq!(config.validate(), Err(ConfigError::ScaleTooLarge));

        let mut config = TimerConfig::default();
        config.display.long.glyph_gap = MAX_SCALE_PX + 1;
        assert_eq!(config.validate(), Err(ConfigError::ScaleTooLarge));

        let mut config = TimerConfig::default();
        config.display.long.origin_y = -200;
        assert_eq!(config.validate(), Err(ConfigError::ScaleTooLarge));

        // Exactly one panel width is still accepted
        let mut config = TimerConfig::default();
        config.display.long.col_pitch = MAX_SCALE_PX;
        assert_eq!(config.validate(), Ok(()));
    }
}
