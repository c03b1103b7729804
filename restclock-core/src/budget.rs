//! Rest time budget
//!
//! The countdown length chosen on the rest picker, adjusted in fixed steps
//! and clamped to the configured bounds.

use crate::config::BudgetConfig;

/// Selected rest duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeBudget {
    bounds: BudgetConfig,
    seconds: u32,
}

impl Default for TimeBudget {
    fn default() -> Self {
        Self::new(BudgetConfig::default())
    }
}

impl TimeBudget {
    /// Create a budget at the configured default
    ///
    /// A default outside the bounds is clamped into them.
    pub fn new(bounds: BudgetConfig) -> Self {
        Self {
            seconds: bounds.default_s.clamp(bounds.min_s, bounds.max_s.max(bounds.min_s)),
            bounds,
        }
    }

    /// Current budget in seconds
    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Bounds this budget is clamped to
    pub fn bounds(&self) -> &BudgetConfig {
        &self.bounds
    }

    /// Add one step, stopping at the maximum
    ///
    /// Returns `true` if the budget changed.
    pub fn increment(&mut self) -> bool {
        let next = self
            .seconds
            .saturating_add(self.bounds.step_s)
            .min(self.bounds.max_s);
        self.set(next)
    }

    /// Remove one step, stopping at the minimum
    ///
    /// Returns `true` if the budget changed.
    pub fn decrement(&mut self) -> bool {
        let next = self
            .seconds
            .saturating_sub(self.bounds.step_s)
            .max(self.bounds.min_s);
        self.set(next)
    }

    fn set(&mut self, seconds: u32) -> bool {
        let changed = seconds != self.seconds;
        self.seconds = seconds;
        changed
    }
}
