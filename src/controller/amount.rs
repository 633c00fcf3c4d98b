//! Bounded investment amount

use serde::{Deserialize, Serialize};

use crate::config::CalculatorConfig;
use crate::error::{CalculatorError, Result};

/// Investment principal kept within the configured bounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvestmentAmount(f64);

impl InvestmentAmount {
    /// Clamp `raw` into `[min_amount, max_amount]`
    ///
    /// Out-of-range values are clamped the way a range control clamps them;
    /// only non-finite values are rejected.
    pub fn from_raw(raw: f64, config: &CalculatorConfig) -> Result<Self> {
        if !raw.is_finite() {
            return Err(CalculatorError::InvalidInput { value: raw });
        }
        Ok(Self(config.clamp_amount(raw)))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Fractional position within the configured range (0 at min, 1 at max)
    pub fn position(&self, config: &CalculatorConfig) -> f64 {
        let span = config.max_amount - config.min_amount;
        if span <= 0.0 {
            return 0.0;
        }
        (self.0 - config.min_amount) / span
    }
}

/// Keyboard-style amount adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountAdjustment {
    /// Down by one `amount_step`
    Decrease,
    /// Up by one `amount_step`
    Increase,
    ToMin,
    ToMax,
}

impl AmountAdjustment {
    /// Raw target value before clamping
    pub fn apply(self, current: f64, config: &CalculatorConfig) -> f64 {
        match self {
            AmountAdjustment::Decrease => current - config.amount_step,
            AmountAdjustment::Increase => current + config.amount_step,
            AmountAdjustment::ToMin => config.min_amount,
            AmountAdjustment::ToMax => config.max_amount,
        }
    }
}
