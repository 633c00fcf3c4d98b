//! Calculator configuration: amount bounds, rate tables and timeline horizons

mod tier;
pub mod loader;

pub use tier::{RiskTier, RiskTierRates};

use serde::{Deserialize, Serialize};

use crate::error::{CalculatorError, Result};
use crate::projection::{baseline_return, compound_return};

/// KRW to USD factor used by the USD rate table
pub const USD_EXCHANGE_RATE: f64 = 0.00075;

/// Static rate and bounds table injected into the engine and controller
///
/// Amount-denominated fields share one currency unit; the core never converts
/// between currencies. Use [`CalculatorConfig::rescaled`] to derive a table for
/// another unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalculatorConfig {
    /// Lower bound of the investment amount
    pub min_amount: f64,

    /// Upper bound of the investment amount
    pub max_amount: f64,

    /// Amount a new controller starts with
    pub default_amount: f64,

    /// Annual rate of the comparison baseline (savings account)
    pub baseline_annual_rate: f64,

    /// Tax rate applied to baseline gross interest
    pub baseline_tax_rate: f64,

    /// Monthly compound growth rate per risk tier
    pub risk_tier_monthly_rates: RiskTierRates,

    pub default_risk_tier: RiskTier,

    /// Compounding horizon of the headline product return
    pub default_horizon_months: u32,

    /// Horizons (months) projected into the timeline, in display order
    pub timeline_horizons: Vec<u32>,

    /// Increment used by keyboard-style amount adjustment
    pub amount_step: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            min_amount: 500_000.0,
            max_amount: 100_000_000.0,
            default_amount: 5_000_000.0,
            baseline_annual_rate: 0.04,
            baseline_tax_rate: 0.154, // 14% income tax + 1.4% local tax
            risk_tier_monthly_rates: RiskTierRates::default(),
            default_risk_tier: RiskTier::Balanced,
            default_horizon_months: 12,
            timeline_horizons: vec![12, 24, 36],
            amount_step: 100_000.0,
        }
    }
}

impl CalculatorConfig {
    /// Default table expressed in US dollars
    pub fn usd() -> Self {
        Self {
            amount_step: 50.0,
            ..Self::default().rescaled(USD_EXCHANGE_RATE)
        }
    }

    /// Scale every amount-denominated field by `factor`; rates are untouched
    pub fn rescaled(&self, factor: f64) -> Self {
        Self {
            min_amount: self.min_amount * factor,
            max_amount: self.max_amount * factor,
            default_amount: self.default_amount * factor,
            amount_step: self.amount_step * factor,
            ..self.clone()
        }
    }

    /// Replace the timeline horizon set
    pub fn with_timeline_horizons(mut self, horizons: Vec<u32>) -> Self {
        self.timeline_horizons = horizons;
        self
    }

    /// Replace the risk tier rate table
    pub fn with_rates(mut self, rates: RiskTierRates) -> Self {
        self.risk_tier_monthly_rates = rates;
        self
    }

    /// Clamp a finite value into `[min_amount, max_amount]`
    pub fn clamp_amount(&self, value: f64) -> f64 {
        value.max(self.min_amount).min(self.max_amount)
    }

    /// Check the invariants every consumer relies on
    pub fn validate(&self) -> Result<()> {
        let amounts = [
            ("minAmount", self.min_amount),
            ("maxAmount", self.max_amount),
            ("defaultAmount", self.default_amount),
            ("amountStep", self.amount_step),
        ];
        for (name, value) in amounts {
            if !value.is_finite() {
                return Err(invalid(format!("{} must be finite, got {}", name, value)));
            }
        }

        if self.min_amount <= 0.0 {
            return Err(invalid(format!("minAmount must be positive, got {}", self.min_amount)));
        }
        if self.min_amount > self.max_amount {
            return Err(invalid(format!(
                "minAmount {} exceeds maxAmount {}",
                self.min_amount, self.max_amount
            )));
        }
        if self.default_amount < self.min_amount || self.default_amount > self.max_amount {
            return Err(invalid(format!(
                "defaultAmount {} outside [{}, {}]",
                self.default_amount, self.min_amount, self.max_amount
            )));
        }
        if self.amount_step <= 0.0 {
            return Err(invalid(format!("amountStep must be positive, got {}", self.amount_step)));
        }

        if !self.baseline_annual_rate.is_finite() || self.baseline_annual_rate < 0.0 {
            return Err(invalid(format!(
                "baselineAnnualRate must be a non-negative number, got {}",
                self.baseline_annual_rate
            )));
        }
        if !(0.0..1.0).contains(&self.baseline_tax_rate) {
            return Err(invalid(format!(
                "baselineTaxRate must be in [0, 1), got {}",
                self.baseline_tax_rate
            )));
        }
        for (tier, rate) in self.risk_tier_monthly_rates.iter() {
            if !rate.is_finite() || rate < 0.0 {
                return Err(invalid(format!("monthly rate for {} must be a non-negative number, got {}", tier, rate)));
            }
        }

        // Comparison ratios need a positive baseline at the bottom of the range
        let floor = baseline_return(self.min_amount, self.baseline_annual_rate, self.baseline_tax_rate);
        if floor.total <= 0.0 {
            return Err(invalid(format!(
                "baseline total at minAmount {} rounds to {}",
                self.min_amount, floor.total
            )));
        }
        let top_rate = self.risk_tier_monthly_rates.iter().map(|(_, rate)| rate).fold(0.0, f64::max);
        let ceiling = compound_return(self.max_amount, top_rate, self.default_horizon_months);
        if !ceiling.total.is_finite() {
            return Err(invalid(format!(
                "product total at maxAmount {} overflows after {} months",
                self.max_amount, self.default_horizon_months
            )));
        }

        Ok(())
    }
}

fn invalid(reason: String) -> CalculatorError {
    CalculatorError::InvalidConfig(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_config_is_valid() {
        let config = CalculatorConfig::default();
        config.validate().unwrap();
        assert_eq!(config.default_risk_tier, RiskTier::Balanced);
        assert_eq!(config.default_horizon_months, 12);
    }

    #[test]
    fn test_usd_table() {
        let config = CalculatorConfig::usd();
        config.validate().unwrap();
        assert_relative_eq!(config.min_amount, 375.0, epsilon = 1e-9);
        assert_relative_eq!(config.max_amount, 75_000.0, epsilon = 1e-6);
        assert_relative_eq!(config.default_amount, 3_750.0, epsilon = 1e-9);
        assert_eq!(config.amount_step, 50.0);
        // Rates are currency independent
        assert_eq!(config.baseline_annual_rate, 0.04);
        assert_eq!(config.risk_tier_monthly_rates, RiskTierRates::default());
    }

    #[test]
    fn test_clamp_amount() {
        let config = CalculatorConfig::default();
        assert_eq!(config.clamp_amount(1.0), 500_000.0);
        assert_eq!(config.clamp_amount(1e12), 100_000_000.0);
        assert_eq!(config.clamp_amount(7_000_000.0), 7_000_000.0);
    }

    #[test]
    fn test_validate_rejects_bad_tables() {
        let zero_min = CalculatorConfig { min_amount: 0.0, ..Default::default() };
        assert!(matches!(zero_min.validate(), Err(CalculatorError::InvalidConfig(_))));

        let inverted = CalculatorConfig {
            min_amount: 10.0,
            max_amount: 5.0,
            default_amount: 7.0,
            ..Default::default()
        };
        assert!(inverted.validate().is_err());

        let default_outside = CalculatorConfig { default_amount: 1.0, ..Default::default() };
        assert!(default_outside.validate().is_err());

        let full_tax = CalculatorConfig { baseline_tax_rate: 1.0, ..Default::default() };
        assert!(full_tax.validate().is_err());

        let nan_rate = CalculatorConfig::default().with_rates(RiskTierRates {
            conservative: 0.02,
            balanced: f64::NAN,
            aggressive: 0.04,
        });
        assert!(nan_rate.validate().is_err());
    }

    #[test]
    fn test_validate_requires_positive_baseline_at_min() {
        let tiny = CalculatorConfig {
            min_amount: 0.1,
            max_amount: 100.0,
            default_amount: 50.0,
            amount_step: 1.0,
            ..Default::default()
        };
        assert!(matches!(tiny.validate(), Err(CalculatorError::InvalidConfig(_))));
        assert!(CalculatorConfig::default().rescaled(1e-7).validate().is_err());

        // round(0.5 + 0.0169) == 1
        let half_unit = CalculatorConfig { min_amount: 0.5, ..tiny };
        half_unit.validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_overflowing_horizon() {
        let config = CalculatorConfig { default_horizon_months: 100_000, ..Default::default() };
        assert!(matches!(config.validate(), Err(CalculatorError::InvalidConfig(_))));
    }

    #[test]
    fn test_json_uses_defaults_for_missing_keys() {
        let config: CalculatorConfig =
            serde_json::from_str(r#"{"maxAmount": 50000000, "timelineHorizons": [3, 6, 12]}"#).unwrap();
        assert_eq!(config.max_amount, 50_000_000.0);
        assert_eq!(config.timeline_horizons, vec![3, 6, 12]);
        assert_eq!(config.min_amount, 500_000.0);
        assert_eq!(config.default_risk_tier, RiskTier::Balanced);
    }
}
