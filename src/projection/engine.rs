//! Return projection engine
//!
//! Every computation here is a pure function of its inputs. The engine only
//! holds a copy of the rate table, so one instance can be shared freely across
//! threads.

use crate::config::{CalculatorConfig, RiskTier, RiskTierRates};
use super::returns::{BaselineReturn, ProductReturn, TierProfile, TimelinePoint};

/// Round to the nearest integer, halves toward positive infinity
///
/// Avoids `(x + 0.5).floor()`, which rounds 0.49999999999999994 up.
pub fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Growth multiplier after `months` of monthly compounding at `monthly_rate`
pub fn compound_growth_factor(monthly_rate: f64, months: u32) -> f64 {
    if months == 0 {
        return 1.0;
    }
    (1.0 + monthly_rate).powf(months as f64)
}

/// Effective annual rate of a monthly compounding rate
pub fn annualized_rate(monthly_rate: f64) -> f64 {
    compound_growth_factor(monthly_rate, 12) - 1.0
}

/// One year of simple interest, taxed on the gross interest only
///
/// Each field is rounded from its own unrounded source; `total` is therefore
/// not always `principal + net_interest` after rounding.
pub fn baseline_return(principal: f64, annual_rate: f64, tax_rate: f64) -> BaselineReturn {
    let gross_interest = principal * annual_rate;
    let tax = gross_interest * tax_rate;
    let net_interest = gross_interest - tax;
    let total = principal + net_interest;

    BaselineReturn {
        principal: round_half_up(principal),
        gross_interest: round_half_up(gross_interest),
        tax: round_half_up(tax),
        net_interest: round_half_up(net_interest),
        total: round_half_up(total),
    }
}

/// Monthly compounding over `months`, untaxed
pub fn compound_return(principal: f64, monthly_rate: f64, months: u32) -> ProductReturn {
    let total = principal * compound_growth_factor(monthly_rate, months);
    let profit = total - principal;

    ProductReturn {
        principal: round_half_up(principal),
        profit: round_half_up(profit),
        tax: 0.0,
        total: round_half_up(total),
        months,
    }
}

/// Projection engine bound to one rate table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionEngine {
    baseline_annual_rate: f64,
    baseline_tax_rate: f64,
    rates: RiskTierRates,
}

impl ProjectionEngine {
    /// Create an engine from the rates of a calculator config
    pub fn new(config: &CalculatorConfig) -> Self {
        Self {
            baseline_annual_rate: config.baseline_annual_rate,
            baseline_tax_rate: config.baseline_tax_rate,
            rates: config.risk_tier_monthly_rates,
        }
    }

    pub fn rates(&self) -> &RiskTierRates {
        &self.rates
    }

    /// Monthly growth rate for a tier
    pub fn monthly_rate(&self, tier: RiskTier) -> f64 {
        self.rates.rate(tier)
    }

    /// Comparison baseline for `principal`
    pub fn baseline_return(&self, principal: f64) -> BaselineReturn {
        baseline_return(principal, self.baseline_annual_rate, self.baseline_tax_rate)
    }

    /// Product return for `principal` in `tier` after `months`
    pub fn product_return(&self, principal: f64, tier: RiskTier, months: u32) -> ProductReturn {
        compound_return(principal, self.monthly_rate(tier), months)
    }

    /// Product return for each horizon, in the order given
    pub fn timeline(&self, principal: f64, tier: RiskTier, horizons: &[u32]) -> Vec<TimelinePoint> {
        let monthly_rate = self.monthly_rate(tier);
        horizons
            .iter()
            .map(|&months| {
                let projected = compound_return(principal, monthly_rate, months);
                TimelinePoint {
                    horizon_months: months,
                    total: projected.total,
                    profit: projected.profit,
                    return_pct: (compound_growth_factor(monthly_rate, months) - 1.0) * 100.0,
                }
            })
            .collect()
    }

    /// Rate figures for `tier` applied to `principal`
    pub fn tier_profile(&self, principal: f64, tier: RiskTier) -> TierProfile {
        let monthly_rate = self.monthly_rate(tier);
        TierProfile {
            tier,
            monthly_rate,
            annualized_rate: annualized_rate(monthly_rate),
            monthly_return: round_half_up(principal * monthly_rate),
        }
    }
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self::new(&CalculatorConfig::default())
    }
}
