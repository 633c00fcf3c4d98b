//! Result bundle of one recalculation pass

use serde::{Deserialize, Serialize};

use crate::config::{CalculatorConfig, RiskTier};
use crate::error::Result;
use crate::projection::{
    BaselineReturn, ComparisonMetrics, ProductReturn, ProjectionEngine, TierProfile, TimelinePoint,
    comparison_metrics,
};
use super::amount::InvestmentAmount;

/// Immutable bundle of everything derived from one (amount, tier) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub amount: InvestmentAmount,
    pub risk_tier: RiskTier,
    /// Position of `amount` within the configured range, 0..=1
    pub position: f64,
    pub tier_profile: TierProfile,
    pub baseline: BaselineReturn,
    pub product: ProductReturn,
    pub timeline: Vec<TimelinePoint>,
    /// Product total against baseline total
    pub comparison: ComparisonMetrics,
}

impl Snapshot {
    /// Run every projection for `amount` and `tier`
    pub fn compute(
        engine: &ProjectionEngine,
        config: &CalculatorConfig,
        amount: InvestmentAmount,
        tier: RiskTier,
    ) -> Result<Self> {
        let principal = amount.value();

        let baseline = engine.baseline_return(principal);
        let product = engine.product_return(principal, tier, config.default_horizon_months);
        let timeline = engine.timeline(principal, tier, &config.timeline_horizons);
        let comparison = comparison_metrics(product.total, baseline.total)?;

        Ok(Self {
            amount,
            risk_tier: tier,
            position: amount.position(config),
            tier_profile: engine.tier_profile(principal, tier),
            baseline,
            product,
            timeline,
            comparison,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot() {
        let config = CalculatorConfig::default();
        let engine = ProjectionEngine::new(&config);
        let amount = InvestmentAmount::from_raw(config.default_amount, &config).unwrap();

        let snapshot = Snapshot::compute(&engine, &config, amount, RiskTier::Balanced).unwrap();

        assert_eq!(snapshot.amount.value(), 5_000_000.0);
        assert_eq!(snapshot.baseline.total, 5_169_200.0);
        assert_eq!(snapshot.product.total, 7_128_804.0);
        assert_eq!(snapshot.comparison.difference, 1_959_604.0);
        assert_eq!(snapshot.tier_profile.monthly_return, 150_000.0);

        let horizons: Vec<u32> = snapshot.timeline.iter().map(|p| p.horizon_months).collect();
        assert_eq!(horizons, config.timeline_horizons);
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let config = CalculatorConfig::default();
        let engine = ProjectionEngine::new(&config);
        let amount = InvestmentAmount::from_raw(1_000_000.0, &config).unwrap();
        let snapshot = Snapshot::compute(&engine, &config, amount, RiskTier::Aggressive).unwrap();

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["amount"], 1_000_000.0);
        assert_eq!(json["riskTier"], "aggressive");
        assert!(json["baseline"]["grossInterest"].is_number());
        assert!(json["timeline"][0]["horizonMonths"].is_number());
    }
}
