//! Scenario runner for batch projections
//!
//! Evaluates many (amount, tier) pairs against one rate table. The engine is
//! stateless, so scenarios run on the rayon pool without coordination.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{CalculatorConfig, RiskTier};
use crate::controller::{InvestmentAmount, Snapshot};
use crate::error::Result;
use crate::projection::ProjectionEngine;

/// One (amount, tier) input to the runner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub amount: f64,
    pub tier: RiskTier,
}

/// Pre-validated runner holding one calculator config
///
/// # Example
/// ```
/// use return_calculator::{CalculatorConfig, RiskTier, ScenarioRunner};
///
/// let runner = ScenarioRunner::new(CalculatorConfig::default())?;
/// let snapshots = runner.run_tiers(&[1_000_000.0, 5_000_000.0])?;
/// assert_eq!(snapshots.len(), 6);
/// # Ok::<(), return_calculator::CalculatorError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    config: CalculatorConfig,
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create a runner; fails if the config does not validate
    pub fn new(config: CalculatorConfig) -> Result<Self> {
        config.validate()?;
        let engine = ProjectionEngine::new(&config);
        Ok(Self { config, engine })
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Run a single scenario; the amount is clamped like controller input
    pub fn run(&self, scenario: Scenario) -> Result<Snapshot> {
        let amount = InvestmentAmount::from_raw(scenario.amount, &self.config)?;
        Snapshot::compute(&self.engine, &self.config, amount, scenario.tier)
    }

    /// Run scenarios in parallel, preserving input order
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Result<Vec<Snapshot>> {
        scenarios.par_iter().map(|&scenario| self.run(scenario)).collect()
    }

    /// Every tier at every amount, amount-major
    pub fn run_tiers(&self, amounts: &[f64]) -> Result<Vec<Snapshot>> {
        let scenarios: Vec<Scenario> = amounts
            .iter()
            .flat_map(|&amount| RiskTier::ALL.iter().map(move |&tier| Scenario { amount, tier }))
            .collect();
        self.run_batch(&scenarios)
    }

    /// `points` amounts evenly spaced over the configured range, ends included
    pub fn sweep_amounts(&self, points: usize) -> Vec<f64> {
        let (min, max) = (self.config.min_amount, self.config.max_amount);
        match points {
            0 => Vec::new(),
            1 => vec![min],
            _ => {
                let step = (max - min) / (points - 1) as f64;
                (0..points)
                    .map(|i| if i == points - 1 { max } else { min + step * i as f64 })
                    .collect()
            }
        }
    }
}
