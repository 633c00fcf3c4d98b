//! Recalculation controller
//!
//! Owns the current amount and risk tier of one calculator, reruns the
//! projection engine on every input change and pushes the resulting
//! [`Snapshot`] to subscribers.
//!
//! # Example
//!
//! ```
//! use return_calculator::{CalculatorConfig, RecalculationController, RiskTier};
//!
//! let mut controller = RecalculationController::new(CalculatorConfig::default())?;
//! let subscription = controller.subscribe(|snapshot| {
//!     println!("total after 12 months: {}", snapshot.product.total);
//! });
//!
//! controller.set_amount(10_000_000.0)?;
//! controller.set_risk_tier(RiskTier::Aggressive)?;
//! subscription.unsubscribe();
//! # Ok::<(), return_calculator::CalculatorError>(())
//! ```

mod amount;
mod snapshot;
mod subscription;

pub use amount::{AmountAdjustment, InvestmentAmount};
pub use snapshot::Snapshot;
pub use subscription::Subscription;

use log::{debug, warn};

use crate::config::{CalculatorConfig, RiskTier};
use crate::error::Result;
use crate::projection::ProjectionEngine;
use subscription::SharedRegistry;

/// Input state and subscribers of one calculator instance
///
/// Setters take `&mut self`, so a controller has a single writer; wrap it in a
/// `Mutex` to drive it from several threads.
pub struct RecalculationController {
    config: CalculatorConfig,
    engine: ProjectionEngine,
    amount: InvestmentAmount,
    tier: RiskTier,
    listeners: SharedRegistry,
}

impl RecalculationController {
    /// Create a controller at the config's default amount and tier
    pub fn new(config: CalculatorConfig) -> Result<Self> {
        config.validate()?;
        let engine = ProjectionEngine::new(&config);
        let amount = InvestmentAmount::from_raw(config.default_amount, &config)?;
        let tier = config.default_risk_tier;

        Ok(Self {
            config,
            engine,
            amount,
            tier,
            listeners: SharedRegistry::default(),
        })
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }

    pub fn amount(&self) -> InvestmentAmount {
        self.amount
    }

    pub fn risk_tier(&self) -> RiskTier {
        self.tier
    }

    /// Store a new amount (clamped), recalculate and notify
    ///
    /// Non-finite input is rejected: the previous amount is kept and no
    /// subscriber is notified.
    pub fn set_amount(&mut self, raw: f64) -> Result<Snapshot> {
        let amount = match InvestmentAmount::from_raw(raw, &self.config) {
            Ok(amount) => amount,
            Err(e) => {
                warn!("Rejected amount {}; keeping {}", raw, self.amount.value());
                return Err(e);
            }
        };
        if amount.value() != raw {
            debug!("Clamped amount {} to {}", raw, amount.value());
        }

        self.publish(amount, self.tier)
    }

    /// Store a new tier, recalculate with the current amount and notify
    pub fn set_risk_tier(&mut self, tier: RiskTier) -> Result<Snapshot> {
        self.publish(self.amount, tier)
    }

    /// Parse a tier name, then behave like [`Self::set_risk_tier`]
    ///
    /// Unknown names fail with `UnknownRiskTier` and leave state untouched.
    pub fn set_risk_tier_str(&mut self, name: &str) -> Result<Snapshot> {
        let tier = name.parse::<RiskTier>().map_err(|e| {
            warn!("Rejected risk tier {:?}; keeping {}", name, self.tier);
            e
        })?;
        self.set_risk_tier(tier)
    }

    /// Step or jump the amount
    ///
    /// Returns `None` without notifying when the clamped target equals the
    /// current amount.
    pub fn adjust(&mut self, adjustment: AmountAdjustment) -> Result<Option<Snapshot>> {
        let current = self.amount.value();
        let target = InvestmentAmount::from_raw(adjustment.apply(current, &self.config), &self.config)?;
        if target.value() == current {
            return Ok(None);
        }
        self.publish(target, self.tier).map(Some)
    }

    /// Snapshot of the current state; does not notify
    pub fn recalculate(&self) -> Result<Snapshot> {
        Snapshot::compute(&self.engine, &self.config, self.amount, self.tier)
    }

    /// Register a listener called synchronously after every recalculation
    ///
    /// Notifications are neither buffered nor debounced.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(&Snapshot) + Send + 'static,
    {
        subscription::register(&self.listeners, Box::new(listener))
    }

    pub fn subscriber_count(&self) -> usize {
        subscription::listener_count(&self.listeners)
    }

    /// Recalculate for the candidate inputs, then commit them and notify
    ///
    /// A failed recalculation leaves the stored amount and tier untouched.
    fn publish(&mut self, amount: InvestmentAmount, tier: RiskTier) -> Result<Snapshot> {
        let snapshot = Snapshot::compute(&self.engine, &self.config, amount, tier)?;
        self.amount = amount;
        self.tier = tier;
        debug!(
            "Recalculated amount={} tier={} product_total={} baseline_total={}",
            snapshot.amount.value(),
            snapshot.risk_tier,
            snapshot.product.total,
            snapshot.baseline.total,
        );
        subscription::notify(&self.listeners, &snapshot);
        Ok(snapshot)
    }
}

impl std::fmt::Debug for RecalculationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecalculationController")
            .field("amount", &self.amount)
            .field("tier", &self.tier)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
