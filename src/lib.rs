//! Return Calculator - projection engine for an investment return calculator
//!
//! This library provides:
//! - Baseline (taxed savings interest) and product (monthly compounding) returns
//! - Multi-horizon timeline projections and comparison metrics
//! - A recalculation controller that pushes snapshots to subscribers
//! - Config loading (JSON, CSV rate tables) and parallel scenario batches
//!
//! Number formatting and rendering are left to the caller.

pub mod error;
pub mod config;
pub mod projection;
pub mod controller;
pub mod scenario;
pub mod export;

// Re-export commonly used types
pub use error::CalculatorError;
pub use config::{CalculatorConfig, RiskTier, RiskTierRates};
pub use projection::{ProjectionEngine, BaselineReturn, ProductReturn, TimelinePoint, ComparisonMetrics};
pub use controller::{RecalculationController, Snapshot, Subscription, InvestmentAmount, AmountAdjustment};
pub use scenario::{Scenario, ScenarioRunner};
pub use export::SnapshotExport;
