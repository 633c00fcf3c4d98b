//! Error types for the calculator core

use thiserror::Error;

/// Errors surfaced by the engine, the controller and the config loaders
#[derive(Debug, Error)]
pub enum CalculatorError {
    /// Amount was NaN or infinite; controller state is left untouched
    #[error("invalid investment amount: {value}")]
    InvalidInput { value: f64 },

    /// Tier name did not match any configured risk tier
    #[error("unknown risk tier: {0:?}")]
    UnknownRiskTier(String),

    /// Baseline total of zero (or a non-finite total) makes ratios meaningless
    #[error("cannot compare against baseline total {baseline_total}")]
    DegenerateComparison { baseline_total: f64 },

    #[error("invalid calculator config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
