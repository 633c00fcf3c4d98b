//! Output structures for return projections
//!
//! Money fields hold whole numbers (rounded half-up) but stay `f64` so that a
//! NaN or negative principal remains visible in the output instead of being
//! cast away.

use serde::{Deserialize, Serialize};

use crate::config::RiskTier;

/// Savings-account style comparison return over one year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineReturn {
    pub principal: f64,
    pub gross_interest: f64,
    pub tax: f64,
    pub net_interest: f64,
    pub total: f64,
}

/// Projected product return under monthly compounding
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductReturn {
    pub principal: f64,
    pub profit: f64,
    /// Always zero: product gains are not taxed
    pub tax: f64,
    pub total: f64,
    pub months: u32,
}

/// One horizon of a timeline projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePoint {
    pub horizon_months: u32,
    pub total: f64,
    pub profit: f64,
    /// Growth over the horizon in percent (unrounded)
    pub return_pct: f64,
}

/// Rate figures for the selected tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierProfile {
    pub tier: RiskTier,
    pub monthly_rate: f64,
    /// `(1 + monthly_rate)^12 - 1`
    pub annualized_rate: f64,
    /// One month of growth on the principal, rounded
    pub monthly_return: f64,
}
