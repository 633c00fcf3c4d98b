//! Risk tiers and their monthly growth rate table

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalculatorError;

/// Risk bucket selecting a fixed monthly growth-rate assumption
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Conservative,
    Balanced,
    Aggressive,
}

impl RiskTier {
    /// All tiers, lowest rate first
    pub const ALL: [RiskTier; 3] = [RiskTier::Conservative, RiskTier::Balanced, RiskTier::Aggressive];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Conservative => "conservative",
            RiskTier::Balanced => "balanced",
            RiskTier::Aggressive => "aggressive",
        }
    }
}

impl Default for RiskTier {
    fn default() -> Self {
        RiskTier::Balanced
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskTier {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "conservative" => Ok(RiskTier::Conservative),
            "balanced" => Ok(RiskTier::Balanced),
            "aggressive" => Ok(RiskTier::Aggressive),
            _ => Err(CalculatorError::UnknownRiskTier(s.to_string())),
        }
    }
}

/// Monthly growth rate per risk tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskTierRates {
    pub conservative: f64,
    pub balanced: f64,
    pub aggressive: f64,
}

impl RiskTierRates {
    /// Look up the monthly rate for a tier
    pub fn rate(&self, tier: RiskTier) -> f64 {
        match tier {
            RiskTier::Conservative => self.conservative,
            RiskTier::Balanced => self.balanced,
            RiskTier::Aggressive => self.aggressive,
        }
    }

    /// Iterate (tier, rate) pairs in tier order
    pub fn iter(&self) -> impl Iterator<Item = (RiskTier, f64)> + '_ {
        RiskTier::ALL.iter().map(move |&tier| (tier, self.rate(tier)))
    }
}

impl Default for RiskTierRates {
    fn default() -> Self {
        Self {
            conservative: 0.02, // 2% monthly
            balanced: 0.03,     // 3% monthly
            aggressive: 0.04,   // 4% monthly
        }
    }
}
