//! File-based config loading
//!
//! Calculator tables live in JSON; risk tier rates can also be supplied as a
//! CSV table with a `tier,monthly_rate` header.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::info;

use super::{CalculatorConfig, RiskTier, RiskTierRates};
use crate::error::{CalculatorError, Result};

/// Default path to calculator data files
pub const DEFAULT_CONFIG_PATH: &str = "data/calculator";

/// Raw CSV row of the rate table
#[derive(Debug, serde::Deserialize)]
struct RateRow {
    tier: String,
    monthly_rate: f64,
}

/// Load and validate a calculator config from a JSON file
pub fn load_config(path: &Path) -> Result<CalculatorConfig> {
    let file = File::open(path)?;
    let config: CalculatorConfig = serde_json::from_reader(file)?;
    config.validate()?;
    info!("Loaded calculator config from {}", path.display());
    Ok(config)
}

/// Load the risk tier rate table from a CSV file
pub fn load_risk_tier_rates(path: &Path) -> Result<RiskTierRates> {
    let file = File::open(path)?;
    let rates = read_risk_tier_rates(file)?;
    info!("Loaded risk tier rates from {}", path.display());
    Ok(rates)
}

/// Parse the risk tier rate table; every tier must appear exactly once
pub fn read_risk_tier_rates<R: Read>(reader: R) -> Result<RiskTierRates> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut rates: [Option<f64>; 3] = [None; 3];

    for result in reader.deserialize() {
        let row: RateRow = result?;
        let tier: RiskTier = row.tier.parse()?;
        let slot = &mut rates[tier_index(tier)];
        if slot.is_some() {
            return Err(CalculatorError::InvalidConfig(format!("duplicate rate for tier {}", tier)));
        }
        *slot = Some(row.monthly_rate);
    }

    let rate_for = |tier: RiskTier| {
        rates[tier_index(tier)]
            .ok_or_else(|| CalculatorError::InvalidConfig(format!("missing rate for tier {}", tier)))
    };

    Ok(RiskTierRates {
        conservative: rate_for(RiskTier::Conservative)?,
        balanced: rate_for(RiskTier::Balanced)?,
        aggressive: rate_for(RiskTier::Aggressive)?,
    })
}

fn tier_index(tier: RiskTier) -> usize {
    match tier {
        RiskTier::Conservative => 0,
        RiskTier::Balanced => 1,
        RiskTier::Aggressive => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_rate_table() {
        let csv = "tier,monthly_rate\naggressive, 0.05\nconservative,0.01\nbalanced,0.025\n";
        let rates = read_risk_tier_rates(csv.as_bytes()).unwrap();
        assert_eq!(rates.conservative, 0.01);
        assert_eq!(rates.balanced, 0.025);
        assert_eq!(rates.aggressive, 0.05);
    }

    #[test]
    fn test_rate_table_rejects_unknown_tier() {
        let csv = "tier,monthly_rate\nconservative,0.02\nbalanced,0.03\nyolo,0.5\n";
        let err = read_risk_tier_rates(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CalculatorError::UnknownRiskTier(_)));
    }

    #[test]
    fn test_rate_table_requires_every_tier() {
        let csv = "tier,monthly_rate\nconservative,0.02\nbalanced,0.03\n";
        let err = read_risk_tier_rates(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CalculatorError::InvalidConfig(_)));

        let dup = "tier,monthly_rate\nconservative,0.02\nconservative,0.03\n";
        assert!(read_risk_tier_rates(dup.as_bytes()).is_err());
    }

    #[test]
    fn test_rate_table_bad_number() {
        let csv = "tier,monthly_rate\nconservative,two percent\n";
        let err = read_risk_tier_rates(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CalculatorError::Csv(_)));
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, CalculatorError::Io(_)));
    }

    #[test]
    fn test_bundled_data_files() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_CONFIG_PATH);

        let config = load_config(&dir.join("calculator.json")).unwrap();
        assert_eq!(config, CalculatorConfig::default());

        let rates = load_risk_tier_rates(&dir.join("risk_tiers.csv")).unwrap();
        assert_eq!(rates, RiskTierRates::default());
    }
}
