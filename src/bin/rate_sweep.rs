//! Sweep every risk tier across the configured amount range
//!
//! Writes one CSV row per (amount, tier) to stdout

use anyhow::{Context, Result};
use clap::Parser;
use return_calculator::{CalculatorConfig, ScenarioRunner, config::loader::load_config};
use std::io;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "rate_sweep", about = "Project every tier across the amount range as CSV")]
struct Args {
    /// Number of evenly spaced amounts, range ends included
    #[arg(long, default_value_t = 100)]
    points: usize,

    /// JSON calculator config
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, serde::Serialize)]
struct SweepRow {
    amount: f64,
    tier: String,
    baseline_total: f64,
    product_total: f64,
    product_profit: f64,
    difference: f64,
    percentage_gain: f64,
    multiple: f64,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => load_config(path).with_context(|| format!("loading config from {}", path.display()))?,
        None => CalculatorConfig::default(),
    };

    let runner = ScenarioRunner::new(config)?;
    let amounts = runner.sweep_amounts(args.points);

    let start = Instant::now();
    let snapshots = runner.run_tiers(&amounts)?;
    log::info!("Projected {} scenarios in {:?}", snapshots.len(), start.elapsed());

    let mut writer = csv::Writer::from_writer(io::stdout().lock());
    for snapshot in &snapshots {
        writer.serialize(SweepRow {
            amount: snapshot.amount.value(),
            tier: snapshot.risk_tier.to_string(),
            baseline_total: snapshot.baseline.total,
            product_total: snapshot.product.total,
            product_profit: snapshot.product.profit,
            difference: snapshot.comparison.difference,
            percentage_gain: snapshot.comparison.percentage_gain,
            multiple: snapshot.comparison.multiple,
        })?;
    }
    writer.flush()?;

    Ok(())
}
