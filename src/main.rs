//! Return Calculator CLI
//!
//! Drives a recalculation controller from command-line input and prints the
//! resulting snapshot

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use return_calculator::{
    CalculatorConfig, RecalculationController, Snapshot, SnapshotExport,
    config::loader::{load_config, load_risk_tier_rates},
};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Currency {
    Krw,
    Usd,
}

#[derive(Debug, Parser)]
#[command(name = "return_calculator", version, about = "Project investment returns by risk tier")]
struct Args {
    /// Investment amount (clamped to the configured range)
    #[arg(long)]
    amount: Option<f64>,

    /// Risk tier: conservative, balanced or aggressive
    #[arg(long)]
    tier: Option<String>,

    /// Timeline horizons in months, e.g. 3,6,12
    #[arg(long, value_delimiter = ',')]
    horizons: Option<Vec<u32>>,

    /// JSON calculator config
    #[arg(long)]
    config: Option<PathBuf>,

    /// CSV risk tier rate table (tier,monthly_rate)
    #[arg(long)]
    rates: Option<PathBuf>,

    /// Built-in table to start from when no config file is given
    #[arg(long, value_enum, default_value = "krw")]
    currency: Currency,

    /// Print the snapshot export as JSON
    #[arg(long)]
    json: bool,
}

fn build_config(args: &Args) -> Result<CalculatorConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => match args.currency {
            Currency::Krw => CalculatorConfig::default(),
            Currency::Usd => CalculatorConfig::usd(),
        },
    };

    if let Some(path) = &args.rates {
        let rates = load_risk_tier_rates(path)
            .with_context(|| format!("loading risk tier rates from {}", path.display()))?;
        config = config.with_rates(rates);
    }
    if let Some(horizons) = &args.horizons {
        config = config.with_timeline_horizons(horizons.clone());
    }

    Ok(config)
}

fn print_snapshot(snapshot: &Snapshot) {
    println!("Amount: {:.0} ({:.1}% of range)", snapshot.amount.value(), snapshot.position * 100.0);
    println!(
        "Tier: {} ({:.2}% monthly, {:.2}% annualized, {:.0} per month)",
        snapshot.risk_tier,
        snapshot.tier_profile.monthly_rate * 100.0,
        snapshot.tier_profile.annualized_rate * 100.0,
        snapshot.tier_profile.monthly_return,
    );
    println!();

    let b = &snapshot.baseline;
    println!("Baseline (1 year):");
    println!("  Principal:      {:>16.0}", b.principal);
    println!("  Gross interest: {:>16.0}", b.gross_interest);
    println!("  Tax:            {:>16.0}", b.tax);
    println!("  Net interest:   {:>16.0}", b.net_interest);
    println!("  Total:          {:>16.0}", b.total);
    println!();

    let p = &snapshot.product;
    println!("Product ({} months):", p.months);
    println!("  Principal:      {:>16.0}", p.principal);
    println!("  Profit:         {:>16.0}", p.profit);
    println!("  Tax:            {:>16.0}", p.tax);
    println!("  Total:          {:>16.0}", p.total);
    println!();

    let c = &snapshot.comparison;
    println!("Comparison:");
    println!("  Difference:     {:>16.0}", c.difference);
    println!("  Gain:           {:>15.1}%", c.percentage_gain);
    println!("  Multiple:       {:>15.2}x", c.multiple);
    println!();

    println!("{:>8} {:>16} {:>16} {:>10}", "Months", "Total", "Profit", "Return");
    println!("{}", "-".repeat(53));
    for point in &snapshot.timeline {
        println!(
            "{:>8} {:>16.0} {:>16.0} {:>9.2}%",
            point.horizon_months, point.total, point.profit, point.return_pct
        );
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = build_config(&args)?;
    let mut controller = RecalculationController::new(config).context("invalid calculator config")?;

    // Keep only the last pushed snapshot, like a display surface would
    let latest: Arc<Mutex<Option<Snapshot>>> = Arc::new(Mutex::new(None));
    let display = Arc::clone(&latest);
    controller.subscribe(move |snapshot| {
        if let Ok(mut slot) = display.lock() {
            *slot = Some(snapshot.clone());
        }
    });

    if let Some(amount) = args.amount {
        controller.set_amount(amount)?;
    }
    if let Some(tier) = &args.tier {
        controller.set_risk_tier_str(tier)?;
    }

    let pushed = latest.lock().ok().and_then(|mut slot| slot.take());
    let snapshot = match pushed {
        Some(snapshot) => snapshot,
        None => controller.recalculate()?,
    };

    if args.json {
        println!("{}", SnapshotExport::now(snapshot).to_json_pretty()?);
    } else {
        print_snapshot(&snapshot);
    }

    Ok(())
}
