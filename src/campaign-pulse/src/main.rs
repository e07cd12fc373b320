//! Campaign Pulse: aggregate PPC campaign performance reporting.
//!
//! Demonstration entry point that builds a synthetic activity dataset
//! and prints the bundled metrics for a supplied revenue figure.

use chrono::NaiveDate;
use clap::Parser;
use pulse_core::config::AppConfig;
use pulse_core::dataset::{CampaignDataset, CLICKS, CONVERSIONS, IMPRESSIONS, SPEND};
use pulse_reporting::MetricsCalculator;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "campaign-pulse")]
#[command(about = "Aggregate PPC campaign performance metrics")]
#[command(version)]
struct Cli {
    /// Number of synthetic observation rows (overrides config)
    #[arg(long, env = "CAMPAIGN_PULSE__DEMO__ROWS")]
    rows: Option<usize>,

    /// Campaign revenue used for ROAS (overrides config)
    #[arg(long, env = "CAMPAIGN_PULSE__DEMO__REVENUE")]
    revenue: Option<f64>,

    /// Seed for reproducible datasets
    #[arg(long)]
    seed: Option<u64>,

    /// Emit the report as JSON instead of plain text
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campaign_pulse=info".into()),
        )
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    // Apply CLI overrides
    if let Some(rows) = cli.rows {
        config.demo.rows = rows;
    }
    if let Some(revenue) = cli.revenue {
        config.demo.revenue = revenue;
    }

    info!(
        rows = config.demo.rows,
        revenue = config.demo.revenue,
        currency = %config.currency,
        "Configuration loaded"
    );

    let dataset = synthetic_dataset(config.demo.rows, cli.seed);
    let calculator = MetricsCalculator::new(&dataset)?;
    let report = calculator.get_all_metrics(config.demo.revenue);

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        println!("PPC Campaign Metrics ({} rows)", dataset.row_count());
        println!("{}", "=".repeat(40));
        for (name, value) in report.to_map() {
            println!("{name:>20}: {value:.2}");
        }
        println!("(monetary values in {})", config.currency);
    }

    Ok(())
}

/// Build a random activity dataset in the shape real exports have: one
/// row per day starting 2025-01-01, the four required numeric columns,
/// and a date column the calculator ignores.
fn synthetic_dataset(rows: usize, seed: Option<u64>) -> CampaignDataset {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let start = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid calendar date");
    let dates = (0..rows)
        .map(|i| (start + chrono::Duration::days(i as i64)).to_string())
        .collect();

    let mut data = CampaignDataset::new();
    data.insert_text("date", dates);
    data.insert_numeric(
        IMPRESSIONS,
        (0..rows).map(|_| rng.gen_range(10_000..20_000) as f64).collect(),
    );
    data.insert_numeric(
        CLICKS,
        (0..rows).map(|_| rng.gen_range(300..600) as f64).collect(),
    );
    data.insert_numeric(
        SPEND,
        (0..rows).map(|_| rng.gen_range(1_000.0..2_000.0)).collect(),
    );
    data.insert_numeric(
        CONVERSIONS,
        (0..rows).map(|_| rng.gen_range(10..25) as f64).collect(),
    );
    data
}
