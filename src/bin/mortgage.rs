//! Mortgage payment console tool.
//!
//! Computes the six payment amounts for a loan scenario given on the
//! command line or loaded from a JSON scenario file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fincalc::LoanTerms;

#[derive(Parser)]
#[command(version, about = "Compute Canadian mortgage payments across payment frequencies")]
struct Cli {
    /// Amount borrowed
    #[arg(long, default_value_t = 100_000.0)]
    principal: f64,

    /// Nominal annual interest rate in percent, compounded semi-annually
    #[arg(long, default_value_t = 5.5)]
    rate: f64,

    /// Amortization period in years
    #[arg(long, default_value_t = 25.0)]
    years: f64,

    /// Load the scenario from a JSON file instead of the flags above
    #[arg(long, conflicts_with_all = ["principal", "rate", "years"])]
    scenario: Option<PathBuf>,

    /// Emit the payment schedule as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let terms = match &cli.scenario {
        Some(path) => LoanTerms::from_json_file(path)
            .with_context(|| format!("failed to load scenario from {}", path.display()))?,
        None => LoanTerms::new(cli.principal, cli.rate, cli.years)?,
    };

    let schedule = terms.payment_schedule()?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&schedule)?);
        return Ok(());
    }

    println!(
        "Payments for ${:.2} at {}% over {} years:\n",
        terms.principal, terms.annual_rate_pct, terms.amortization_years
    );
    println!("Monthly Payment: ${:.2}", schedule.monthly);
    println!("Semi-monthly Payment: ${:.2}", schedule.semi_monthly);
    println!("Bi-weekly Payment: ${:.2}", schedule.bi_weekly);
    println!("Weekly Payment: ${:.2}", schedule.weekly);
    println!("Rapid Bi-weekly Payment: ${:.2}", schedule.rapid_bi_weekly);
    println!("Rapid Weekly Payment: ${:.2}", schedule.rapid_weekly);
    Ok(())
}
