//! Currency conversion console tool.
//!
//! Reads a Bank of Canada exchange-rate table (CSV or Excel), reports the
//! latest USD/CAD rate from its last row, and converts an amount between
//! USD and CAD. Arguments left off the command line are prompted for.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fincalc::{CurrencyConverter, RateTable};

/// Rate files picked up automatically when no path is given
const DEFAULT_CANDIDATES: [&str; 2] = [
    "BankOfCanadaExchangeRates.xlsx",
    "BankOfCanadaExchangeRates.csv",
];

#[derive(Parser)]
#[command(version, about = "Convert between USD and CAD using a Bank of Canada rate table")]
struct Cli {
    /// Path to the rate table (.csv, .xlsx, or .xls)
    path: Option<PathBuf>,

    /// Amount to convert
    #[arg(long)]
    amount: Option<f64>,

    /// Currency to convert from (USD or CAD)
    #[arg(long)]
    from: Option<String>,

    /// Currency to convert to (USD or CAD)
    #[arg(long)]
    to: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let path = match cli.path {
        Some(path) => path,
        None => DEFAULT_CANDIDATES
            .iter()
            .map(PathBuf::from)
            .find(|p| p.exists())
            .with_context(|| {
                format!(
                    "no rate file given; pass a path or place {} or {} in the current directory",
                    DEFAULT_CANDIDATES[0], DEFAULT_CANDIDATES[1]
                )
            })?,
    };

    let rates = RateTable::from_path(&path)?;
    println!(
        "\nLatest USD/CAD rate (from last row): {:.6}\n",
        rates.latest_usd_cad()
    );

    let amount = match cli.amount {
        Some(amount) => amount,
        None => prompt("Enter the amount you would like to convert: ")?
            .parse::<f64>()
            .context("the amount must be a number")?,
    };
    let from = match cli.from {
        Some(code) => code,
        None => prompt("What currency are you converting from? (USD or CAD): ")?,
    };
    let to = match cli.to {
        Some(code) => code,
        None => prompt("And what currency are you converting to? (USD or CAD): ")?,
    };

    let converter = CurrencyConverter::new(&rates);
    let result = converter.convert(amount, &from, &to)?;
    println!(
        "\n{:.2} {} = {:.2} {}\n",
        amount,
        from.trim().to_ascii_uppercase(),
        result,
        to.trim().to_ascii_uppercase()
    );
    Ok(())
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
