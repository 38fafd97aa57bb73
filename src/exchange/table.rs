//! Latest USD/CAD rate extraction from a decoded rate table.
//!
//! Resolves the currency-pair column under header variation, reads the most
//! recent observation from the last data row, and validates the result.

use std::path::Path;

use log::debug;

use crate::error::{FincalcError, Result};
use crate::exchange::reader::{load_table, Table};

/// Which orientation of the pair resolved, and at which column index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PairColumn {
    UsdCad(usize),
    CadUsd(usize),
}

/// An immutable exchange-rate table with a resolved latest USD/CAD rate.
///
/// Rows are assumed chronologically ordered with the most recent last; no
/// date column is parsed. The rate convention is CAD per 1 USD: multiply
/// to go USD to CAD, divide to go the other way.
#[derive(Debug, Clone)]
pub struct RateTable {
    table: Table,
    pair_column: PairColumn,
    latest_usd_cad: f64,
}

impl RateTable {
    /// Load a rate file from disk and resolve its latest rate
    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_table(load_table(path)?)
    }

    /// Build from an already-decoded table
    pub fn from_table(table: Table) -> Result<Self> {
        if table.rows.is_empty() {
            return Err(FincalcError::EmptyTable);
        }

        let pair_column =
            Self::resolve_pair_column(&table.headers).ok_or(FincalcError::PairColumnNotFound)?;

        let last_row = table.rows.len() - 1;
        let latest_usd_cad = match pair_column {
            PairColumn::UsdCad(col) => {
                let rate = parse_rate_cell(table.cell(last_row, col))?;
                debug!(
                    "latest USD/CAD {rate} from column '{}'",
                    table.headers[col]
                );
                rate
            }
            PairColumn::CadUsd(col) => {
                let cad_usd = parse_rate_cell(table.cell(last_row, col))?;
                if cad_usd == 0.0 {
                    return Err(FincalcError::NonInvertibleRate);
                }
                debug!(
                    "latest USD/CAD {} inverted from CAD/USD column '{}'",
                    1.0 / cad_usd,
                    table.headers[col]
                );
                1.0 / cad_usd
            }
        };

        // Rejects non-positive values and NaN in one comparison
        if !(latest_usd_cad > 0.0) {
            return Err(FincalcError::InvalidRate(latest_usd_cad));
        }

        Ok(Self {
            table,
            pair_column,
            latest_usd_cad,
        })
    }

    /// Latest USD/CAD rate (CAD per 1 USD), guaranteed positive
    pub fn latest_usd_cad(&self) -> f64 {
        self.latest_usd_cad
    }

    /// Number of data rows in the underlying table
    pub fn row_count(&self) -> usize {
        self.table.rows.len()
    }

    /// Header text of the column the rate was read from
    pub fn pair_column_name(&self) -> &str {
        let (PairColumn::UsdCad(i) | PairColumn::CadUsd(i)) = self.pair_column;
        &self.table.headers[i]
    }

    /// Locate the currency-pair column. Both exact orientations are checked
    /// before the loose fallback so that a literal "CAD/USD" header is never
    /// mistaken for USD/CAD (the loose match cannot tell orientations apart).
    fn resolve_pair_column(headers: &[String]) -> Option<PairColumn> {
        if let Some(i) = find_exact(headers, "USD", "CAD") {
            return Some(PairColumn::UsdCad(i));
        }
        if let Some(i) = find_exact(headers, "CAD", "USD") {
            return Some(PairColumn::CadUsd(i));
        }
        if let Some(i) = find_loose(headers, "USD", "CAD") {
            return Some(PairColumn::UsdCad(i));
        }
        None
    }
}

/// Exact match of the literal "BASE/QUOTE" form, post-trim
fn find_exact(headers: &[String], base: &str, quote: &str) -> Option<usize> {
    let wanted = format!("{base}/{quote}");
    headers.iter().position(|h| h.trim() == wanted)
}

/// Heuristic fallback: lower-cased, space-stripped header containing both
/// currency codes as substrings, in either order
fn find_loose(headers: &[String], base: &str, quote: &str) -> Option<usize> {
    let base = base.to_ascii_lowercase();
    let quote = quote.to_ascii_lowercase();
    headers.iter().position(|h| {
        let low = h.to_ascii_lowercase().replace(' ', "");
        low.contains(&base) && low.contains(&quote)
    })
}

/// Coerce a raw cell to a rate value. An empty cell becomes NaN and is
/// rejected by the positivity check; non-empty non-numeric text is its own
/// error so the offending cell is reported verbatim.
fn parse_rate_cell(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(f64::NAN);
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| FincalcError::RateNotNumeric(trimmed.to_string()))
}
