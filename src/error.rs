//! Error types for fincalc

use std::path::PathBuf;
use thiserror::Error;

/// Main error type covering both the exchange and mortgage components
#[derive(Error, Debug)]
pub enum FincalcError {
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("could not read '{0}' as CSV or Excel; re-export it as a UTF-8 CSV or .xlsx")]
    TableUnreadable(PathBuf),

    #[error("the rate table has no data rows")]
    EmptyTable,

    #[error("could not find a USD/CAD or CAD/USD column in the rate table")]
    PairColumnNotFound,

    #[error("CAD/USD latest value is zero; cannot invert")]
    NonInvertibleRate,

    #[error("rate cell is not numeric: '{0}'")]
    RateNotNumeric(String),

    #[error("invalid rate: {0}")]
    InvalidRate(f64),

    #[error("unsupported currency '{0}': only USD and CAD are supported")]
    UnsupportedCurrency(String),

    #[error("invalid loan terms: {0}")]
    InvalidTerms(String),

    #[error("{0} periodic rate is zero; the annuity payment is undefined")]
    ZeroRatePayment(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid scenario file: {0}")]
    Scenario(#[from] serde_json::Error),
}

/// Result type alias for fincalc operations
pub type Result<T> = std::result::Result<T, FincalcError>;
