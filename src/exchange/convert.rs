//! Currency and conversion between USD and CAD

use std::fmt;

use crate::error::{FincalcError, Result};
use crate::exchange::table::RateTable;

/// The two currencies the converter supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Usd,
    Cad,
}

impl Currency {
    /// Parse a currency code, tolerant of case and surrounding whitespace
    pub fn from_code(code: &str) -> Result<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "CAD" => Ok(Currency::Cad),
            other => Err(FincalcError::UnsupportedCurrency(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Cad => "CAD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stateless converter over a resolved rate table.
///
/// Borrows the table; every conversion is pure given its latest rate.
#[derive(Debug, Clone, Copy)]
pub struct CurrencyConverter<'a> {
    rates: &'a RateTable,
}

impl<'a> CurrencyConverter<'a> {
    pub fn new(rates: &'a RateTable) -> Self {
        Self { rates }
    }

    /// Convert `amount` between USD and CAD using the latest USD/CAD rate.
    ///
    /// Same-currency requests return the amount unchanged without touching
    /// the rate; any non-identity pair other than {USD, CAD} is rejected.
    /// No rounding is applied; display precision is the caller's concern.
    pub fn convert(&self, amount: f64, from_currency: &str, to_currency: &str) -> Result<f64> {
        let from_code = from_currency.trim().to_ascii_uppercase();
        let to_code = to_currency.trim().to_ascii_uppercase();
        if from_code == to_code {
            return Ok(amount);
        }

        let from = Currency::from_code(&from_code)?;
        let to = Currency::from_code(&to_code)?;
        let rate = self.rates.latest_usd_cad();
        match (from, to) {
            (Currency::Usd, Currency::Cad) => Ok(amount * rate),
            (Currency::Cad, Currency::Usd) => Ok(amount / rate),
            // Same currency is handled by the code comparison above
            _ => Ok(amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange::reader::Table;
    use approx::assert_relative_eq;

    fn rates(usd_cad: &str) -> RateTable {
        RateTable::from_table(Table {
            headers: vec!["Date".into(), "USD/CAD".into()],
            rows: vec![vec!["2024-01-03".into(), usd_cad.into()]],
        })
        .unwrap()
    }

    #[test]
    fn usd_to_cad_multiplies() {
        let rates = rates("1.35");
        let converter = CurrencyConverter::new(&rates);
        assert_relative_eq!(
            converter.convert(100.0, "USD", "CAD").unwrap(),
            135.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn cad_to_usd_divides() {
        let rates = rates("1.35");
        let converter = CurrencyConverter::new(&rates);
        assert_relative_eq!(
            converter.convert(135.0, "CAD", "USD").unwrap(),
            100.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn round_trip_recovers_the_amount() {
        let rates = rates("1.372819");
        let converter = CurrencyConverter::new(&rates);
        for amount in [0.01, 1.0, 250.50, 1_000_000.0] {
            let there = converter.convert(amount, "USD", "CAD").unwrap();
            let back = converter.convert(there, "CAD", "USD").unwrap();
            assert_relative_eq!(back, amount, max_relative = 1e-12);
        }
    }

    #[test]
    fn identity_conversion_bypasses_the_rate() {
        let rates = rates("1.35");
        let converter = CurrencyConverter::new(&rates);
        assert_eq!(converter.convert(42.5, "USD", "USD").unwrap(), 42.5);
        assert_eq!(converter.convert(42.5, "CAD", "CAD").unwrap(), 42.5);
        // Identity holds even for codes the converter otherwise rejects
        assert_eq!(converter.convert(42.5, "EUR", "eur").unwrap(), 42.5);
    }

    #[test]
    fn codes_are_case_and_whitespace_insensitive() {
        let rates = rates("1.35");
        let converter = CurrencyConverter::new(&rates);
        assert_relative_eq!(
            converter.convert(100.0, " usd ", "cad").unwrap(),
            135.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn unsupported_pair_is_rejected() {
        let rates = rates("1.35");
        let converter = CurrencyConverter::new(&rates);
        let err = converter.convert(100.0, "EUR", "CAD").unwrap_err();
        assert!(matches!(err, FincalcError::UnsupportedCurrency(c) if c == "EUR"));
    }

    #[test]
    fn currency_parses_and_displays() {
        assert_eq!(Currency::from_code(" cad ").unwrap(), Currency::Cad);
        assert_eq!(Currency::Usd.to_string(), "USD");
        assert!(Currency::from_code("GBP").is_err());
    }
}
