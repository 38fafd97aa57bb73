//! fincalc — two independent financial calculation components:
//!
//! - [`exchange`]: reads a Bank of Canada style rate table (CSV or Excel),
//!   extracts the latest USD/CAD rate from the last row, and converts
//!   amounts between USD and CAD.
//! - [`mortgage`]: derives periodic effective rates from a nominal annual
//!   rate compounded semi-annually and computes annuity payments for the
//!   standard Canadian payment frequencies.
//!
//! Both components are synchronous libraries with no side effects; console
//! interaction lives in the `exchange` and `mortgage` binaries.

pub mod error;
pub mod exchange;
pub mod mortgage;

pub use error::{FincalcError, Result};
pub use exchange::{load_table, Currency, CurrencyConverter, RateTable, Table};
pub use mortgage::{annuity_payment, LoanTerms, PaymentFrequency, PaymentSchedule};
