//! Exchange-rate table ingestion and USD/CAD currency conversion

pub mod convert;
pub mod reader;
pub mod table;

pub use convert::{Currency, CurrencyConverter};
pub use reader::{load_table, Table};
pub use table::RateTable;
