//! Canadian mortgage payment calculations

pub mod payments;
pub mod terms;

pub use payments::{annuity_payment, PaymentFrequency, PaymentSchedule};
pub use terms::LoanTerms;
