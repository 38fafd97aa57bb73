//! Payment frequencies, the annuity formula, and the payment schedule record

use serde::Serialize;
use std::fmt;

/// Payment frequencies supported by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentFrequency {
    Monthly,
    SemiMonthly,
    BiWeekly,
    Weekly,
}

impl PaymentFrequency {
    /// All frequencies, in schedule order
    pub const ALL: [PaymentFrequency; 4] = [
        PaymentFrequency::Monthly,
        PaymentFrequency::SemiMonthly,
        PaymentFrequency::BiWeekly,
        PaymentFrequency::Weekly,
    ];

    /// Payments made per year at this frequency
    pub fn periods_per_year(&self) -> u32 {
        match self {
            PaymentFrequency::Monthly => 12,
            PaymentFrequency::SemiMonthly => 24,
            PaymentFrequency::BiWeekly => 26,
            PaymentFrequency::Weekly => 52,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentFrequency::Monthly => "monthly",
            PaymentFrequency::SemiMonthly => "semi-monthly",
            PaymentFrequency::BiWeekly => "bi-weekly",
            PaymentFrequency::Weekly => "weekly",
        }
    }
}

impl fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Present-value-of-annuity payment: the fixed payment that fully repays
/// `principal` at `periodic_rate` per period over `periods` periods.
///
/// Callers must reject a zero rate before calling; the formula divides by it.
pub fn annuity_payment(principal: f64, periodic_rate: f64, periods: f64) -> f64 {
    principal / ((1.0 - (1.0 + periodic_rate).powf(-periods)) / periodic_rate)
}

/// The six payment amounts for one loan scenario, in fixed output order.
///
/// The rapid variants are derived from the monthly payment (half and a
/// quarter of it), not solved as independent annuities.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentSchedule {
    pub monthly: f64,
    pub semi_monthly: f64,
    pub bi_weekly: f64,
    pub weekly: f64,
    pub rapid_bi_weekly: f64,
    pub rapid_weekly: f64,
}
