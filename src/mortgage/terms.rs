//! Loan terms, periodic rate derivation, and payment computation.
//!
//! The nominal annual rate follows the Canadian mortgage convention of
//! semi-annual compounding: the semi-annual compound factor `1 + d/2` is
//! raised to the fractional power matching how many sub-periods fit in a
//! half year, giving the effective rate per payment period.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FincalcError, Result};
use crate::mortgage::payments::{annuity_payment, PaymentFrequency, PaymentSchedule};

/// One loan scenario: principal, nominal annual rate, amortization horizon.
///
/// Validated at construction; immutable afterwards. Periodic rates are
/// derived on demand rather than stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount borrowed, in currency units
    pub principal: f64,
    /// Nominal annual rate as a percent (5.5 means 5.5%), compounded semi-annually
    pub annual_rate_pct: f64,
    /// Amortization period in years; fractional years are allowed
    pub amortization_years: f64,
}

impl LoanTerms {
    pub fn new(principal: f64, annual_rate_pct: f64, amortization_years: f64) -> Result<Self> {
        let terms = Self {
            principal,
            annual_rate_pct,
            amortization_years,
        };
        terms.validate()?;
        Ok(terms)
    }

    /// Load a scenario from a JSON file and validate it
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let terms: LoanTerms = serde_json::from_str(&text)?;
        terms.validate()?;
        Ok(terms)
    }

    fn validate(&self) -> Result<()> {
        if !self.principal.is_finite() || self.principal <= 0.0 {
            return Err(FincalcError::InvalidTerms(format!(
                "principal must be positive, got {}",
                self.principal
            )));
        }
        if !self.amortization_years.is_finite() || self.amortization_years <= 0.0 {
            return Err(FincalcError::InvalidTerms(format!(
                "amortization period must be positive, got {} years",
                self.amortization_years
            )));
        }
        if !self.annual_rate_pct.is_finite() {
            return Err(FincalcError::InvalidTerms(format!(
                "annual rate must be finite, got {}",
                self.annual_rate_pct
            )));
        }
        // At -200% the semi-annual factor 1 + d/2 hits zero and the
        // fractional power is undefined over the reals
        if 1.0 + self.decimal_rate() / 2.0 <= 0.0 {
            return Err(FincalcError::InvalidRate(self.annual_rate_pct));
        }
        Ok(())
    }

    /// Nominal annual rate as a decimal (5.5% -> 0.055)
    fn decimal_rate(&self) -> f64 {
        self.annual_rate_pct / 100.0
    }

    /// Effective rate per payment period: `(1 + d/2)^(2/p) - 1` for `p`
    /// periods per year. Monthly works out to `(1 + d/2)^(1/6) - 1`,
    /// semi-monthly to `^(1/12)`, bi-weekly to `^(1/13)`, weekly to `^(1/26)`.
    pub fn periodic_rate(&self, frequency: PaymentFrequency) -> Result<f64> {
        let half_year_factor = 1.0 + self.decimal_rate() / 2.0;
        let exponent = 2.0 / frequency.periods_per_year() as f64;
        let rate = half_year_factor.powf(exponent) - 1.0;
        if rate < 0.0 {
            return Err(FincalcError::InvalidRate(rate));
        }
        Ok(rate)
    }

    /// Number of payments over the amortization horizon
    pub fn period_count(&self, frequency: PaymentFrequency) -> f64 {
        self.amortization_years * frequency.periods_per_year() as f64
    }

    /// Annuity payment at one frequency.
    ///
    /// A derived rate of exactly zero (nominal rate 0%) is an error for
    /// every frequency; the degenerate `principal / n` schedule is not
    /// offered.
    pub fn payment(&self, frequency: PaymentFrequency) -> Result<f64> {
        let rate = self.periodic_rate(frequency)?;
        if rate == 0.0 {
            return Err(FincalcError::ZeroRatePayment(frequency.label()));
        }
        Ok(annuity_payment(
            self.principal,
            rate,
            self.period_count(frequency),
        ))
    }

    /// All six payment amounts: the four annuity payments plus the rapid
    /// bi-weekly (monthly / 2) and rapid weekly (monthly / 4) variants
    pub fn payment_schedule(&self) -> Result<PaymentSchedule> {
        let monthly = self.payment(PaymentFrequency::Monthly)?;
        let semi_monthly = self.payment(PaymentFrequency::SemiMonthly)?;
        let bi_weekly = self.payment(PaymentFrequency::BiWeekly)?;
        let weekly = self.payment(PaymentFrequency::Weekly)?;

        Ok(PaymentSchedule {
            monthly,
            semi_monthly,
            bi_weekly,
            weekly,
            rapid_bi_weekly: monthly / 2.0,
            rapid_weekly: monthly / 4.0,
        })
    }
}
