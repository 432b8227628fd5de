//! The four statutory insurance deductions.

use rust_decimal::Decimal;

use crate::config::InsuranceRates;
use crate::models::WorkerProfile;

use super::rounding::truncate_to_ten_won;

/// The worker's share of each statutory insurance scheme for one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsuranceDeductions {
    /// National pension contribution.
    pub national_pension: Decimal,
    /// Health insurance contribution.
    pub health_insurance: Decimal,
    /// Long-term care contribution, levied on the health premium.
    pub long_term_care: Decimal,
    /// Employment insurance contribution.
    pub employment_insurance: Decimal,
}

impl InsuranceDeductions {
    /// Sum of all four contributions.
    pub fn total(&self) -> Decimal {
        self.national_pension + self.health_insurance + self.long_term_care
            + self.employment_insurance
    }
}

/// Calculates the worker's statutory insurance deductions on the given
/// insurance base.
///
/// Each premium is truncated down to 10 won. Long-term care is a rate on
/// the already-truncated health premium, not on the base. Any scheme the
/// worker has opted out of deducts zero, which also zeroes long-term care
/// when health insurance is off.
pub fn calculate_insurance(
    worker: &WorkerProfile,
    insurance_base: Decimal,
    rates: &InsuranceRates,
) -> InsuranceDeductions {
    let national_pension = if worker.has_national_pension {
        truncate_to_ten_won(insurance_base * rates.national_pension_rate)
    } else {
        Decimal::ZERO
    };

    let (health_insurance, long_term_care) = if worker.has_health_insurance {
        let health = truncate_to_ten_won(insurance_base * rates.health_insurance_rate);
        let care = truncate_to_ten_won(health * rates.long_term_care_rate);
        (health, care)
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };

    let employment_insurance = if worker.has_employment_insurance {
        truncate_to_ten_won(insurance_base * rates.employment_insurance_rate)
    } else {
        Decimal::ZERO
    };

    InsuranceDeductions {
        national_pension,
        health_insurance,
        long_term_care,
        employment_insurance,
    }
}
