//! Monthly work record model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One month of hours worked and one-off amounts for a single worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyWorkRecord {
    /// Normal hours worked this month; zero falls back to the profile's
    /// contractual hours for an hourly worker's base salary.
    #[serde(default)]
    pub normal_hours: Decimal,
    /// Overtime hours worked this month.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Night (22:00-06:00) hours worked this month.
    #[serde(default)]
    pub night_hours: Decimal,
    /// Statutory-holiday hours worked this month.
    #[serde(default)]
    pub holiday_hours: Decimal,
    /// Contractual weekly hours.
    #[serde(default = "default_weekly_hours")]
    pub weekly_hours: Decimal,
    /// Weeks of full attendance in the month (0 to 5).
    #[serde(default = "default_week_count")]
    pub week_count: u32,
    /// One-off bonus paid this month.
    #[serde(default)]
    pub bonus: Decimal,
    /// Up to three free-form additional payments.
    #[serde(default = "zero_amounts")]
    pub additional_pay: [Decimal; 3],
    /// Up to three free-form additional deductions.
    #[serde(default = "zero_amounts")]
    pub additional_deduct: [Decimal; 3],
}

fn default_weekly_hours() -> Decimal {
    Decimal::from(40)
}

fn default_week_count() -> u32 {
    4
}

fn zero_amounts() -> [Decimal; 3] {
    [Decimal::ZERO; 3]
}

impl MonthlyWorkRecord {
    /// Sum of the free-form additional payments.
    pub fn additional_pay_total(&self) -> Decimal {
        self.additional_pay.iter().copied().sum()
    }

    /// Sum of the free-form additional deductions.
    pub fn additional_deduct_total(&self) -> Decimal {
        self.additional_deduct.iter().copied().sum()
    }
}

impl Default for MonthlyWorkRecord {
    fn default() -> Self {
        Self {
            normal_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            night_hours: Decimal::ZERO,
            holiday_hours: Decimal::ZERO,
            weekly_hours: default_weekly_hours(),
            week_count: default_week_count(),
            bonus: Decimal::ZERO,
            additional_pay: zero_amounts(),
            additional_deduct: zero_amounts(),
        }
    }
}
