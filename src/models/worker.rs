//! Worker profile model and related types.
//!
//! This module defines the WorkerProfile struct and the SalaryType and
//! EmploymentType enums for representing workers in the payroll system.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a worker's wage is quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryType {
    /// A fixed monthly salary; the hourly rate is derived from it.
    Monthly,
    /// A direct hourly rate.
    Hourly,
}

/// The worker's statutory employment regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    /// Regular employee: four-insurance deductions and progressive
    /// withholding income tax.
    Regular,
    /// Freelance (business-income) worker: flat 3.3% withholding instead of
    /// the four-insurance regime.
    Freelance,
}

/// A worker's wage and deduction profile, immutable per calculation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerProfile {
    /// How the wage is quoted (monthly salary or hourly rate).
    pub salary_type: SalaryType,
    /// The statutory employment regime.
    pub employment_type: EmploymentType,
    /// Monthly salary in won; authoritative for monthly workers.
    #[serde(default)]
    pub monthly_salary: Decimal,
    /// Direct hourly rate in won; authoritative for hourly workers.
    #[serde(default)]
    pub hourly_rate: Decimal,
    /// Contractual monthly base hours, used when a month's record carries none.
    #[serde(default = "default_normal_hours")]
    pub normal_hours: Decimal,
    /// Taxable fixed monthly food allowance.
    #[serde(default)]
    pub food_allowance: Decimal,
    /// Taxable fixed monthly car allowance.
    #[serde(default)]
    pub car_allowance: Decimal,
    /// Non-taxable meal amount, excluded from the tax and insurance bases.
    #[serde(default)]
    pub tax_free_meal: Decimal,
    /// Non-taxable car maintenance amount.
    #[serde(default)]
    pub tax_free_car_maintenance: Decimal,
    /// Other non-taxable monthly amounts.
    #[serde(default)]
    pub other_tax_free: Decimal,
    /// Whether the worker is enrolled in the national pension.
    #[serde(default = "default_true")]
    pub has_national_pension: bool,
    /// Whether the worker is enrolled in health insurance.
    #[serde(default = "default_true")]
    pub has_health_insurance: bool,
    /// Whether the worker is enrolled in employment insurance.
    #[serde(default = "default_true")]
    pub has_employment_insurance: bool,
    /// Count of persons eligible for the basic deduction, including the
    /// worker (at least 1).
    #[serde(default = "default_dependents")]
    pub tax_dependents: u32,
    /// Count of dependents aged 8 to 20, for the child tax credit.
    #[serde(default)]
    pub children_count: u32,
    /// Optional flat withholding percentage that bypasses the tax engine.
    #[serde(default)]
    pub income_tax_rate_override: Option<Decimal>,
}

fn default_normal_hours() -> Decimal {
    Decimal::from(209)
}

fn default_true() -> bool {
    true
}

fn default_dependents() -> u32 {
    1
}

impl WorkerProfile {
    /// Returns true if the worker is paid under the freelance regime.
    pub fn is_freelance(&self) -> bool {
        self.employment_type == EmploymentType::Freelance
    }

    /// Returns true if the worker's pay is governed by a monthly salary.
    ///
    /// A worker is a monthly worker when the salary type says so and a
    /// salary is present, or when no hourly rate was entered at all and a
    /// salary is present (tolerating a missing hourly-rate input).
    pub fn is_monthly_worker(&self) -> bool {
        (self.salary_type == SalaryType::Monthly && self.monthly_salary > Decimal::ZERO)
            || (self.hourly_rate == Decimal::ZERO && self.monthly_salary > Decimal::ZERO)
    }
}
