//! Calculation result models for the payroll engine.
//!
//! This module contains the [`CalculationResult`] type and its associated
//! structures that capture all outputs from a payroll calculation: the pay
//! components, the deduction components, and the totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The individual gross pay components of a payroll calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    /// Base salary: the monthly salary, or hourly rate times normal hours.
    pub base_salary: Decimal,
    /// Overtime premium at 150% of the hourly rate.
    pub overtime_pay: Decimal,
    /// Night work premium at 50% of the hourly rate.
    pub night_pay: Decimal,
    /// Holiday work premium, tiered at eight hours.
    pub holiday_pay: Decimal,
    /// Weekly-holiday (paid rest day) pay for hourly workers.
    pub weekly_holiday_pay: Decimal,
    /// One-off bonus.
    pub bonus: Decimal,
    /// Up to three free-form additional payments.
    pub additional_pay: [Decimal; 3],
    /// Taxable fixed food allowance.
    pub food_allowance: Decimal,
    /// Taxable fixed car allowance.
    pub car_allowance: Decimal,
}

impl PaymentBreakdown {
    /// Sum of all pay components.
    pub fn total(&self) -> Decimal {
        self.base_salary
            + self.overtime_pay
            + self.night_pay
            + self.holiday_pay
            + self.weekly_holiday_pay
            + self.bonus
            + self.additional_pay.iter().copied().sum::<Decimal>()
            + self.food_allowance
            + self.car_allowance
    }
}

/// The individual deduction components of a payroll calculation.
///
/// For freelance workers the four insurance amounts are zero and the income
/// tax fields carry the flat withholding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    /// National pension contribution.
    pub national_pension: Decimal,
    /// Health insurance premium.
    pub health_insurance: Decimal,
    /// Long-term care premium, a fraction of the health premium.
    pub long_term_care: Decimal,
    /// Employment insurance contribution.
    pub employment_insurance: Decimal,
    /// Withholding income tax.
    pub income_tax: Decimal,
    /// Local income tax (10% of the income tax).
    pub local_income_tax: Decimal,
    /// Up to three free-form additional deductions.
    pub additional_deduct: [Decimal; 3],
}

impl DeductionBreakdown {
    /// Sum of all deduction components.
    pub fn total(&self) -> Decimal {
        self.national_pension
            + self.health_insurance
            + self.long_term_care
            + self.employment_insurance
            + self.income_tax
            + self.local_income_tax
            + self.additional_deduct.iter().copied().sum::<Decimal>()
    }
}

/// The complete result of a payroll calculation.
///
/// A pure output value: never mutated after creation and never persisted by
/// the engine. `total_payment` always equals `payments.total()`,
/// `total_deduction` always equals `deductions.total()`, and `net_payment`
/// is their difference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The resolved hourly base rate used for all premium components.
    pub hourly_rate: Decimal,
    /// The gross pay components.
    pub payments: PaymentBreakdown,
    /// The deduction components.
    pub deductions: DeductionBreakdown,
    /// Sum of the non-taxable amounts excluded from both bases.
    pub total_tax_free: Decimal,
    /// The insurance-eligible base: total payment minus tax-free amounts.
    pub insurance_base: Decimal,
    /// Sum of all pay components.
    pub total_payment: Decimal,
    /// Sum of all deduction components.
    pub total_deduction: Decimal,
    /// Total payment minus total deduction.
    pub net_payment: Decimal,
}
