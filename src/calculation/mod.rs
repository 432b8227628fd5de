//! Calculation logic for the payroll engine.
//!
//! This module contains all the calculation functions for determining a
//! month's payroll: hourly rate resolution, base salary, the overtime,
//! night, holiday, and weekly-holiday premiums, the four statutory
//! insurance deductions, freelance flat withholding, the withholding
//! income tax engine, and the orchestrating payroll calculator.

mod base_salary;
mod freelance;
mod holiday_work;
mod hourly_rate;
mod income_tax;
mod insurance;
mod night_work;
mod overtime;
mod payroll;
mod rounding;
mod weekly_holiday;

pub use base_salary::calculate_base_salary;
pub use freelance::{FreelanceWithholding, calculate_freelance_withholding};
pub use holiday_work::{HOLIDAY_TIER_THRESHOLD_HOURS, calculate_holiday_pay};
pub use hourly_rate::{WEEKS_PER_MONTH, resolve_hourly_rate};
pub use income_tax::{IncomeTaxEngine, TaxAssessment, child_tax_credit};
pub use insurance::{InsuranceDeductions, calculate_insurance};
pub use night_work::calculate_night_pay;
pub use overtime::calculate_overtime_pay;
pub use payroll::PayrollCalculator;
pub use rounding::{round_won, truncate_to_ten_won};
pub use weekly_holiday::{MIN_WEEKLY_HOURS, calculate_weekly_holiday_pay};
