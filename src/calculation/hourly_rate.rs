//! Hourly base rate resolution.
//!
//! This module derives the hourly rate every premium component is priced
//! from: monthly workers have it computed from their salary over the
//! average month, hourly workers use their input rate unchanged.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{MonthlyWorkRecord, WorkerProfile};

use super::rounding::round_won;

/// Average number of weeks per month: 365.25 / 12 / 7.
pub const WEEKS_PER_MONTH: Decimal = Decimal::from_parts(4_345, 0, 0, false, 3);

/// Resolves a worker's hourly base rate.
///
/// For a monthly worker (see [`WorkerProfile::is_monthly_worker`]) the rate
/// is `monthly_salary / (weekly_hours × 4.345)` rounded to a whole won. For
/// everyone else the input hourly rate is returned unchanged.
///
/// # Errors
///
/// Returns `InvalidInput` naming `weekly_hours` when a monthly salary must
/// be converted but the record carries no positive weekly hours; the engine
/// does not fall back to a zero rate.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::resolve_hourly_rate;
/// use payroll_engine::models::{
///     EmploymentType, MonthlyWorkRecord, SalaryType, WorkerProfile,
/// };
/// use rust_decimal::Decimal;
///
/// let worker = WorkerProfile {
///     salary_type: SalaryType::Monthly,
///     employment_type: EmploymentType::Regular,
///     monthly_salary: Decimal::from(3_000_000),
///     hourly_rate: Decimal::ZERO,
///     normal_hours: Decimal::from(209),
///     food_allowance: Decimal::ZERO,
///     car_allowance: Decimal::ZERO,
///     tax_free_meal: Decimal::ZERO,
///     tax_free_car_maintenance: Decimal::ZERO,
///     other_tax_free: Decimal::ZERO,
///     has_national_pension: true,
///     has_health_insurance: true,
///     has_employment_insurance: true,
///     tax_dependents: 1,
///     children_count: 0,
///     income_tax_rate_override: None,
/// };
/// let record = MonthlyWorkRecord::default();
///
/// // 3,000,000 / (40 × 4.345) = 17,261.22... → 17,261
/// let rate = resolve_hourly_rate(&worker, &record).unwrap();
/// assert_eq!(rate, Decimal::from(17_261));
/// ```
pub fn resolve_hourly_rate(
    worker: &WorkerProfile,
    record: &MonthlyWorkRecord,
) -> EngineResult<Decimal> {
    if !worker.is_monthly_worker() {
        return Ok(worker.hourly_rate);
    }

    if record.weekly_hours <= Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "weekly_hours".to_string(),
            message: "must be positive to derive an hourly rate from a monthly salary".to_string(),
        });
    }

    let monthly_hours = record.weekly_hours * WEEKS_PER_MONTH;
    Ok(round_won(worker.monthly_salary / monthly_hours))
}
