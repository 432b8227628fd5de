//! Base salary calculation.

use rust_decimal::Decimal;

use crate::models::{MonthlyWorkRecord, WorkerProfile};

use super::rounding::round_won;

/// Calculates the month's base salary.
///
/// A monthly worker's base salary is the monthly salary verbatim. An hourly
/// worker earns `round(hourly_rate × normal_hours)`, where the hours come
/// from the month's record, falling back to the profile's contractual
/// `normal_hours` when the record carries none.
pub fn calculate_base_salary(
    worker: &WorkerProfile,
    record: &MonthlyWorkRecord,
    hourly_rate: Decimal,
) -> Decimal {
    if worker.is_monthly_worker() {
        return worker.monthly_salary;
    }

    let normal_hours = if record.normal_hours > Decimal::ZERO {
        record.normal_hours
    } else {
        worker.normal_hours
    };
    round_won(hourly_rate * normal_hours)
}
