//! Weekly holiday allowance calculation.

use rust_decimal::Decimal;

use crate::models::{MonthlyWorkRecord, WorkerProfile};

use super::rounding::round_won;

/// Minimum contractual weekly hours before the allowance accrues.
pub const MIN_WEEKLY_HOURS: Decimal = Decimal::from_parts(15, 0, 0, false, 0);

const WORKDAYS_PER_WEEK: Decimal = Decimal::from_parts(5, 0, 0, false, 0);
const FLAT_WEEKS: Decimal = Decimal::from_parts(4, 0, 0, false, 0);

/// Calculates the weekly holiday allowance for the month.
///
/// One paid rest day accrues per full week worked, priced at a day's
/// wages (`weekly_hours / 5` hours at the hourly rate). The allowance
/// is zero for monthly workers, whose salary already includes it, and
/// for anyone contracted under [`MIN_WEEKLY_HOURS`] a week. Freelance
/// workers accrue per the recorded number of weeks; everyone else is
/// settled on a flat four-week month.
pub fn calculate_weekly_holiday_pay(
    worker: &WorkerProfile,
    record: &MonthlyWorkRecord,
    hourly_rate: Decimal,
) -> Decimal {
    if worker.is_monthly_worker() || record.weekly_hours < MIN_WEEKLY_HOURS {
        return Decimal::ZERO;
    }

    let weeks = if worker.is_freelance() {
        Decimal::from(record.week_count)
    } else {
        FLAT_WEEKS
    };
    let daily_hours = record.weekly_hours / WORKDAYS_PER_WEEK;
    round_won(hourly_rate * daily_hours * weeks)
}
