//! Holiday work premium calculation.

use rust_decimal::Decimal;

use super::rounding::round_won;

/// Holiday hours at or below this threshold pay 1.5×; hours beyond it pay 2×.
pub const HOLIDAY_TIER_THRESHOLD_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

const FIRST_TIER_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);
const SECOND_TIER_MULTIPLIER: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Calculates the tiered holiday work premium for the month.
///
/// The first eight holiday hours pay time and a half, every hour beyond
/// eight pays double time. Each tier is rounded to a whole won separately
/// before the two are summed. Employers below the five-worker threshold
/// are exempt and the premium is zero.
pub fn calculate_holiday_pay(
    hourly_rate: Decimal,
    holiday_hours: Decimal,
    employer_has_five_or_more: bool,
) -> Decimal {
    if !employer_has_five_or_more || holiday_hours <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let first_tier_hours = holiday_hours.min(HOLIDAY_TIER_THRESHOLD_HOURS);
    let second_tier_hours = (holiday_hours - HOLIDAY_TIER_THRESHOLD_HOURS).max(Decimal::ZERO);

    let first_tier = round_won(hourly_rate * FIRST_TIER_MULTIPLIER * first_tier_hours);
    let second_tier = round_won(hourly_rate * SECOND_TIER_MULTIPLIER * second_tier_hours);
    first_tier + second_tier
}
