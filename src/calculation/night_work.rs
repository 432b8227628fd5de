//! Night work premium calculation.

use rust_decimal::Decimal;

use super::rounding::round_won;

/// Night work adds half the hourly rate on top of pay already counted in
/// the base hours, so the premium multiplier is 0.5, not 1.5.
const NIGHT_MULTIPLIER: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Calculates the night work premium (22:00 to 06:00) for the month.
///
/// Exempt for employers below the five-worker threshold. Otherwise the
/// premium is `round(hourly_rate × 0.5 × night_hours)`.
pub fn calculate_night_pay(
    hourly_rate: Decimal,
    night_hours: Decimal,
    employer_has_five_or_more: bool,
) -> Decimal {
    if !employer_has_five_or_more || night_hours <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    round_won(hourly_rate * NIGHT_MULTIPLIER * night_hours)
}
