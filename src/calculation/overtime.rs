//! Overtime premium calculation.

use rust_decimal::Decimal;

use super::rounding::round_won;

/// Statutory overtime multiplier of 1.5 applied to the hourly rate.
const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Calculates the overtime premium for the month.
///
/// Employers below the five-worker threshold are exempt from premium pay,
/// so the premium collapses to zero regardless of hours worked. Otherwise
/// the pay is `round(hourly_rate × 1.5 × overtime_hours)`.
pub fn calculate_overtime_pay(
    hourly_rate: Decimal,
    overtime_hours: Decimal,
    employer_has_five_or_more: bool,
) -> Decimal {
    if !employer_has_five_or_more || overtime_hours <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    round_won(hourly_rate * OVERTIME_MULTIPLIER * overtime_hours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_overtime_pays_time_and_a_half() {
        // 10,000 × 1.5 × 20 = 300,000
        let pay = calculate_overtime_pay(dec("10000"), dec("20"), true);
        assert_eq!(pay, dec("300000"));
    }

    #[test]
    fn test_small_employer_is_exempt() {
        let pay = calculate_overtime_pay(dec("10000"), dec("20"), false);
        assert_eq!(pay, Decimal::ZERO);
    }

    #[test]
    fn test_zero_hours_earn_nothing() {
        let pay = calculate_overtime_pay(dec("10000"), Decimal::ZERO, true);
        assert_eq!(pay, Decimal::ZERO);
    }

    #[test]
    fn test_fractional_result_rounds_to_whole_won() {
        // 17,261 × 1.5 × 10.5 = 271,860.75 → 271,861
        let pay = calculate_overtime_pay(dec("17261"), dec("10.5"), true);
        assert_eq!(pay, dec("271861"));
    }
}
