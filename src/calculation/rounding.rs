//! Korean currency rounding helpers.
//!
//! Pay components are rounded to the nearest whole won; every statutory
//! deduction is truncated down to a multiple of 10 won, never rounded up.

use rust_decimal::{Decimal, RoundingStrategy};

const TEN_WON: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Rounds an amount to the nearest whole won, ties to even.
pub fn round_won(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
}

/// Truncates an amount down to the nearest lower multiple of 10 won.
pub fn truncate_to_ten_won(amount: Decimal) -> Decimal {
    (amount / TEN_WON).floor() * TEN_WON
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_won_rounds_to_nearest() {
        assert_eq!(round_won(dec("17261.22")), dec("17261"));
        assert_eq!(round_won(dec("17261.78")), dec("17262"));
    }

    #[test]
    fn test_round_won_ties_to_even() {
        assert_eq!(round_won(dec("12.5")), dec("12"));
        assert_eq!(round_won(dec("13.5")), dec("14"));
    }

    #[test]
    fn test_truncate_to_ten_won_always_floors() {
        assert_eq!(truncate_to_ten_won(dec("135004")), dec("135000"));
        assert_eq!(truncate_to_ten_won(dec("135009.99")), dec("135000"));
        assert_eq!(truncate_to_ten_won(dec("135000")), dec("135000"));
    }

    #[test]
    fn test_truncate_to_ten_won_zero() {
        assert_eq!(truncate_to_ten_won(Decimal::ZERO), Decimal::ZERO);
        assert_eq!(truncate_to_ten_won(dec("9")), Decimal::ZERO);
    }
}
