//! Flat business-income withholding for freelance workers.

use rust_decimal::Decimal;

use crate::config::FreelanceRates;

use super::rounding::truncate_to_ten_won;

/// The two flat withholdings applied to freelance income.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreelanceWithholding {
    /// Business income tax withheld at the flat rate.
    pub income_tax: Decimal,
    /// Local income tax withheld at the flat rate.
    pub local_income_tax: Decimal,
}

impl FreelanceWithholding {
    /// Sum of both withholdings.
    pub fn total(&self) -> Decimal {
        self.income_tax + self.local_income_tax
    }
}

/// Calculates the flat withholding on a freelance worker's taxable income.
///
/// Freelance pay is business income: no insurance, no withholding table,
/// just two flat rates (3% national, 0.3% local by default) applied to the
/// whole taxable amount. Both results are truncated down to 10 won, and
/// the local tax is a rate on the income, not on the national tax.
pub fn calculate_freelance_withholding(
    taxable_income: Decimal,
    rates: &FreelanceRates,
) -> FreelanceWithholding {
    FreelanceWithholding {
        income_tax: truncate_to_ten_won(taxable_income * rates.income_tax_rate),
        local_income_tax: truncate_to_ten_won(taxable_income * rates.local_income_tax_rate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rates() -> FreelanceRates {
        FreelanceRates {
            income_tax_rate: dec("0.03"),
            local_income_tax_rate: dec("0.003"),
        }
    }

    #[test]
    fn test_flat_rates_on_three_million() {
        let withholding = calculate_freelance_withholding(dec("3000000"), &rates());
        assert_eq!(withholding.income_tax, dec("90000"));
        assert_eq!(withholding.local_income_tax, dec("9000"));
        assert_eq!(withholding.total(), dec("99000"));
    }

    #[test]
    fn test_results_are_truncated_to_ten_won() {
        // 1,234,567 × 0.03 = 37,037.01 → 37,030
        // 1,234,567 × 0.003 = 3,703.701 → 3,700
        let withholding = calculate_freelance_withholding(dec("1234567"), &rates());
        assert_eq!(withholding.income_tax, dec("37030"));
        assert_eq!(withholding.local_income_tax, dec("3700"));
    }

    #[test]
    fn test_zero_income_withholds_nothing() {
        let withholding = calculate_freelance_withholding(Decimal::ZERO, &rates());
        assert_eq!(withholding.total(), Decimal::ZERO);
    }
}
