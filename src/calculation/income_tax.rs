//! Monthly withholding income tax.
//!
//! Tax below the table ceiling comes from the simplified withholding
//! schedule via [`TaxScheduleProvider`]; tax above it is built from the
//! schedule's baseline at the ceiling plus a progressive bracket formula
//! on the excess. Dependent counts beyond the table's last column are
//! extrapolated linearly, children reduce the result through a credit,
//! and the final amounts are truncated down to 10 won.

use rust_decimal::Decimal;

use crate::config::{BandTax, DEPENDENT_COLUMNS, TaxScheduleProvider};
use crate::error::EngineResult;

use super::rounding::truncate_to_ten_won;

/// 98% adjustment applied to the excess in the first three brackets.
const EXCESS_FACTOR: Decimal = Decimal::from_parts(98, 0, 0, false, 2);

const LOCAL_TAX_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 1);
const PERCENT: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

const BRACKET_14M: Decimal = Decimal::from_parts(14_000_000, 0, 0, false, 0);
const BRACKET_28M: Decimal = Decimal::from_parts(28_000_000, 0, 0, false, 0);
const BRACKET_30M: Decimal = Decimal::from_parts(30_000_000, 0, 0, false, 0);
const BRACKET_45M: Decimal = Decimal::from_parts(45_000_000, 0, 0, false, 0);
const BRACKET_87M: Decimal = Decimal::from_parts(87_000_000, 0, 0, false, 0);

const RATE_35: Decimal = Decimal::from_parts(35, 0, 0, false, 2);
const RATE_38: Decimal = Decimal::from_parts(38, 0, 0, false, 2);
const RATE_40: Decimal = Decimal::from_parts(40, 0, 0, false, 2);
const RATE_42: Decimal = Decimal::from_parts(42, 0, 0, false, 2);
const RATE_45: Decimal = Decimal::from_parts(45, 0, 0, false, 2);

const SURCHARGE_AT_CEILING: Decimal = Decimal::from_parts(25_000, 0, 0, false, 0);
const ACCUM_AT_14M: Decimal = Decimal::from_parts(1_397_000, 0, 0, false, 0);
const ACCUM_AT_28M: Decimal = Decimal::from_parts(6_610_600, 0, 0, false, 0);
const ACCUM_AT_30M: Decimal = Decimal::from_parts(7_394_600, 0, 0, false, 0);
const ACCUM_AT_45M: Decimal = Decimal::from_parts(13_394_600, 0, 0, false, 0);
const ACCUM_AT_87M: Decimal = Decimal::from_parts(31_034_600, 0, 0, false, 0);

const FIRST_CHILD_CREDIT: Decimal = Decimal::from_parts(12_500, 0, 0, false, 0);
const SECOND_CHILD_CREDIT: Decimal = Decimal::from_parts(29_160, 0, 0, false, 0);
const EXTRA_CHILD_CREDIT: Decimal = Decimal::from_parts(25_000, 0, 0, false, 0);

/// The withheld income tax and the local income tax riding on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxAssessment {
    /// Withheld national income tax.
    pub income_tax: Decimal,
    /// Local income tax, 10% of the national tax.
    pub local_income_tax: Decimal,
}

impl TaxAssessment {
    /// Sum of national and local tax.
    pub fn total(&self) -> Decimal {
        self.income_tax + self.local_income_tax
    }

    fn zero() -> Self {
        Self {
            income_tax: Decimal::ZERO,
            local_income_tax: Decimal::ZERO,
        }
    }
}

/// Monthly credit for children aged 8 to 20.
///
/// One child credits 12,500 won, two credit 29,160, and every child past
/// the second adds another 25,000.
pub fn child_tax_credit(children: u32) -> Decimal {
    match children {
        0 => Decimal::ZERO,
        1 => FIRST_CHILD_CREDIT,
        2 => SECOND_CHILD_CREDIT,
        n => SECOND_CHILD_CREDIT + EXTRA_CHILD_CREDIT * Decimal::from(n - 2),
    }
}

/// Assesses withholding income tax against a [`TaxScheduleProvider`].
pub struct IncomeTaxEngine<'a, P: TaxScheduleProvider> {
    schedule: &'a P,
}

impl<'a, P: TaxScheduleProvider> IncomeTaxEngine<'a, P> {
    /// Creates an engine assessing against the given schedule.
    pub fn new(schedule: &'a P) -> Self {
        Self { schedule }
    }

    /// Assesses the month's income tax and local income tax.
    ///
    /// When a flat rate override is supplied (in percent, e.g. `3.3`),
    /// the schedule is bypassed entirely and the tax is the flat rate on
    /// the whole income. Otherwise the tax comes from the schedule and
    /// bracket formula, extrapolated past the last dependent column,
    /// reduced by the child credit, and clamped at zero. Both amounts
    /// are truncated down to 10 won, and the local tax is 10% of the
    /// truncated national tax.
    ///
    /// # Errors
    ///
    /// Returns `TableLookupMiss` when the schedule cannot cover the
    /// lookup, for example a dependent count of zero.
    pub fn assess(
        &self,
        taxable_income: Decimal,
        dependents: u32,
        children: u32,
        rate_override: Option<Decimal>,
    ) -> EngineResult<TaxAssessment> {
        if taxable_income <= Decimal::ZERO {
            return Ok(TaxAssessment::zero());
        }

        if let Some(rate) = rate_override {
            let income_tax = truncate_to_ten_won(taxable_income * rate / PERCENT);
            let local_income_tax = truncate_to_ten_won(income_tax * LOCAL_TAX_RATE);
            return Ok(TaxAssessment {
                income_tax,
                local_income_tax,
            });
        }

        let tax = if dependents > DEPENDENT_COLUMNS {
            self.extrapolated_tax(taxable_income, dependents)?
        } else {
            self.tax_before_credits(taxable_income, dependents)?
        };

        let assessed = (tax - child_tax_credit(children)).max(Decimal::ZERO);
        let income_tax = truncate_to_ten_won(assessed);
        let local_income_tax = truncate_to_ten_won(income_tax * LOCAL_TAX_RATE);

        Ok(TaxAssessment {
            income_tax,
            local_income_tax,
        })
    }

    /// Table or bracket tax for a dependent count the schedule covers.
    fn tax_before_credits(&self, taxable_income: Decimal, dependents: u32) -> EngineResult<Decimal> {
        if taxable_income <= self.schedule.ceiling() {
            return Ok(match self.schedule.band_tax(taxable_income, dependents)? {
                BandTax::BelowTable => Decimal::ZERO,
                BandTax::Tax(tax) => tax,
            });
        }

        let baseline = self.schedule.baseline_at_ceiling(dependents)?;
        Ok(baseline + bracket_excess(taxable_income, self.schedule.ceiling()))
    }

    /// Linear extrapolation past the last dependent column, using the
    /// spacing between the last two columns and clamped at zero.
    fn extrapolated_tax(&self, taxable_income: Decimal, dependents: u32) -> EngineResult<Decimal> {
        let at_last = self.tax_before_credits(taxable_income, DEPENDENT_COLUMNS)?;
        let at_second_last = self.tax_before_credits(taxable_income, DEPENDENT_COLUMNS - 1)?;
        let per_dependent = at_second_last - at_last;
        let extra = Decimal::from(dependents - DEPENDENT_COLUMNS);
        Ok((at_last - per_dependent * extra).max(Decimal::ZERO))
    }
}

/// Progressive tax on the portion of income above the table ceiling.
///
/// The excess in the brackets up to 30,000,000 won is discounted to 98%
/// before the marginal rate applies; the accumulation constants carry
/// that discount forward.
fn bracket_excess(taxable_income: Decimal, ceiling: Decimal) -> Decimal {
    if taxable_income <= BRACKET_14M {
        SURCHARGE_AT_CEILING + (taxable_income - ceiling) * EXCESS_FACTOR * RATE_35
    } else if taxable_income <= BRACKET_28M {
        ACCUM_AT_14M + (taxable_income - BRACKET_14M) * EXCESS_FACTOR * RATE_38
    } else if taxable_income <= BRACKET_30M {
        ACCUM_AT_28M + (taxable_income - BRACKET_28M) * EXCESS_FACTOR * RATE_40
    } else if taxable_income <= BRACKET_45M {
        ACCUM_AT_30M + (taxable_income - BRACKET_30M) * RATE_40
    } else if taxable_income <= BRACKET_87M {
        ACCUM_AT_45M + (taxable_income - BRACKET_45M) * RATE_42
    } else {
        ACCUM_AT_87M + (taxable_income - BRACKET_87M) * RATE_45
    }
}
