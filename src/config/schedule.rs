//! The tax schedule capability consumed by the income tax engine.
//!
//! The engine never reads the withholding table directly; it goes through
//! the [`TaxScheduleProvider`] trait so that schedules for other years (or
//! test doubles) can be swapped in without touching calculation logic.
//!
//! ## Interpolation policy
//!
//! The schedule is sampled: each row carries the withholding amounts at one
//! income point (in thousand won). An income that falls exactly on a row
//! uses that row's value; an income strictly between two rows is linearly
//! interpolated between them on the exact income, and the result is cut
//! down to a whole won. Incomes below the lowest row owe no tax, which is
//! reported as [`BandTax::BelowTable`] rather than a bare zero so callers
//! can tell a zero-tax income from missing table data.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::types::WithholdingSchedule;

/// Number of dependent-count columns in the published schedule (1 to 11).
pub const DEPENDENT_COLUMNS: u32 = 11;

/// Upper income bound of the tabulated schedule, in thousand won.
pub(crate) const TABLE_CEILING_THOUSAND: u32 = 10_000;

/// Upper income bound of the tabulated schedule: 10,000,000 won.
///
/// Incomes above this use the bracket formula instead of the table.
pub const TABLE_CEILING_WON: Decimal = Decimal::from_parts(10_000_000, 0, 0, false, 0);

const THOUSAND: Decimal = Decimal::from_parts(1_000, 0, 0, false, 0);

/// Outcome of a withholding table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandTax {
    /// The income is below the lowest tabulated row; no tax is owed.
    BelowTable,
    /// The tabulated (or interpolated) withholding amount.
    Tax(Decimal),
}

/// Supplies the simplified withholding table to the income tax engine.
pub trait TaxScheduleProvider {
    /// Looks up the withholding amount for an income at or below the table
    /// ceiling and a dependent count between 1 and [`DEPENDENT_COLUMNS`].
    ///
    /// # Errors
    ///
    /// Returns `TableLookupMiss` if the dependent column is absent or the
    /// income is above the ceiling covered by the table.
    fn band_tax(&self, monthly_income: Decimal, dependents: u32) -> EngineResult<BandTax>;

    /// Returns the baseline tax anchored at exactly the table ceiling for
    /// the given dependent count, the starting point of the over-ceiling
    /// bracket formula.
    ///
    /// # Errors
    ///
    /// Returns `TableLookupMiss` if the dependent column is absent.
    fn baseline_at_ceiling(&self, dependents: u32) -> EngineResult<Decimal>;

    /// The income ceiling covered by the table, in won.
    fn ceiling(&self) -> Decimal {
        TABLE_CEILING_WON
    }
}

/// Index of a dependent count into a row's amounts, or a lookup miss.
fn column_index(monthly_income: Decimal, dependents: u32) -> EngineResult<usize> {
    if dependents == 0 || dependents > DEPENDENT_COLUMNS {
        return Err(EngineError::TableLookupMiss {
            monthly_income,
            dependents,
        });
    }
    Ok((dependents - 1) as usize)
}

impl TaxScheduleProvider for WithholdingSchedule {
    fn band_tax(&self, monthly_income: Decimal, dependents: u32) -> EngineResult<BandTax> {
        let column = column_index(monthly_income, dependents)?;
        let income_thousand = monthly_income / THOUSAND;

        let upper_index = self
            .bands()
            .iter()
            .position(|b| Decimal::from(b.up_to_thousand) >= income_thousand)
            .ok_or(EngineError::TableLookupMiss {
                monthly_income,
                dependents,
            })?;

        let upper = &self.bands()[upper_index];
        let upper_bound = Decimal::from(upper.up_to_thousand);

        if income_thousand == upper_bound {
            return Ok(BandTax::Tax(upper.amounts[column]));
        }
        if upper_index == 0 {
            // Below the lowest tabulated row.
            return Ok(BandTax::BelowTable);
        }

        let lower = &self.bands()[upper_index - 1];
        let lower_bound = Decimal::from(lower.up_to_thousand);
        let ratio = (income_thousand - lower_bound) / (upper_bound - lower_bound);
        let interpolated =
            lower.amounts[column] + (upper.amounts[column] - lower.amounts[column]) * ratio;

        Ok(BandTax::Tax(interpolated.floor()))
    }

    fn baseline_at_ceiling(&self, dependents: u32) -> EngineResult<Decimal> {
        let column = column_index(TABLE_CEILING_WON, dependents)?;
        Ok(self.baselines()[column])
    }
}
