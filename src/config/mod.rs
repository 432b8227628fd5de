//! Configuration for the payroll calculation engine.
//!
//! This module contains the strongly-typed configuration structures loaded
//! from YAML files (the withholding schedule and the statutory deduction
//! rates) and the [`TaxScheduleProvider`] capability through which the tax
//! engine consumes the schedule.

mod loader;
mod schedule;
mod types;

pub use loader::ConfigLoader;
pub use schedule::{BandTax, DEPENDENT_COLUMNS, TABLE_CEILING_WON, TaxScheduleProvider};
pub use types::{
    DeductionRatesConfig, FreelanceRates, InsuranceRates, PayrollConfig, ScheduleMetadata, TaxBand,
    WithholdingSchedule,
};
