//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

use super::schedule::{DEPENDENT_COLUMNS, TABLE_CEILING_THOUSAND};

/// Metadata about the withholding schedule.
///
/// Identifies the published schedule the band rows were taken from.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleMetadata {
    /// The human-readable name of the schedule.
    pub name: String,
    /// The revision of the published schedule (e.g. "2024-02-29").
    pub revision: String,
    /// URL to the official schedule publication.
    pub source_url: String,
    /// The date from which this schedule applies.
    pub effective_date: NaiveDate,
}

/// One sampled row of the simplified withholding schedule.
///
/// A row covers monthly incomes up to `up_to_thousand` thousand won and
/// carries one withholding amount per dependent count from 1 to 11.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxBand {
    /// Upper bound of the income band, in thousand won.
    pub up_to_thousand: u32,
    /// Withholding amounts for dependent counts 1 through 11.
    pub amounts: Vec<Decimal>,
}

/// The simplified monthly withholding schedule.
///
/// Holds the sampled band rows for incomes at or below the 10,000,000 won
/// table ceiling and the per-dependent baseline amounts anchored at exactly
/// that ceiling, from which the over-ceiling bracket formula starts.
#[derive(Debug, Clone)]
pub struct WithholdingSchedule {
    metadata: ScheduleMetadata,
    /// Band rows sorted ascending by income bound.
    bands: Vec<TaxBand>,
    /// Baseline amounts at the table ceiling, dependent counts 1 through 11.
    baseline_at_ceiling: Vec<Decimal>,
}

impl WithholdingSchedule {
    /// Builds a schedule from its component parts, validating its integrity.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSchedule` if:
    /// - there are no band rows, or a row does not carry exactly 11 amounts
    /// - the rows are not strictly ascending by income bound
    /// - the top row is not at the 10,000,000 won table ceiling
    /// - any row's amounts increase with the dependent count, or any
    ///   dependent column decreases as income rises (either would break the
    ///   monotonicity the over-ceiling extrapolation relies on)
    pub fn new(
        metadata: ScheduleMetadata,
        bands: Vec<TaxBand>,
        baseline_at_ceiling: Vec<Decimal>,
    ) -> EngineResult<Self> {
        let mut bands = bands;
        bands.sort_by_key(|b| b.up_to_thousand);

        if bands.is_empty() {
            return Err(EngineError::InvalidSchedule {
                message: "schedule has no band rows".to_string(),
            });
        }
        if baseline_at_ceiling.len() != DEPENDENT_COLUMNS as usize {
            return Err(EngineError::InvalidSchedule {
                message: format!(
                    "baseline_at_ceiling has {} entries, expected {}",
                    baseline_at_ceiling.len(),
                    DEPENDENT_COLUMNS
                ),
            });
        }

        for band in &bands {
            if band.amounts.len() != DEPENDENT_COLUMNS as usize {
                return Err(EngineError::InvalidSchedule {
                    message: format!(
                        "band {} has {} amounts, expected {}",
                        band.up_to_thousand,
                        band.amounts.len(),
                        DEPENDENT_COLUMNS
                    ),
                });
            }
            if band.amounts.windows(2).any(|w| w[1] > w[0]) {
                return Err(EngineError::InvalidSchedule {
                    message: format!(
                        "band {} amounts increase with the dependent count",
                        band.up_to_thousand
                    ),
                });
            }
        }

        for pair in bands.windows(2) {
            if pair[1].up_to_thousand == pair[0].up_to_thousand {
                return Err(EngineError::InvalidSchedule {
                    message: format!("duplicate band row at {}", pair[0].up_to_thousand),
                });
            }
            for column in 0..DEPENDENT_COLUMNS as usize {
                if pair[1].amounts[column] < pair[0].amounts[column] {
                    return Err(EngineError::InvalidSchedule {
                        message: format!(
                            "dependent column {} decreases between bands {} and {}",
                            column + 1,
                            pair[0].up_to_thousand,
                            pair[1].up_to_thousand
                        ),
                    });
                }
            }
        }

        let top = bands
            .last()
            .map(|b| b.up_to_thousand)
            .unwrap_or_default();
        if top != TABLE_CEILING_THOUSAND {
            return Err(EngineError::InvalidSchedule {
                message: format!(
                    "top band is {} thousand won, expected the {} thousand won table ceiling",
                    top, TABLE_CEILING_THOUSAND
                ),
            });
        }

        if baseline_at_ceiling.windows(2).any(|w| w[1] > w[0]) {
            return Err(EngineError::InvalidSchedule {
                message: "baseline_at_ceiling amounts increase with the dependent count"
                    .to_string(),
            });
        }

        Ok(Self {
            metadata,
            bands,
            baseline_at_ceiling,
        })
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        &self.metadata
    }

    /// Returns the band rows, sorted ascending by income bound.
    pub fn bands(&self) -> &[TaxBand] {
        &self.bands
    }

    /// Returns the baseline amounts at the table ceiling.
    pub fn baselines(&self) -> &[Decimal] {
        &self.baseline_at_ceiling
    }
}

/// Statutory insurance contribution rates for regular employees.
#[derive(Debug, Clone, Deserialize)]
pub struct InsuranceRates {
    /// National pension contribution rate on the insurance base.
    pub national_pension_rate: Decimal,
    /// Health insurance premium rate on the insurance base.
    pub health_insurance_rate: Decimal,
    /// Long-term care rate, applied to the health premium.
    pub long_term_care_rate: Decimal,
    /// Employment insurance contribution rate on the insurance base.
    pub employment_insurance_rate: Decimal,
}

/// Flat withholding rates for freelance workers.
#[derive(Debug, Clone, Deserialize)]
pub struct FreelanceRates {
    /// Flat income tax rate on taxable income.
    pub income_tax_rate: Decimal,
    /// Flat local income tax rate on taxable income.
    pub local_income_tax_rate: Decimal,
}

/// Deduction rate configuration from insurance.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct DeductionRatesConfig {
    /// Insurance rates for regular employees.
    pub insurance: InsuranceRates,
    /// Flat withholding rates for freelance workers.
    pub freelance: FreelanceRates,
}

/// The complete payroll configuration loaded from a schedule directory.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    /// The simplified withholding schedule.
    pub schedule: WithholdingSchedule,
    /// Statutory deduction rates.
    pub rates: DeductionRatesConfig,
}
