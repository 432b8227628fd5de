//! Configuration loading for the payroll engine.
//!
//! Loads a schedule directory holding `schedule.yaml` (the withholding
//! schedule) and `insurance.yaml` (the statutory deduction rates) into a
//! validated [`PayrollConfig`].

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{EngineError, EngineResult};

use super::types::{
    DeductionRatesConfig, PayrollConfig, ScheduleMetadata, TaxBand, WithholdingSchedule,
};

/// On-disk shape of `schedule.yaml` before validation.
#[derive(Debug, Deserialize)]
struct ScheduleDocument {
    metadata: ScheduleMetadata,
    baseline_at_ceiling: Vec<Decimal>,
    bands: Vec<TaxBand>,
}

/// Loads and holds payroll configuration from a schedule directory.
#[derive(Debug)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the given directory.
    ///
    /// The directory must contain `schedule.yaml` and `insurance.yaml`.
    /// The schedule is validated on load, so a loader that constructs
    /// successfully always carries a usable configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if a file is missing, `ConfigParseError`
    /// if its YAML does not match the expected shape, and
    /// `InvalidSchedule` if the schedule fails validation.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> EngineResult<Self> {
        let dir = config_dir.as_ref();

        let document: ScheduleDocument = load_yaml(&dir.join("schedule.yaml"))?;
        let schedule = WithholdingSchedule::new(
            document.metadata,
            document.bands,
            document.baseline_at_ceiling,
        )?;
        tracing::debug!(
            schedule = %schedule.metadata().name,
            revision = %schedule.metadata().revision,
            bands = schedule.bands().len(),
            "loaded withholding schedule"
        );

        let rates: DeductionRatesConfig = load_yaml(&dir.join("insurance.yaml"))?;

        Ok(Self {
            config: PayrollConfig { schedule, rates },
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the loaded withholding schedule.
    pub fn schedule(&self) -> &WithholdingSchedule {
        &self.config.schedule
    }

    /// Returns the loaded deduction rates.
    pub fn rates(&self) -> &DeductionRatesConfig {
        &self.config.rates
    }
}

fn load_yaml<T: DeserializeOwned>(path: &Path) -> EngineResult<T> {
    let contents = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
        path: path.display().to_string(),
    })?;
    serde_yaml::from_str(&contents).map_err(|e| EngineError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
