//! Error types for the payroll calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a payroll calculation.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the payroll calculation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The withholding schedule failed an integrity check at load time.
    #[error("Invalid withholding schedule: {message}")]
    InvalidSchedule {
        /// A description of what made the schedule invalid.
        message: String,
    },

    /// A worker profile or work record field was invalid.
    ///
    /// The engine fails fast on malformed input rather than falling back
    /// to a zero or NaN result.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The withholding schedule has no entry for the given income and
    /// dependent count.
    ///
    /// Distinct from a legitimately zero-tax income below the lowest band,
    /// which is not an error.
    #[error("Withholding schedule has no entry for income {monthly_income} with {dependents} dependents")]
    TableLookupMiss {
        /// The taxable monthly income that was looked up.
        monthly_income: Decimal,
        /// The dependent count column that was requested.
        dependents: u32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
