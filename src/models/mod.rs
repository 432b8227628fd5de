//! Core data models for the payroll calculation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod work_record;
mod worker;

pub use calculation_result::{CalculationResult, DeductionBreakdown, PaymentBreakdown};
pub use work_record::MonthlyWorkRecord;
pub use worker::{EmploymentType, SalaryType, WorkerProfile};
