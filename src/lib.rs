//! Payroll calculation engine for Korean monthly wages.
//!
//! This crate computes a worker's monthly payroll: gross pay components
//! (base salary and the statutory overtime, night, holiday, and
//! weekly-holiday premiums), four-insurance deductions, and withholding
//! income tax per the simplified withholding schedule.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
