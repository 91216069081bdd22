//! Error types for the Attendance-to-Payroll Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during attendance classification
//! and salary computation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Attendance-to-Payroll Calculation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound {
///     employee_code: "EMP042".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee master record not found: EMP042");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Policy configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No shift definition exists for the employee on the given date.
    #[error("Shift configuration missing for employee '{employee_code}' on {date}")]
    ShiftConfigMissing {
        /// The employee code.
        employee_code: String,
        /// The date for which the shift was requested.
        date: NaiveDate,
    },

    /// The employee code has no master record.
    #[error("Employee master record not found: {employee_code}")]
    EmployeeNotFound {
        /// The employee code that was not found.
        employee_code: String,
    },

    /// A month string or date range could not be parsed.
    #[error("Invalid billing month '{value}': {message}")]
    InvalidMonth {
        /// The raw value that failed to parse.
        value: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A date carries both a paid-leave and a casual-leave entry.
    #[error("Conflicting leave categories for employee '{employee_code}' on {date}")]
    LeaveConflict {
        /// The employee code.
        employee_code: String,
        /// The date carrying both categories.
        date: NaiveDate,
    },

    /// A required overlay collaborator was unreachable.
    #[error("Data source '{collaborator}' unavailable: {message}")]
    DataUnavailable {
        /// The collaborator that failed (e.g. "punches", "adjustments").
        collaborator: String,
        /// A description of the failure.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
