//! Error types for the payroll roster.
//!
//! Sorting is total. Errors arise when loading a roster file, choosing a
//! calendar year, computing an income that does not fit in a decimal, and
//! writing the report out.

use thiserror::Error;

/// The main error type for the payroll roster.
///
/// # Example
///
/// ```
/// use payroll_roster::error::RosterError;
///
/// let error = RosterError::ConfigNotFound {
///     path: "/missing/roster.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Roster file not found: /missing/roster.yaml");
/// ```
#[derive(Debug, Error)]
pub enum RosterError {
    /// Roster file was not found at the specified path.
    #[error("Roster file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Roster file could not be parsed.
    #[error("Failed to parse roster file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The year has no representable ISO week calendar.
    #[error("Invalid calendar year: {year}")]
    InvalidYear {
        /// The rejected year.
        year: i32,
    },

    /// An employee's weekly income is outside the representable range.
    #[error("Weekly income overflow for employee '{employee_id}'")]
    IncomeOverflow {
        /// The employee whose income could not be computed.
        employee_id: String,
    },

    /// The report could not be written or serialized.
    #[error("Report error: {message}")]
    ReportError {
        /// A description of the failure.
        message: String,
    },
}

impl From<std::io::Error> for RosterError {
    fn from(err: std::io::Error) -> Self {
        RosterError::ReportError {
            message: err.to_string(),
        }
    }
}

/// A type alias for Results that return RosterError.
pub type RosterResult<T> = Result<T, RosterError>;
