//! Error types for the shift roster engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that can occur while validating preferences,
//! loading label configuration, or exporting a roster.

use thiserror::Error;

/// The main error type for the shift roster engine.
///
/// # Example
///
/// ```
/// use shift_roster::error::RosterError;
///
/// let error = RosterError::MissingColumns {
///     columns: vec!["Fri".to_string(), "Sun".to_string()],
/// };
/// assert_eq!(error.to_string(), "Missing required columns: Fri, Sun");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// One or more required columns are absent from the input table.
    #[error("Missing required columns: {}", .columns.join(", "))]
    MissingColumns {
        /// Every missing column, in canonical order.
        columns: Vec<String>,
    },

    /// A weekday cell holds a value outside the shift code set.
    #[error("Invalid value '{value}' in row {row}, column '{column}'")]
    InvalidCellValue {
        /// The 0-based row index in the input table.
        row: usize,
        /// The column holding the offending cell.
        column: String,
        /// The value as it appeared in the input.
        value: String,
    },

    /// The manual entry form holds more employees than allowed.
    #[error("Too many employees: {count} (maximum {max})")]
    TooManyEmployees {
        /// Number of entries submitted.
        count: usize,
        /// Configured maximum.
        max: usize,
    },

    /// The uploaded input could not be decoded into a table.
    #[error("Malformed input: {message}")]
    MalformedInput {
        /// A description of the decoding failure.
        message: String,
    },

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

    /// Configuration parsed but is not usable.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// What made the configuration unusable.
        message: String,
    },

    /// The spreadsheet writer failed.
    #[error("Export failed: {message}")]
    ExportError {
        /// The writer's error message.
        message: String,
    },
}

impl From<csv::Error> for RosterError {
    fn from(error: csv::Error) -> Self {
        RosterError::MalformedInput {
            message: error.to_string(),
        }
    }
}

impl From<calamine::XlsxError> for RosterError {
    fn from(error: calamine::XlsxError) -> Self {
        RosterError::MalformedInput {
            message: error.to_string(),
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for RosterError {
    fn from(error: rust_xlsxwriter::XlsxError) -> Self {
        RosterError::ExportError {
            message: error.to_string(),
        }
    }
}

/// A type alias for Results that return RosterError.
pub type RosterResult<T> = Result<T, RosterError>;
