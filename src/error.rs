//! Error types for Work Log Core

use chrono::NaiveDate;
use thiserror::Error;

/// Main error type for work log operations
#[derive(Error, Debug)]
pub enum WorklogError {
    /// Date falls outside the fixed work log period
    #[error("Date {0} is outside the allowed period")]
    DateOutOfRange(NaiveDate),

    /// Week index must be 1-based
    #[error("Invalid week index: {0}")]
    InvalidWeekIndex(u32),

    /// Persisted data file is malformed
    #[error("Data file is corrupted: {0}")]
    CorruptData(String),

    /// Writing the data file failed; the previous file is left untouched
    #[error("Failed to save data: {0}")]
    Save(String),

    /// Matter not found
    #[error("Matter not found: {0}")]
    MatterNotFound(String),

    /// Entry not found
    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    /// Matter is still referenced by at least one entry
    #[error("Matter is in use: {0}")]
    MatterInUse(String),

    /// Invalid entry or action field
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Report export failed
    #[error("Export error: {0}")]
    Export(String),
}

impl From<csv::Error> for WorklogError {
    fn from(err: csv::Error) -> Self {
        WorklogError::Export(err.to_string())
    }
}

impl From<genpdf::error::Error> for WorklogError {
    fn from(err: genpdf::error::Error) -> Self {
        WorklogError::Export(err.to_string())
    }
}

/// Result type alias for work log operations
pub type Result<T> = std::result::Result<T, WorklogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let err = WorklogError::DateOutOfRange(date);
        assert!(err.to_string().contains("2025-01-01"));

        let err = WorklogError::InvalidWeekIndex(0);
        assert_eq!(err.to_string(), "Invalid week index: 0");

        let err = WorklogError::CorruptData("invalid JSON".to_string());
        assert!(err.to_string().contains("invalid JSON"));

        let err = WorklogError::MatterNotFound("matter-123".to_string());
        assert!(err.to_string().contains("matter-123"));

        let err = WorklogError::MatterInUse("matter-123".to_string());
        assert!(err.to_string().contains("in use"));

        let err = WorklogError::Validation("duration must be a multiple of 15".to_string());
        assert!(err.to_string().contains("multiple of 15"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: WorklogError = io_err.into();
        match err {
            WorklogError::IoError(e) => assert!(!e.to_string().is_empty()),
            _ => panic!("Expected IoError"),
        }
    }
}
