//! CSV error types

use thiserror::Error;

/// Result type for CSV operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Errors that can occur during CSV operations
#[derive(Debug, Error)]
pub enum CsvError {
    /// No data rows left after dropping comment and blank lines
    #[error("Nothing to import: the CSV text has no data rows")]
    EmptyInput,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Output or input was not valid UTF-8
    #[error("Invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Core error (e.g. the imported grid failed validation)
    #[error("Core error: {0}")]
    Core(#[from] tablegrid_core::Error),
}

impl CsvError {
    /// Validation messages if the grid was rejected by the validator
    pub fn validation_errors(&self) -> &[String] {
        match self {
            CsvError::Core(err) => err.validation_errors(),
            _ => &[],
        }
    }
}
