//! Error types for tablegrid-core

use thiserror::Error;

use crate::cell::CellAddress;
use crate::validation::ValidationReport;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tablegrid-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Coordinate outside the grid's `rows x cols`
    #[error("Cell {address} out of bounds (grid is {rows}x{cols})")]
    OutOfBounds {
        address: CellAddress,
        rows: usize,
        cols: usize,
    },

    /// Unknown value for a persisted attribute (alignment, table style)
    #[error("Invalid attribute: {0}")]
    InvalidAttribute(String),

    /// The grid failed structural validation
    #[error("Validation failed: {0}")]
    Validation(ValidationReport),

    /// The target cell is covered by another cell's span
    #[error("Cell {0} is part of a merged region")]
    MergedCellConflict(CellAddress),
}

impl Error {
    /// Create an out-of-bounds error for a coordinate
    pub fn out_of_bounds(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        Error::OutOfBounds {
            address: CellAddress::new(row, col),
            rows,
            cols,
        }
    }

    /// Validation messages carried by this error, if any
    pub fn validation_errors(&self) -> &[String] {
        match self {
            Error::Validation(report) => report.errors(),
            _ => &[],
        }
    }
}
