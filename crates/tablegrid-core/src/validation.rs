//! Structural validation
//!
//! Every grid produced by an import or a structural mutation is checked here
//! before it may replace the editor's current grid. All checks run; a report
//! lists every problem found instead of stopping at the first.
//!
//! ## Example
//!
//! ```rust
//! use tablegrid_core::{validation, Grid};
//!
//! let report = validation::validate(&Grid::initialize(0, 0));
//! assert!(!report.is_valid());
//! assert_eq!(report.errors().len(), 1);
//! ```

use std::fmt;

use crate::cell::CellAddress;
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::{MAX_COLS, MAX_ROWS};

/// Size ceilings applied by the validator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationLimits {
    /// Maximum number of rows
    pub max_rows: usize,
    /// Maximum number of columns
    pub max_cols: usize,
}

impl ValidationLimits {
    /// Set the row ceiling
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Set the column ceiling
    pub fn with_max_cols(mut self, max_cols: usize) -> Self {
        self.max_cols = max_cols;
        self
    }
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_rows: MAX_ROWS,
            max_cols: MAX_COLS,
        }
    }
}

/// Outcome of a validation run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    errors: Vec<String>,
}

impl ValidationReport {
    /// `true` when no problem was found
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Human-readable problems, in check order
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// `Ok(())` for a valid grid, [`Error::Validation`] otherwise
    pub fn into_result(self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(Error::Validation(self))
        }
    }

    fn push(&mut self, message: String) {
        self.errors.push(message);
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.errors.join("; "))
    }
}

/// Validate a grid against the default limits
pub fn validate(grid: &Grid) -> ValidationReport {
    validate_with(grid, &ValidationLimits::default())
}

/// Validate a grid against custom limits
pub fn validate_with(grid: &Grid, limits: &ValidationLimits) -> ValidationReport {
    let mut report = ValidationReport::default();
    let (rows, cols) = (grid.rows(), grid.cols());

    if rows == 0 || cols == 0 {
        report.push(format!(
            "Table must have at least one row and one column (got {}x{})",
            rows, cols
        ));
    }

    if rows > limits.max_rows || cols > limits.max_cols {
        report.push(format!(
            "Table exceeds the maximum size of {} rows by {} columns (got {}x{})",
            limits.max_rows, limits.max_cols, rows, cols
        ));
    }

    if grid.cells().len() != rows {
        report.push(format!(
            "Cell matrix has {} rows, expected {}",
            grid.cells().len(),
            rows
        ));
    }

    for (row, cells) in grid.iter_rows().enumerate() {
        if cells.len() != cols {
            report.push(format!(
                "Row {} has {} cells, expected {}",
                row + 1,
                cells.len(),
                cols
            ));
        }

        for (col, cell) in cells.iter().enumerate() {
            if cell.row_span < 1 || cell.col_span < 1 {
                report.push(format!(
                    "Cell {} has invalid span {}x{}",
                    CellAddress::new(row, col),
                    cell.row_span,
                    cell.col_span
                ));
            } else if cell.row_span as usize > limits.max_rows
                || cell.col_span as usize > limits.max_cols
            {
                report.push(format!(
                    "Cell {} span {}x{} exceeds the maximum size of {} rows by {} columns",
                    CellAddress::new(row, col),
                    cell.row_span,
                    cell.col_span,
                    limits.max_rows,
                    limits.max_cols
                ));
            }
        }
    }

    if !report.is_valid() {
        log::warn!("grid rejected by validator: {}", report);
    }

    report
}
