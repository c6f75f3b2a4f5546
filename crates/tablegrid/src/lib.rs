//! # tablegrid
//!
//! The table grid engine behind an editor table block.
//!
//! tablegrid models a table as an immutable, dense grid of cells and offers:
//!
//! - Row and column insertion and deletion
//! - Rectangular cell merging and splitting
//! - Multi-cell range selection
//! - CSV import and export with RFC-4180-style quoting
//! - Structural validation before a grid is accepted
//!
//! ## Example
//!
//! ```rust
//! use tablegrid::prelude::*;
//!
//! // Import a table
//! let grid = from_csv("# Inventory\nItem,Qty\nApples,3\nPears,5").unwrap();
//! assert_eq!(grid.caption(), "Inventory");
//!
//! // Merge the two quantity cells
//! let selection = Selection::new((1, 1), (2, 1));
//! assert!(grid.can_merge(&selection));
//! let grid = grid.merge(&selection);
//! assert_eq!(grid.get_cell(1, 1).unwrap().content, "3 5");
//!
//! // Add a row and export again
//! let grid = grid.insert_row(2, RowPosition::Below).unwrap();
//! assert_eq!(to_csv(&grid).unwrap(), "# Inventory\nItem,Qty\nApples,3 5\nPears,\n,");
//! ```

pub mod prelude;

// Re-export core types
pub use tablegrid_core::{
    validate,
    validate_with,
    validation,
    // Cell types
    Align,
    Cell,
    CellAddress,
    // Structural mutation
    ColumnPosition,
    // Error types
    Error,
    // Grid types
    Grid,
    Result,
    RowPosition,
    // Selection types
    Selection,
    SelectionCells,
    SelectionRect,
    TableStyle,
    ValidationLimits,
    ValidationReport,
    MAX_COLS,
    MAX_ROWS,
    MERGE_SEPARATOR,
};

// Re-export CSV types
#[cfg(feature = "csv")]
pub use tablegrid_csv::{
    from_csv, to_csv, CsvError, CsvReadOptions, CsvReader, CsvResult, CsvWriteOptions, CsvWriter,
    LineTerminator,
};
