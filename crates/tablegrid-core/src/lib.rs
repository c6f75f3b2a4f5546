//! # tablegrid-core
//!
//! Core data structures for the tablegrid table engine.
//!
//! This crate provides the grid model behind an editor table block:
//! - [`Cell`] and [`CellAddress`] - Grid positions, spans and merge linkage
//! - [`Grid`] - The dense cell matrix plus table metadata
//! - Structural mutations ([`Grid::insert_row`], [`Grid::delete_column`], ...)
//! - Merging and splitting ([`Grid::merge`], [`Grid::split`])
//! - [`Selection`] - Rectangular ranges over grid coordinates
//! - [`validation`] - Structural checks gating imported or mutated grids
//!
//! Grids are immutable values. Every operation returns a new grid.
//!
//! ## Example
//!
//! ```rust
//! use tablegrid_core::{Grid, RowPosition, Selection};
//!
//! let grid = Grid::initialize(3, 3);
//! let grid = grid.with_content(0, 0, "Name").unwrap();
//!
//! let selection = Selection::new((0, 0), (0, 2));
//! assert!(grid.can_merge(&selection));
//! let grid = grid.merge(&selection);
//!
//! let grid = grid.insert_row(2, RowPosition::Below).unwrap();
//! assert_eq!(grid.rows(), 4);
//! assert_eq!(grid.get_cell(0, 0).unwrap().span(), (1, 3));
//! ```

pub mod cell;
pub mod error;
pub mod grid;
pub mod merge;
pub mod mutate;
pub mod selection;
pub mod style;
pub mod validation;

// Re-exports for convenience
pub use cell::{Align, Cell, CellAddress};
pub use error::{Error, Result};
pub use grid::Grid;
pub use merge::MERGE_SEPARATOR;
pub use mutate::{ColumnPosition, RowPosition};
pub use selection::{Selection, SelectionCells, SelectionRect};
pub use style::TableStyle;
pub use validation::{validate, validate_with, ValidationLimits, ValidationReport};

/// Maximum number of rows in a table
pub const MAX_ROWS: usize = 100;

/// Maximum number of columns in a table
pub const MAX_COLS: usize = 50;
