//! # tablegrid-csv
//!
//! CSV reader and writer for tablegrid.
//!
//! ```rust
//! use tablegrid_csv::{from_csv, to_csv};
//!
//! let grid = from_csv("# Inventory\nA,B\n1,2").unwrap();
//! assert_eq!(grid.caption(), "Inventory");
//! assert_eq!(to_csv(&grid).unwrap(), "# Inventory\nA,B\n1,2");
//! ```

mod error;
mod options;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator};
pub use reader::CsvReader;
pub use writer::CsvWriter;

use tablegrid_core::Grid;

/// Serialize a grid to CSV text with default options
pub fn to_csv(grid: &Grid) -> CsvResult<String> {
    CsvWriter::write_string(grid, &CsvWriteOptions::default())
}

/// Parse CSV text into a validated grid with default options
pub fn from_csv(text: &str) -> CsvResult<Grid> {
    CsvReader::read_str(text, &CsvReadOptions::default())
}
