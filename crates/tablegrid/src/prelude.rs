//! Prelude module - common imports for tablegrid users
//!
//! ```rust
//! use tablegrid::prelude::*;
//! ```

pub use crate::{
    Align,
    Cell,
    CellAddress,
    ColumnPosition,
    Error,
    Grid,
    Result,
    RowPosition,
    Selection,
    SelectionRect,
    TableStyle,
    ValidationReport,
};

#[cfg(feature = "csv")]
pub use crate::{from_csv, to_csv, CsvError, CsvReadOptions, CsvResult, CsvWriteOptions};
