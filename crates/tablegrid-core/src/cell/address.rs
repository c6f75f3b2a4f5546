//! Cell address type

use std::fmt;

/// A cell address within a grid (e.g., "A1", "C4")
///
/// Addresses are plain index pairs into the grid matrix. Merge back-references
/// are stored as addresses rather than references, so a structural mutation
/// only has to rewrite the indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellAddress {
    /// Row index (0-based internally, 1-based in display)
    pub row: usize,
    /// Column index (0-based, A=0, B=1, ...)
    pub col: usize,
}

impl CellAddress {
    /// Create a new cell address
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Convert column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
    pub fn column_to_letters(col: usize) -> String {
        let mut result = String::new();
        let mut n = col + 1;

        while n > 0 {
            n -= 1;
            // n % 26 < 26, the cast cannot truncate
            let c = (b'A' + (n % 26) as u8) as char;
            result.insert(0, c);
            n /= 26;
        }

        result
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", Self::column_to_letters(self.col), self.row + 1)
    }

    /// Shift the row index by one for a row inserted at or above it
    pub(crate) fn shifted_down(self, from_row: usize) -> Self {
        if self.row >= from_row {
            Self::new(self.row + 1, self.col)
        } else {
            self
        }
    }

    /// Shift the column index by one for a column inserted at or left of it
    pub(crate) fn shifted_right(self, from_col: usize) -> Self {
        if self.col >= from_col {
            Self::new(self.row, self.col + 1)
        } else {
            self
        }
    }
}

impl From<(usize, usize)> for CellAddress {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}
