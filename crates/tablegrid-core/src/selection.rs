//! Rectangular cell selection
//!
//! A [`Selection`] is the pair of corners a user drags between. Its corners
//! may come in any order; consumers work on the normalized [`SelectionRect`].

use crate::cell::CellAddress;
use crate::grid::Grid;

/// An anchor/focus pair over grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    /// Where the selection started
    pub anchor: CellAddress,
    /// Where the selection currently ends
    pub focus: CellAddress,
}

impl Selection {
    /// Create a selection between two corners
    pub fn new<A: Into<CellAddress>, B: Into<CellAddress>>(anchor: A, focus: B) -> Self {
        Self {
            anchor: anchor.into(),
            focus: focus.into(),
        }
    }

    /// Select a single cell
    pub fn single<A: Into<CellAddress>>(address: A) -> Self {
        let address = address.into();
        Self::new(address, address)
    }

    /// Select every cell of a grid, `None` for an empty grid
    pub fn all(grid: &Grid) -> Option<Self> {
        if grid.is_empty() {
            return None;
        }
        Some(Self::new(
            CellAddress::new(0, 0),
            CellAddress::new(grid.rows() - 1, grid.cols() - 1),
        ))
    }

    /// Move the focus, keeping the anchor
    pub fn extend_to<A: Into<CellAddress>>(self, focus: A) -> Self {
        Self {
            focus: focus.into(),
            ..self
        }
    }

    /// Bounding box of the two corners
    pub fn normalize(&self) -> SelectionRect {
        SelectionRect {
            min_row: self.anchor.row.min(self.focus.row),
            max_row: self.anchor.row.max(self.focus.row),
            min_col: self.anchor.col.min(self.focus.col),
            max_col: self.anchor.col.max(self.focus.col),
        }
    }

    /// Inclusive bounding-box test
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.normalize().contains(row, col)
    }
}

/// A normalized selection rectangle, inclusive on all sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionRect {
    pub min_row: usize,
    pub max_row: usize,
    pub min_col: usize,
    pub max_col: usize,
}

impl SelectionRect {
    /// Top-left corner
    pub fn top_left(&self) -> CellAddress {
        CellAddress::new(self.min_row, self.min_col)
    }

    /// Inclusive containment test
    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.min_row..=self.max_row).contains(&row) && (self.min_col..=self.max_col).contains(&col)
    }

    /// Number of rows covered
    pub fn row_count(&self) -> usize {
        self.max_row - self.min_row + 1
    }

    /// Number of columns covered
    pub fn col_count(&self) -> usize {
        self.max_col - self.min_col + 1
    }

    /// Number of cells covered
    pub fn cell_count(&self) -> usize {
        self.row_count() * self.col_count()
    }

    /// Exactly one cell
    pub fn is_single_cell(&self) -> bool {
        self.min_row == self.max_row && self.min_col == self.max_col
    }

    /// Whether the rectangle lies entirely inside a grid
    pub fn fits(&self, grid: &Grid) -> bool {
        grid.contains(self.max_row, self.max_col)
    }

    /// Whether two rectangles share at least one cell
    pub fn overlaps(&self, other: &SelectionRect) -> bool {
        self.min_row <= other.max_row
            && self.max_row >= other.min_row
            && self.min_col <= other.max_col
            && self.max_col >= other.min_col
    }

    /// Iterate over covered addresses, row by row
    pub fn cells(&self) -> SelectionCells {
        SelectionCells {
            rect: *self,
            row: self.min_row,
            col: self.min_col,
        }
    }
}

impl From<Selection> for SelectionRect {
    fn from(selection: Selection) -> Self {
        selection.normalize()
    }
}

/// Row-major iterator over the addresses of a [`SelectionRect`]
pub struct SelectionCells {
    rect: SelectionRect,
    row: usize,
    col: usize,
}

impl Iterator for SelectionCells {
    type Item = CellAddress;

    fn next(&mut self) -> Option<Self::Item> {
        if self.row > self.rect.max_row {
            return None;
        }

        let addr = CellAddress::new(self.row, self.col);

        self.col += 1;
        if self.col > self.rect.max_col {
            self.col = self.rect.min_col;
            self.row += 1;
        }

        Some(addr)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.row > self.rect.max_row {
            0
        } else {
            let full_rows = self.rect.max_row - self.row;
            full_rows * self.rect.col_count() + (self.rect.max_col - self.col + 1)
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SelectionCells {}
