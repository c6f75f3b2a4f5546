//! Grid store
//!
//! A [`Grid`] is a dense `rows x cols` matrix of [`Cell`]s plus table-level
//! metadata. It is an immutable value: every operation that changes the
//! table returns a new `Grid` and leaves the receiver untouched, so callers
//! can compare or keep previous versions by value.

use crate::cell::{Align, Cell, CellAddress};
use crate::error::{Error, Result};
use crate::style::TableStyle;
use crate::validation;

/// A table grid
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Cell>>,
    #[cfg_attr(feature = "serde", serde(default))]
    style: TableStyle,
    #[cfg_attr(feature = "serde", serde(default))]
    has_header_row: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    has_header_col: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    caption: String,
}

impl Grid {
    /// Create a 0x0 grid
    pub fn empty() -> Self {
        Self {
            rows: 0,
            cols: 0,
            cells: Vec::new(),
            style: TableStyle::Default,
            has_header_row: true,
            has_header_col: false,
            caption: String::new(),
        }
    }

    /// Create a `rows x cols` grid of empty unit cells
    ///
    /// Row 0 is marked as the header row.
    ///
    /// ```rust
    /// use tablegrid_core::Grid;
    ///
    /// let grid = Grid::initialize(3, 2);
    /// assert_eq!(grid.rows(), 3);
    /// assert!(grid.get_cell(0, 1).unwrap().is_header);
    /// assert!(!grid.get_cell(1, 1).unwrap().is_header);
    /// ```
    pub fn initialize(rows: usize, cols: usize) -> Self {
        let mut grid = Self {
            rows,
            cols,
            ..Self::empty()
        };
        let cells = (0..rows)
            .map(|row| (0..cols).map(|col| Cell::unit(grid.header_for(row, col))).collect())
            .collect();
        grid.cells = cells;
        grid
    }

    /// Build a grid from a matrix of cells
    ///
    /// Dimensions come from the matrix (`cols` from the first row) and the
    /// header flags from the `is_header` bits of row 0 / column 0. The result
    /// is not validated; ragged input is reported by [`validation::validate`].
    pub fn from_cells(cells: Vec<Vec<Cell>>) -> Self {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);
        let has_header_row = cols > 0
            && cells
                .first()
                .is_some_and(|row| row.iter().all(|cell| cell.is_header));
        let has_header_col = rows > 0
            && cells
                .iter()
                .all(|row| row.first().is_some_and(|cell| cell.is_header));

        Self {
            rows,
            cols,
            cells,
            has_header_row,
            has_header_col,
            ..Self::empty()
        }
    }

    /// Accept a grid from outside the engine (e.g. deserialized attributes)
    ///
    /// Fails with [`Error::Validation`] if the grid is structurally invalid.
    pub fn validated(self) -> Result<Self> {
        validation::validate(&self).into_result()?;
        Ok(self)
    }

    // === Accessors ===

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `true` for a grid without cells
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Table style
    pub fn style(&self) -> TableStyle {
        self.style
    }

    /// Table caption
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Row 0 is rendered as a header
    pub fn has_header_row(&self) -> bool {
        self.has_header_row
    }

    /// Column 0 is rendered as a header
    pub fn has_header_col(&self) -> bool {
        self.has_header_col
    }

    /// The cell matrix, row-major
    pub fn cells(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    /// Iterate over rows
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.iter().map(Vec::as_slice)
    }

    /// `true` if the coordinate lies within `rows x cols`
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Get the cell at a coordinate
    ///
    /// Querying outside the grid is a caller bug and fails with
    /// [`Error::OutOfBounds`].
    pub fn get_cell(&self, row: usize, col: usize) -> Result<&Cell> {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .filter(|_| self.contains(row, col))
            .ok_or_else(|| {
                log::error!(
                    "cell {} requested from a {}x{} grid",
                    CellAddress::new(row, col),
                    self.rows,
                    self.cols
                );
                Error::out_of_bounds(row, col, self.rows, self.cols)
            })
    }

    /// Get a cell by address, `None` outside the grid
    pub fn cell(&self, address: CellAddress) -> Option<&Cell> {
        if !self.contains(address.row, address.col) {
            return None;
        }
        self.cells.get(address.row)?.get(address.col)
    }

    /// Iterate over origin cells whose span covers more than themselves
    pub fn origins(&self) -> impl Iterator<Item = (CellAddress, &Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_spanning())
                .map(move |(col, cell)| (CellAddress::new(row, col), cell))
        })
    }

    /// Address of the cell that owns the content shown at a coordinate
    ///
    /// That is the `merge_origin` for a shadow and the coordinate itself
    /// otherwise.
    pub fn origin_of(&self, row: usize, col: usize) -> Result<CellAddress> {
        let cell = self.get_cell(row, col)?;
        Ok(cell
            .merge_origin
            .filter(|_| cell.is_merged)
            .unwrap_or(CellAddress::new(row, col)))
    }

    // === Edits (each returns a new grid) ===

    /// Replace the content of a cell
    ///
    /// Shadow cells carry no content and are rejected with
    /// [`Error::MergedCellConflict`]; edit their origin instead.
    pub fn with_content<S: Into<String>>(&self, row: usize, col: usize, content: S) -> Result<Self> {
        self.edit_cell(row, col, |cell| cell.content = content.into())
    }

    /// Change the alignment of a cell
    pub fn with_align(&self, row: usize, col: usize, align: Align) -> Result<Self> {
        self.edit_cell(row, col, |cell| cell.align = align)
    }

    /// Change the caption
    pub fn with_caption<S: Into<String>>(&self, caption: S) -> Self {
        Self {
            caption: caption.into(),
            ..self.clone()
        }
    }

    /// Change the table style
    pub fn with_style(&self, style: TableStyle) -> Self {
        Self {
            style,
            ..self.clone()
        }
    }

    /// Toggle the header row, updating the `is_header` bits of row 0
    pub fn with_header_row(&self, enabled: bool) -> Self {
        let mut next = Self {
            has_header_row: enabled,
            ..self.clone()
        };
        next.sync_header_bits();
        next
    }

    /// Toggle the header column, updating the `is_header` bits of column 0
    pub fn with_header_col(&self, enabled: bool) -> Self {
        let mut next = Self {
            has_header_col: enabled,
            ..self.clone()
        };
        next.sync_header_bits();
        next
    }

    fn edit_cell<F: FnOnce(&mut Cell)>(&self, row: usize, col: usize, edit: F) -> Result<Self> {
        let cell = self.get_cell(row, col)?;
        if cell.is_merged {
            return Err(Error::MergedCellConflict(CellAddress::new(row, col)));
        }

        let mut next = self.clone();
        if let Some(cell) = next.cell_mut(CellAddress::new(row, col)) {
            edit(cell);
        }
        Ok(next)
    }

    fn sync_header_bits(&mut self) {
        let (has_row, has_col) = (self.has_header_row, self.has_header_col);
        for (row, cells) in self.cells.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                if row == 0 || col == 0 {
                    cell.is_header = (row == 0 && has_row) || (col == 0 && has_col);
                }
            }
        }
    }

    // === Crate-internal plumbing for the mutator and merge engine ===

    /// Header flag a fresh cell at this coordinate should carry
    pub(crate) fn header_for(&self, row: usize, col: usize) -> bool {
        (row == 0 && self.has_header_row) || (col == 0 && self.has_header_col)
    }

    pub(crate) fn cell_mut(&mut self, address: CellAddress) -> Option<&mut Cell> {
        self.cells.get_mut(address.row)?.get_mut(address.col)
    }

    pub(crate) fn cells_mut(&mut self) -> &mut Vec<Vec<Cell>> {
        &mut self.cells
    }

    pub(crate) fn set_dimensions(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}
