//! Structural mutations: row and column insertion and deletion
//!
//! Each operation returns a new grid that has already passed the validator.
//! On failure the caller gets the error and keeps its original grid.
//!
//! Merges stay geometrically anchored: spans are never grown or shrunk when
//! a row or column is inserted or deleted through their interior. Only the
//! `merge_origin` back-references are rewritten so they keep pointing at the
//! origin's new coordinates.

use crate::cell::{Cell, CellAddress};
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::validation;

/// Where a new row goes relative to the reference row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowPosition {
    Above,
    #[default]
    Below,
}

/// Where a new column goes relative to the reference column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnPosition {
    Left,
    #[default]
    Right,
}

impl Grid {
    /// Insert one row of empty, non-header unit cells next to row `index`
    ///
    /// `index` must name an existing row, or be `0` on a grid without rows.
    ///
    /// ```rust
    /// use tablegrid_core::{Grid, RowPosition};
    ///
    /// let grid = Grid::initialize(1, 2);
    /// let grown = grid.insert_row(0, RowPosition::Below).unwrap();
    /// assert_eq!(grown.rows(), 2);
    /// assert_eq!(grid.rows(), 1);
    /// ```
    pub fn insert_row(&self, index: usize, position: RowPosition) -> Result<Grid> {
        let at = match (self.rows(), position) {
            // A row-less grid grows from index 0 in either direction
            (0, _) if index == 0 => 0,
            (rows, _) if index >= rows => {
                return Err(Error::out_of_bounds(index, 0, self.rows(), self.cols()));
            }
            (_, RowPosition::Above) => index,
            (_, RowPosition::Below) => index + 1,
        };

        let mut next = self.clone();
        rewrite_origins(&mut next, |origin| Some(origin.shifted_down(at)));

        let cols = next.cols();
        next.cells_mut().insert(at, vec![Cell::unit(false); cols]);
        next.set_dimensions(self.rows() + 1, cols);

        publish(next, "insert_row", at)
    }

    /// Delete row `index`
    ///
    /// A grid with a single row is returned unchanged. Shadows whose origin
    /// sat in the deleted row become unit cells.
    pub fn delete_row(&self, index: usize) -> Result<Grid> {
        if self.rows() <= 1 {
            log::debug!("delete_row({}) ignored on a {}-row grid", index, self.rows());
            return Ok(self.clone());
        }
        if index >= self.rows() {
            return Err(Error::out_of_bounds(index, 0, self.rows(), self.cols()));
        }

        let mut next = self.clone();
        next.cells_mut().remove(index);
        next.set_dimensions(self.rows() - 1, self.cols());
        rewrite_origins(&mut next, |origin| {
            if origin.row == index {
                None
            } else if origin.row > index {
                Some(CellAddress::new(origin.row - 1, origin.col))
            } else {
                Some(origin)
            }
        });

        publish(next, "delete_row", index)
    }

    /// Insert one column of empty, non-header unit cells next to column `index`
    ///
    /// `index` must name an existing column, or be `0` on a grid without columns.
    pub fn insert_column(&self, index: usize, position: ColumnPosition) -> Result<Grid> {
        let at = match (self.cols(), position) {
            (0, _) if index == 0 => 0,
            (cols, _) if index >= cols => {
                return Err(Error::out_of_bounds(0, index, self.rows(), self.cols()));
            }
            (_, ColumnPosition::Left) => index,
            (_, ColumnPosition::Right) => index + 1,
        };

        let mut next = self.clone();
        rewrite_origins(&mut next, |origin| Some(origin.shifted_right(at)));

        for row in next.cells_mut().iter_mut() {
            row.insert(at, Cell::unit(false));
        }
        next.set_dimensions(self.rows(), self.cols() + 1);

        publish(next, "insert_column", at)
    }

    /// Delete column `index`
    ///
    /// A grid with a single column is returned unchanged. Shadows whose
    /// origin sat in the deleted column become unit cells.
    pub fn delete_column(&self, index: usize) -> Result<Grid> {
        if self.cols() <= 1 {
            log::debug!(
                "delete_column({}) ignored on a {}-column grid",
                index,
                self.cols()
            );
            return Ok(self.clone());
        }
        if index >= self.cols() {
            return Err(Error::out_of_bounds(0, index, self.rows(), self.cols()));
        }

        let mut next = self.clone();
        for row in next.cells_mut().iter_mut() {
            row.remove(index);
        }
        next.set_dimensions(self.rows(), self.cols() - 1);
        rewrite_origins(&mut next, |origin| {
            if origin.col == index {
                None
            } else if origin.col > index {
                Some(CellAddress::new(origin.row, origin.col - 1))
            } else {
                Some(origin)
            }
        });

        publish(next, "delete_column", index)
    }
}

/// Rewrite every shadow's back-reference
///
/// `map` returns the origin's new address, or `None` when the origin no
/// longer exists, in which case the shadow is reset to a unit cell.
fn rewrite_origins<F>(grid: &mut Grid, map: F)
where
    F: Fn(CellAddress) -> Option<CellAddress>,
{
    let mut orphans = Vec::new();

    for (row, cells) in grid.cells_mut().iter_mut().enumerate() {
        for (col, cell) in cells.iter_mut().enumerate() {
            let Some(origin) = cell.merge_origin.filter(|_| cell.is_merged) else {
                continue;
            };
            match map(origin) {
                Some(moved) => cell.merge_origin = Some(moved),
                None => orphans.push(CellAddress::new(row, col)),
            }
        }
    }

    for address in orphans {
        let is_header = grid.header_for(address.row, address.col);
        if let Some(cell) = grid.cell_mut(address) {
            *cell = Cell::unit(is_header);
        }
    }
}

fn publish(grid: Grid, operation: &str, index: usize) -> Result<Grid> {
    validation::validate(&grid).into_result()?;
    log::trace!(
        "{}({}) -> {}x{} grid",
        operation,
        index,
        grid.rows(),
        grid.cols()
    );
    Ok(grid)
}
