//! Merge engine: rectangular merges and splits
//!
//! A merge turns the top-left cell of a selection into an *origin* carrying
//! the rectangle's span and the concatenated content of every covered cell,
//! and every other covered cell into a *shadow* pointing back at the origin.
//! Merge regions never overlap: [`Grid::can_merge`] refuses any rectangle
//! that intersects an existing merge.
//!
//! Both [`Grid::merge`] and [`Grid::split`] treat a failed precondition as a
//! no-op and return an unchanged grid. They run from hover and preview paths;
//! callers that need feedback check [`Grid::can_merge`] or
//! [`Cell::is_spanning`] first.

use crate::cell::{Cell, CellAddress};
use crate::grid::Grid;
use crate::selection::{Selection, SelectionRect};

/// Separator placed between the contents of merged cells
pub const MERGE_SEPARATOR: &str = " ";

impl Grid {
    /// Whether `selection` can be merged into a single cell
    ///
    /// True iff the rectangle lies inside the grid, covers more than one
    /// cell, none of its cells is a shadow or a spanning origin, and it does
    /// not intersect the rectangle of any existing merge. The last check
    /// matters after an insertion placed unit cells inside an anchored span.
    pub fn can_merge(&self, selection: &Selection) -> bool {
        let rect = selection.normalize();
        if !rect.fits(self) || rect.is_single_cell() {
            return false;
        }

        rect.cells()
            .filter_map(|addr| self.cell(addr))
            .all(Cell::is_unit)
            && !self
                .origins()
                .any(|(origin, cell)| self.span_rect(origin, cell).overlaps(&rect))
    }

    /// Merge the selected rectangle into one origin cell
    ///
    /// Non-empty contents are joined in row-major order with a single space.
    ///
    /// ```rust
    /// use tablegrid_core::{Grid, Selection};
    ///
    /// let grid = Grid::initialize(3, 3)
    ///     .with_content(0, 0, "Hello").unwrap()
    ///     .with_content(1, 1, "world").unwrap();
    /// let merged = grid.merge(&Selection::new((0, 0), (1, 1)));
    ///
    /// let origin = merged.get_cell(0, 0).unwrap();
    /// assert_eq!(origin.content, "Hello world");
    /// assert_eq!(origin.span(), (2, 2));
    /// ```
    pub fn merge(&self, selection: &Selection) -> Grid {
        if !self.can_merge(selection) {
            log::debug!(
                "merge of {}:{} refused",
                selection.anchor,
                selection.focus
            );
            return self.clone();
        }

        let rect = selection.normalize();
        let origin = rect.top_left();

        let content = rect
            .cells()
            .filter_map(|addr| self.cell(addr))
            .map(|cell| cell.content.as_str())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(MERGE_SEPARATOR);

        let mut next = self.clone();
        for addr in rect.cells() {
            let Some(cell) = next.cell_mut(addr) else {
                continue;
            };
            if addr == origin {
                cell.content = content.clone();
                cell.row_span = span_len(rect.row_count());
                cell.col_span = span_len(rect.col_count());
            } else {
                *cell = Cell::shadow(origin, cell.is_header);
            }
        }

        log::trace!(
            "merged {}x{} cells into {}",
            rect.row_count(),
            rect.col_count(),
            origin
        );
        next
    }

    /// Split a spanning origin back into unit cells
    ///
    /// The origin keeps its content; every other cell of its former
    /// rectangle becomes an empty unit cell.
    pub fn split(&self, row: usize, col: usize) -> Grid {
        let origin = CellAddress::new(row, col);
        let Some(cell) = self.cell(origin).filter(|cell| cell.is_spanning()) else {
            log::debug!("split at {} ignored: not a merged origin", origin);
            return self.clone();
        };

        let rect = self.span_rect(origin, cell);

        let mut next = self.clone();
        for addr in rect.cells() {
            let is_header = next.header_for(addr.row, addr.col);
            let Some(target) = next.cell_mut(addr) else {
                continue;
            };
            if addr == origin {
                target.row_span = 1;
                target.col_span = 1;
            } else {
                *target = Cell::unit(is_header);
            }
        }

        // Shadows pushed outside the rectangle by an insertion
        let strays: Vec<CellAddress> = next
            .iter_rows()
            .enumerate()
            .flat_map(|(r, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .filter(|(_, cell)| cell.is_merged && cell.merge_origin == Some(origin))
                    .map(move |(c, _)| CellAddress::new(r, c))
            })
            .collect();
        for addr in strays {
            let is_header = next.header_for(addr.row, addr.col);
            if let Some(target) = next.cell_mut(addr) {
                *target = Cell::unit(is_header);
            }
        }

        log::trace!("split {} into {} cells", origin, rect.cell_count());
        next
    }

    /// Rectangle covered by an origin's span, clipped to the grid
    fn span_rect(&self, origin: CellAddress, cell: &Cell) -> SelectionRect {
        let last_row = self.rows().saturating_sub(1);
        let last_col = self.cols().saturating_sub(1);
        SelectionRect {
            min_row: origin.row,
            max_row: (origin.row + cell.row_span.max(1) as usize - 1).min(last_row),
            min_col: origin.col,
            max_col: (origin.col + cell.col_span.max(1) as usize - 1).min(last_col),
        }
    }
}

fn span_len(len: usize) -> u32 {
    // Selections are bounded by the grid, far below u32::MAX
    u32::try_from(len).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn abc() -> Grid {
        let mut grid = Grid::initialize(3, 3);
        for (i, text) in ["a", "b", "", "d", "e", "f", "g", "h", "i"].iter().enumerate() {
            grid = grid.with_content(i / 3, i % 3, *text).unwrap();
        }
        grid
    }

    #[test]
    fn test_merge_two_by_two() {
        let grid = Grid::initialize(3, 3).merge(&Selection::new((0, 0), (1, 1)));

        let origin = grid.get_cell(0, 0).unwrap();
        assert_eq!(origin.span(), (2, 2));
        assert!(!origin.is_merged);

        for (row, col) in [(0, 1), (1, 0), (1, 1)] {
            let shadow = grid.get_cell(row, col).unwrap();
            assert!(shadow.is_merged);
            assert_eq!(shadow.merge_origin, Some(CellAddress::new(0, 0)));
        }
        assert!(grid.get_cell(2, 2).unwrap().is_unit());
    }

    #[test]
    fn test_merge_concatenates_non_empty_content() {
        let grid = abc().merge(&Selection::new((1, 2), (0, 0)));
        assert_eq!(grid.get_cell(0, 0).unwrap().content, "a b d e f");
        assert_eq!(grid.get_cell(0, 0).unwrap().span(), (2, 3));
        assert_eq!(grid.get_cell(1, 2).unwrap().content, "");
        assert_eq!(grid.get_cell(2, 0).unwrap().content, "g");
    }

    #[test]
    fn test_shadows_keep_header_flag() {
        let grid = Grid::initialize(2, 2).merge(&Selection::new((0, 0), (0, 1)));
        assert!(grid.get_cell(0, 1).unwrap().is_header);
        assert!(grid.get_cell(0, 1).unwrap().is_merged);
    }

    #[test]
    fn test_can_merge_rules() {
        let grid = Grid::initialize(4, 4);
        assert!(grid.can_merge(&Selection::new((0, 0), (0, 1))));
        assert!(!grid.can_merge(&Selection::single((1, 1))));
        assert!(!grid.can_merge(&Selection::new((3, 3), (4, 4))));

        let merged = grid.merge(&Selection::new((1, 1), (2, 2)));
        // Touching the origin, a shadow, or enclosing the region
        assert!(!merged.can_merge(&Selection::new((0, 0), (1, 1))));
        assert!(!merged.can_merge(&Selection::new((2, 2), (3, 3))));
        assert!(!merged.can_merge(&Selection::new((0, 0), (3, 3))));
        assert!(merged.can_merge(&Selection::new((3, 0), (3, 3))));
    }

    #[test]
    fn test_refused_merge_is_noop() {
        let grid = Grid::initialize(3, 3).merge(&Selection::new((0, 0), (1, 1)));
        let again = grid.merge(&Selection::new((1, 1), (2, 2)));
        assert_eq!(again, grid);
        assert_eq!(grid.merge(&Selection::single((2, 2))), grid);
    }

    #[test]
    fn test_split_restores_unit_cells() {
        let grid = abc();
        let merged = grid.merge(&Selection::new((0, 0), (1, 1)));
        let split = merged.split(0, 0);

        assert_eq!(split.rows(), grid.rows());
        assert_eq!(split.cols(), grid.cols());
        assert_eq!(split.origins().count(), 0);
        assert!(split.iter_rows().flatten().all(|cell| cell.is_unit()));

        // Content concatenation is lossy: only the origin keeps text
        assert_eq!(split.get_cell(0, 0).unwrap().content, "a b d e");
        assert_eq!(split.get_cell(1, 1).unwrap().content, "");
        // Header flags follow the grid's header row
        assert!(split.get_cell(0, 1).unwrap().is_header);
        assert!(!split.get_cell(1, 0).unwrap().is_header);
    }

    #[test]
    fn test_split_non_origin_is_noop() {
        let grid = Grid::initialize(3, 3).merge(&Selection::new((0, 0), (1, 1)));
        assert_eq!(grid.split(1, 1), grid);
        assert_eq!(grid.split(2, 2), grid);
        assert_eq!(grid.split(9, 9), grid);
    }

    #[test]
    fn test_split_after_insert_releases_displaced_shadows() {
        use crate::mutate::RowPosition;

        let grid = Grid::initialize(4, 1)
            .merge(&Selection::new((1, 0), (2, 0)))
            .insert_row(1, RowPosition::Below)
            .unwrap();
        // The shadow was pushed to row 3, outside the unchanged 2x1 span
        assert_eq!(grid.get_cell(3, 0).unwrap().merge_origin, Some(CellAddress::new(1, 0)));

        let split = grid.split(1, 0);
        assert_eq!(split.origins().count(), 0);
        assert!(split.iter_rows().flatten().all(|cell| cell.is_unit()));
    }

    #[test]
    fn test_can_merge_rejects_cells_inserted_into_a_span() {
        use crate::mutate::RowPosition;

        let grid = Grid::initialize(4, 2)
            .merge(&Selection::new((0, 0), (2, 0)))
            .insert_row(0, RowPosition::Below)
            .unwrap();
        // Row 1 holds fresh unit cells, but (1, 0) is still under the 3x1 span
        assert!(grid.get_cell(1, 0).unwrap().is_unit());
        let selection = Selection::new((1, 0), (1, 1));
        assert!(!grid.can_merge(&selection));
        assert_eq!(grid.merge(&selection), grid);

        // Clear of the span, the same row merges
        assert!(grid.can_merge(&Selection::new((4, 0), (4, 1))));
    }

    #[test]
    fn test_split_clips_oversized_span() {
        let mut origin = Cell::new("x");
        origin.row_span = 1_000_000;
        origin.col_span = 1_000_000;
        let grid = Grid::from_cells(vec![
            vec![origin, Cell::shadow(CellAddress::new(0, 0), false)],
            vec![Cell::shadow(CellAddress::new(0, 0), false), Cell::new("")],
        ]);

        let split = grid.split(0, 0);
        assert_eq!(split.get_cell(0, 0).unwrap().span(), (1, 1));
        assert_eq!(split.get_cell(0, 0).unwrap().content, "x");
        assert!(split.iter_rows().flatten().all(|cell| cell.is_unit()));
    }

    #[test]
    fn test_merge_after_split() {
        let grid = Grid::initialize(3, 3)
            .merge(&Selection::new((0, 0), (1, 1)))
            .split(0, 0);
        assert!(grid.can_merge(&Selection::new((1, 1), (2, 2))));
    }
}
