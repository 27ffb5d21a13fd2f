//! FILENAME: src/grid.rs
//! PURPOSE: The dense rectangular cell buffer that every reshaping
//! operation reads from or writes into.
//! CONTEXT: This file defines the `Grid` struct, a row-major `Vec` of cells
//! with an independent (offset, extent) pair per axis. Axis bounds are fixed
//! at construction; valid absolute indices on each axis form the half-open
//! interval [offset, offset + extent).

use serde::{Deserialize, Serialize};

use crate::error::ReshapeError;
use crate::region::Region;

/// A rectangular two-axis indexed buffer of values.
///
/// Storage is dense and row-major, so true rectangularity (every row has
/// the same column extent) holds by construction. The element type is
/// unconstrained; callers working with untyped tabular data typically use
/// [`CellValue`](crate::CellValue).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid<V> {
    /// Row-major cell storage, `rows * cols` elements.
    cells: Vec<V>,

    /// Absolute index of the first row.
    row_offset: u32,

    /// Absolute index of the first column.
    col_offset: u32,

    /// Row extent.
    rows: u32,

    /// Column extent.
    cols: u32,
}

impl<V> Grid<V> {
    /// Creates a zero-offset grid of the given extents, every cell set to
    /// a copy of `fill`.
    pub fn new(rows: u32, cols: u32, fill: V) -> Self
    where
        V: Clone,
    {
        Self::with_offset(0, 0, rows, cols, fill)
    }

    /// Creates a grid whose axes start at the given absolute offsets.
    pub fn with_offset(row_offset: u32, col_offset: u32, rows: u32, cols: u32, fill: V) -> Self
    where
        V: Clone,
    {
        Grid {
            cells: vec![fill; rows as usize * cols as usize],
            row_offset,
            col_offset,
            rows,
            cols,
        }
    }

    /// Builds a zero-offset grid from a list of rows.
    ///
    /// Fails with a dimension-mismatch error if the rows are ragged (any
    /// row's length differs from the first row's).
    pub fn from_rows(rows: Vec<Vec<V>>) -> Result<Self, ReshapeError> {
        let cols = rows.first().map_or(0, |r| r.len());
        let row_count = rows.len();
        let mut cells = Vec::with_capacity(row_count * cols);
        for row in rows {
            if row.len() != cols {
                return Err(ReshapeError::DimensionMismatch("from_rows", cols, row.len()));
            }
            cells.extend(row);
        }
        Ok(Grid {
            cells,
            row_offset: 0,
            col_offset: 0,
            rows: row_count as u32,
            cols: cols as u32,
        })
    }

    /// Row extent.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Column extent.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Absolute index of the first row.
    pub fn row_offset(&self) -> u32 {
        self.row_offset
    }

    /// Absolute index of the first column.
    pub fn col_offset(&self) -> u32 {
        self.col_offset
    }

    /// One past the last valid row index.
    pub fn row_end(&self) -> u32 {
        self.row_offset + self.rows
    }

    /// One past the last valid column index.
    pub fn col_end(&self) -> u32 {
        self.col_offset + self.cols
    }

    /// Whether the absolute coordinate lies inside the grid's bounds.
    pub fn contains(&self, row: u32, col: u32) -> bool {
        (self.row_offset..self.row_end()).contains(&row)
            && (self.col_offset..self.col_end()).contains(&col)
    }

    /// The region covering the entire grid.
    pub fn full_region(&self) -> Region {
        Region::new(self.row_offset, self.col_offset, self.rows, self.cols)
    }

    /// Retrieves a reference to the cell at the given absolute coordinates.
    /// Returns None if the coordinate is outside the grid's bounds.
    pub fn get(&self, row: u32, col: u32) -> Option<&V> {
        if self.contains(row, col) {
            Some(&self.cells[self.index_of(row, col)])
        } else {
            None
        }
    }

    /// Mutable variant of [`get`](Self::get).
    pub fn get_mut(&mut self, row: u32, col: u32) -> Option<&mut V> {
        if self.contains(row, col) {
            let idx = self.index_of(row, col);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    /// Replaces the cell at the given absolute coordinates.
    ///
    /// Unlike a sparse grid, a dense buffer cannot grow on write: setting
    /// outside the fixed bounds is an out-of-range error.
    pub fn set(&mut self, row: u32, col: u32, value: V) -> Result<(), ReshapeError> {
        match self.get_mut(row, col) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(ReshapeError::OutOfRange(
                "set",
                format!("cell ({row}, {col}) outside grid bounds"),
            )),
        }
    }

    /// Flat storage index of an in-bounds absolute coordinate.
    fn index_of(&self, row: u32, col: u32) -> usize {
        let r = (row - self.row_offset) as usize;
        let c = (col - self.col_offset) as usize;
        r * self.cols as usize + c
    }

    /// In-bounds cell access for internal traversal. The caller has already
    /// validated the coordinate against the grid (region validation).
    pub(crate) fn cell(&self, row: u32, col: u32) -> &V {
        &self.cells[self.index_of(row, col)]
    }

    /// Constructs a zero-offset grid directly from row-major storage.
    /// `cells.len()` must equal `rows * cols`.
    pub(crate) fn from_raw(cells: Vec<V>, rows: u32, cols: u32) -> Self {
        debug_assert_eq!(cells.len(), rows as usize * cols as usize);
        Grid {
            cells,
            row_offset: 0,
            col_offset: 0,
            rows,
            cols,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::CellValue;

    #[test]
    fn test_new_fills_cells() {
        let grid = Grid::new(2, 3, 0i64);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.get(1, 2), Some(&0));
        assert_eq!(grid.get(2, 0), None);
    }

    #[test]
    fn test_with_offset_bounds() {
        let grid = Grid::with_offset(1, 1, 3, 2, 0i64);
        assert_eq!(grid.row_offset(), 1);
        assert_eq!(grid.row_end(), 4);
        assert_eq!(grid.col_end(), 3);
        assert!(grid.contains(3, 2));
        assert!(!grid.contains(0, 1));
        assert!(!grid.contains(4, 1));
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::with_offset(1, 1, 2, 2, 0i64);
        grid.set(2, 2, 42).unwrap();
        assert_eq!(grid.get(2, 2), Some(&42));

        let err = grid.set(3, 1, 7).unwrap_err();
        assert!(matches!(err, ReshapeError::OutOfRange("set", _)));
    }

    #[test]
    fn test_from_rows_rectangular() {
        let grid = Grid::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 2);
        assert_eq!(grid.get(2, 1), Some(&6));
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = Grid::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(err, ReshapeError::DimensionMismatch("from_rows", 2, 1));
    }

    #[test]
    fn test_from_rows_empty() {
        let grid: Grid<i64> = Grid::from_rows(Vec::new()).unwrap();
        assert_eq!(grid.rows(), 0);
        assert_eq!(grid.cols(), 0);
    }

    #[test]
    fn test_serde_round_trip() {
        let grid = Grid::from_rows(vec![
            vec![CellValue::Number(1.0), CellValue::Text("a".to_string())],
            vec![CellValue::Boolean(true), CellValue::Empty],
        ])
        .unwrap();

        let json = serde_json::to_string(&grid).unwrap();
        let back: Grid<CellValue> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }
}
