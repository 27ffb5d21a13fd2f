//! FILENAME: src/region.rs
//! PURPOSE: Caller-specified sub-rectangles of a grid and their validation.
//! CONTEXT: Every region-scoped operation validates its region against the
//! source grid before touching any cell. Checks are half-open interval
//! checks against each axis's (offset, extent) pair.

use serde::{Deserialize, Serialize};

use crate::error::ReshapeError;
use crate::grid::Grid;

/// A sub-rectangle of a [`Grid`], addressed in absolute coordinates.
///
/// A region is only meaningful for a particular grid; [`Region::validate`]
/// checks it against that grid's bounds and both extents being at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Absolute index of the region's first row.
    pub row_start: u32,

    /// Absolute index of the region's first column.
    pub col_start: u32,

    /// Number of rows covered.
    pub rows: u32,

    /// Number of columns covered.
    pub cols: u32,
}

impl Region {
    pub fn new(row_start: u32, col_start: u32, rows: u32, cols: u32) -> Self {
        Region {
            row_start,
            col_start,
            rows,
            cols,
        }
    }

    /// One past the region's last row.
    ///
    /// Meaningful only for a region that validated against its grid;
    /// [`validate`](Self::validate) itself never computes this sum.
    pub fn row_end(&self) -> u32 {
        self.row_start + self.rows
    }

    /// One past the region's last column.
    pub fn col_end(&self) -> u32 {
        self.col_start + self.cols
    }

    /// Checks that the region lies entirely within `grid` and that both
    /// extents are at least 1. `op` names the operation on whose behalf the
    /// check runs and is carried into the error.
    pub fn validate<V>(&self, grid: &Grid<V>, op: &'static str) -> Result<(), ReshapeError> {
        if self.rows < 1 || self.cols < 1 {
            return Err(ReshapeError::OutOfRange(
                op,
                format!("region extents must be >= 1, got {}x{}", self.rows, self.cols),
            ));
        }
        if self.row_start < grid.row_offset() || self.row_start >= grid.row_end() {
            return Err(ReshapeError::OutOfRange(
                op,
                format!(
                    "row start {} outside grid rows [{}, {})",
                    self.row_start,
                    grid.row_offset(),
                    grid.row_end()
                ),
            ));
        }
        if self.col_start < grid.col_offset() || self.col_start >= grid.col_end() {
            return Err(ReshapeError::OutOfRange(
                op,
                format!(
                    "column start {} outside grid columns [{}, {})",
                    self.col_start,
                    grid.col_offset(),
                    grid.col_end()
                ),
            ));
        }
        // Compare extents by subtraction: the start checks above guarantee
        // `start < end` on each axis, and `start + extent` could overflow.
        if self.rows > grid.row_end() - self.row_start {
            return Err(ReshapeError::OutOfRange(
                op,
                format!(
                    "row count {} exceeds the {} rows available from row {}",
                    self.rows,
                    grid.row_end() - self.row_start,
                    self.row_start
                ),
            ));
        }
        if self.cols > grid.col_end() - self.col_start {
            return Err(ReshapeError::OutOfRange(
                op,
                format!(
                    "column count {} exceeds the {} columns available from column {}",
                    self.cols,
                    grid.col_end() - self.col_start,
                    self.col_start
                ),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_3x2() -> Grid<i64> {
        Grid::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap()
    }

    #[test]
    fn test_full_region_valid() {
        let grid = grid_3x2();
        assert!(grid.full_region().validate(&grid, "test").is_ok());
    }

    #[test]
    fn test_corner_cell_valid() {
        // 1x1 region at the exact upper-bound corner succeeds.
        let grid = grid_3x2();
        assert!(Region::new(2, 1, 1, 1).validate(&grid, "test").is_ok());
    }

    #[test]
    fn test_one_past_either_bound_fails() {
        let grid = grid_3x2();
        assert!(Region::new(2, 1, 2, 1).validate(&grid, "test").is_err());
        assert!(Region::new(2, 1, 1, 2).validate(&grid, "test").is_err());
        assert!(Region::new(3, 0, 1, 1).validate(&grid, "test").is_err());
        assert!(Region::new(0, 2, 1, 1).validate(&grid, "test").is_err());
    }

    #[test]
    fn test_huge_extent_reports_out_of_range() {
        // Extents near u32::MAX must yield the ordinary out-of-range error,
        // not wrap the start + extent sum.
        let grid = grid_3x2();
        let err = Region::new(2, 0, u32::MAX, 1).validate(&grid, "test").unwrap_err();
        assert!(matches!(err, ReshapeError::OutOfRange("test", _)));
        let err = Region::new(0, 1, 1, u32::MAX).validate(&grid, "test").unwrap_err();
        assert!(matches!(err, ReshapeError::OutOfRange("test", _)));
    }

    #[test]
    fn test_zero_extent_fails() {
        let grid = grid_3x2();
        assert!(Region::new(0, 0, 0, 1).validate(&grid, "test").is_err());
        assert!(Region::new(0, 0, 1, 0).validate(&grid, "test").is_err());
    }

    #[test]
    fn test_offset_grid_start_below_offset_fails() {
        let grid = Grid::with_offset(1, 1, 2, 2, 0i64);
        let err = Region::new(0, 1, 1, 1).validate(&grid, "parse_region").unwrap_err();
        assert!(matches!(err, ReshapeError::OutOfRange("parse_region", _)));
        assert!(Region::new(1, 1, 2, 2).validate(&grid, "parse_region").is_ok());
    }
}
