//! FILENAME: src/flatten.rs
//! PURPOSE: Flattens a grid region into a single row-major `Vec` via a
//! per-cell conversion.
//! CONTEXT: The eager counterpart of `parse`: the bounds contract is the
//! same, but the entire output buffer is materialized and returned as one
//! unit, cells laid out in row-major order.

use crate::error::ReshapeError;
use crate::grid::Grid;
use crate::region::Region;

impl<V> Grid<V> {
    /// Converts every cell of `region` into a flat `Vec` of length
    /// `region.rows * region.cols`, in row-major order (all columns of the
    /// first row, then all columns of the next).
    ///
    /// The region is validated before the output buffer is allocated;
    /// `convert` is invoked exactly once per cell, in output order.
    pub fn to_flat_region<F, T>(&self, mut convert: F, region: Region) -> Result<Vec<T>, ReshapeError>
    where
        F: FnMut(&V) -> T,
    {
        region.validate(self, "to_flat_region")?;

        let mut out = Vec::with_capacity(region.rows as usize * region.cols as usize);
        for row in region.row_start..region.row_end() {
            for col in region.col_start..region.col_end() {
                out.push(convert(self.cell(row, col)));
            }
        }
        Ok(out)
    }

    /// [`to_flat_region`](Self::to_flat_region) over the full grid.
    pub fn to_flat<F, T>(&self, convert: F) -> Result<Vec<T>, ReshapeError>
    where
        F: FnMut(&V) -> T,
    {
        let region = self.full_region();
        region.validate(self, "to_flat")?;
        self.to_flat_region(convert, region)
    }
}
