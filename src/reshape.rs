//! FILENAME: src/reshape.rs
//! PURPOSE: Reshapes a linear slice into a one-column or one-row grid.
//! CONTEXT: The degenerate composition case: a flat sequence becomes a
//! grid with a single column (row-wise) or a single row (column-wise),
//! elements converted in source order with no reordering or filtering.

use crate::error::ReshapeError;
use crate::grid::Grid;

impl<V> Grid<V> {
    /// Converts `source[start .. start + count]` into a `count x 1` grid
    /// (`row_wise` true) or a `1 x count` grid (`row_wise` false), cell by
    /// cell in source order, zero offsets.
    ///
    /// Fails with an out-of-range error if `count < 1`, `start` is past
    /// the end of the slice, or the window extends past the end.
    pub fn from_linear<S, F>(
        source: &[S],
        convert: F,
        start: usize,
        count: usize,
        row_wise: bool,
    ) -> Result<Self, ReshapeError>
    where
        F: FnMut(&S) -> V,
    {
        Self::from_linear_checked(source, convert, start, count, row_wise, "from_linear")
    }

    /// Full-sequence row-wise reshape: the whole slice as an `n x 1` grid.
    pub fn from_linear_rows<S, F>(source: &[S], convert: F) -> Result<Self, ReshapeError>
    where
        F: FnMut(&S) -> V,
    {
        Self::from_linear_checked(source, convert, 0, source.len(), true, "from_linear_rows")
    }

    /// Full-sequence column-wise reshape: the whole slice as a `1 x n` grid.
    pub fn from_linear_cols<S, F>(source: &[S], convert: F) -> Result<Self, ReshapeError>
    where
        F: FnMut(&S) -> V,
    {
        Self::from_linear_checked(source, convert, 0, source.len(), false, "from_linear_cols")
    }

    fn from_linear_checked<S, F>(
        source: &[S],
        convert: F,
        start: usize,
        count: usize,
        row_wise: bool,
        op: &'static str,
    ) -> Result<Self, ReshapeError>
    where
        F: FnMut(&S) -> V,
    {
        if count < 1 {
            return Err(ReshapeError::OutOfRange(
                op,
                format!("count must be >= 1, got {count}"),
            ));
        }
        if start >= source.len() {
            return Err(ReshapeError::OutOfRange(
                op,
                format!("start {} outside source of length {}", start, source.len()),
            ));
        }
        // `start < source.len()` holds here, so the subtraction cannot
        // underflow and `start + count` never needs to be computed.
        if count > source.len() - start {
            return Err(ReshapeError::OutOfRange(
                op,
                format!(
                    "count {} exceeds the {} elements available from index {} in a source of length {}",
                    count,
                    source.len() - start,
                    start,
                    source.len()
                ),
            ));
        }

        let cells: Vec<V> = source[start..start + count].iter().map(convert).collect();
        let (rows, cols) = if row_wise {
            (count as u32, 1)
        } else {
            (1, count as u32)
        };
        Ok(Grid::from_raw(cells, rows, cols))
    }
}
