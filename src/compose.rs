//! FILENAME: src/compose.rs
//! PURPOSE: Builds a grid from a sequence of typed records.
//! CONTEXT: The "compose" direction of the adapter: domain records in,
//! tabular data out. The single-row variant writes one output row per
//! record; the multi-row variant expands each record into a fixed-size
//! block of consecutive rows. Both buffer the input sequence first, since
//! the record count is needed to size the rectangular output.

use crate::error::ReshapeError;
use crate::grid::Grid;

impl<V> Grid<V> {
    /// Builds an `n x cols` zero-offset grid from `n` records, one output
    /// row per record, in the sequence's order.
    ///
    /// Row *i* is `convert(record_i)` written verbatim. A converted row
    /// whose length differs from `cols` aborts with a dimension-mismatch
    /// error; nothing is truncated and no cell is left unset. Zero records
    /// yield a `0 x cols` grid.
    pub fn compose<R, I, F>(records: I, mut convert: F, cols: u32) -> Result<Self, ReshapeError>
    where
        I: IntoIterator<Item = R>,
        F: FnMut(&R) -> Vec<V>,
    {
        let records: Vec<R> = records.into_iter().collect();
        let width = cols as usize;

        let mut cells = Vec::with_capacity(records.len() * width);
        for record in &records {
            let row = convert(record);
            if row.len() != width {
                return Err(ReshapeError::DimensionMismatch("compose", width, row.len()));
            }
            cells.extend(row);
        }
        Ok(Grid::from_raw(cells, records.len() as u32, cols))
    }

    /// Builds an `(n * inner) x cols` zero-offset grid from `n` records,
    /// each expanding into `inner` consecutive output rows.
    ///
    /// Record *i*'s *j*-th inner array occupies output row
    /// `i * inner + j`: records fill consecutive row blocks of size
    /// `inner` starting at row 0, inner arrays in conversion order within
    /// each block. A block whose outer length differs from `inner`, or any
    /// inner array whose length differs from `cols`, aborts with a
    /// dimension-mismatch error.
    pub fn compose_multi<R, I, F>(
        records: I,
        mut convert: F,
        cols: u32,
        inner: u32,
    ) -> Result<Self, ReshapeError>
    where
        I: IntoIterator<Item = R>,
        F: FnMut(&R) -> Vec<Vec<V>>,
    {
        let records: Vec<R> = records.into_iter().collect();
        let width = cols as usize;
        let block_rows = inner as usize;

        let mut cells = Vec::with_capacity(records.len() * block_rows * width);
        for (record_index, record) in records.iter().enumerate() {
            let block = convert(record);
            if block.len() != block_rows {
                return Err(ReshapeError::DimensionMismatch(
                    "compose_multi",
                    block_rows,
                    block.len(),
                ));
            }
            for (inner_index, row) in block.into_iter().enumerate() {
                if row.len() != width {
                    return Err(ReshapeError::DimensionMismatch(
                        "compose_multi",
                        width,
                        row.len(),
                    ));
                }
                // Explicit block-index placement: record_index * inner + inner_index.
                let target_row = record_index * block_rows + inner_index;
                debug_assert_eq!(cells.len(), target_row * width);
                cells.extend(row);
            }
        }
        Ok(Grid::from_raw(cells, (records.len() * block_rows) as u32, cols))
    }
}
