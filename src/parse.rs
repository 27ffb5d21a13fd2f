//! FILENAME: src/parse.rs
//! PURPOSE: Converts a grid region into a lazy sequence of typed records,
//! one per row, each tagged with its absolute source row index.
//! CONTEXT: This is the "parse" direction of the adapter: untyped tabular
//! data in, domain records out. The region is validated up front; the
//! returned iterator then pulls one row per `next()` call.

use std::iter::FusedIterator;

use crate::error::ReshapeError;
use crate::grid::Grid;
use crate::region::Region;

impl<V: Clone> Grid<V> {
    /// Converts each row of `region` into a record via `convert`,
    /// lazily, in ascending row order.
    ///
    /// For every row the closure receives a fresh buffer holding the
    /// region's columns of that row (length `region.cols`) together with
    /// the absolute row index, and is invoked exactly once. The whole
    /// region is validated here, before any row is produced.
    ///
    /// The iterator is single-pass: re-parsing requires calling this
    /// method again, which re-runs the scan and re-invokes every
    /// conversion. It borrows the grid immutably, so the grid cannot be
    /// mutated while the sequence is outstanding.
    pub fn parse_region<F, T>(
        &self,
        convert: F,
        region: Region,
    ) -> Result<ParsedRows<'_, V, F>, ReshapeError>
    where
        F: FnMut(Vec<V>, u32) -> T,
    {
        region.validate(self, "parse_region")?;
        Ok(ParsedRows {
            grid: self,
            region,
            next_row: region.row_start,
            convert,
        })
    }

    /// [`parse_region`](Self::parse_region) over the full grid.
    ///
    /// Fails with an out-of-range error if the grid has zero extent on
    /// either axis.
    pub fn parse_all<F, T>(&self, convert: F) -> Result<ParsedRows<'_, V, F>, ReshapeError>
    where
        F: FnMut(Vec<V>, u32) -> T,
    {
        let region = self.full_region();
        region.validate(self, "parse_all")?;
        Ok(ParsedRows {
            grid: self,
            region,
            next_row: region.row_start,
            convert,
        })
    }
}

/// Lazy row-by-row record sequence over a validated grid region.
///
/// Holds the source grid reference, the region, and an absolute row
/// cursor; each pull copies one row's cells, tags on the row index, and
/// yields the conversion result. Created by [`Grid::parse_region`] and
/// [`Grid::parse_all`].
pub struct ParsedRows<'g, V, F> {
    grid: &'g Grid<V>,
    region: Region,
    /// Absolute index of the next row to produce.
    next_row: u32,
    convert: F,
}

impl<'g, V, F, T> Iterator for ParsedRows<'g, V, F>
where
    V: Clone,
    F: FnMut(Vec<V>, u32) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.next_row >= self.region.row_end() {
            return None;
        }
        let row = self.next_row;
        self.next_row += 1;

        let mut buffer = Vec::with_capacity(self.region.cols as usize);
        for col in self.region.col_start..self.region.col_end() {
            buffer.push(self.grid.cell(row, col).clone());
        }
        Some((self.convert)(buffer, row))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.region.row_end().saturating_sub(self.next_row) as usize;
        (remaining, Some(remaining))
    }
}

impl<'g, V, F, T> ExactSizeIterator for ParsedRows<'g, V, F>
where
    V: Clone,
    F: FnMut(Vec<V>, u32) -> T,
{
}

impl<'g, V, F, T> FusedIterator for ParsedRows<'g, V, F>
where
    V: Clone,
    F: FnMut(Vec<V>, u32) -> T,
{
}
