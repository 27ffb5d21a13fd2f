//! FILENAME: src/error.rs

use thiserror::Error;

/// Errors raised by the reshaping operations.
///
/// Both kinds are unrecoverable at the point of detection: the operation
/// aborts before producing any partial result, and surfacing the error is
/// entirely the caller's responsibility. The first field always names the
/// operation that detected the problem.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReshapeError {
    /// A supplied start/count/region falls outside the source structure's
    /// actual bounds on one of its axes.
    #[error("{0}: out of range: {1}")]
    OutOfRange(&'static str, String),

    /// A conversion function produced a row or block whose length does not
    /// match the declared column count (or inner-array count).
    #[error("{0}: dimension mismatch: expected {1} elements, got {2}")]
    DimensionMismatch(&'static str, usize, usize),
}
