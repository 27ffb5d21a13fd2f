//! FILENAME: src/lib.rs
//! PURPOSE: Main library entry point for the reshape engine.
//! CONTEXT: Bounds-checked conversions between two-dimensional cell grids
//! and linear sequences of strongly-typed records. Four stateless operation
//! families: parse (grid region -> tagged record iterator), flatten (grid
//! region -> row-major Vec), compose (record sequence -> grid), and reshape
//! (linear slice -> one-row or one-column grid). Each call is an isolated
//! transform over its arguments; nothing is retained between calls.

pub mod compose;
pub mod error;
pub mod flatten;
pub mod grid;
pub mod parse;
pub mod region;
pub mod reshape;
pub mod value;

// Re-export commonly used types at the crate root
pub use error::ReshapeError;
pub use grid::Grid;
pub use parse::ParsedRows;
pub use region::Region;
pub use value::CellValue;
