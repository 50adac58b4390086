//! Construction errors.
//!
//! Once an [`Engine`](crate::Engine) exists, none of its operations fail;
//! everything that can go wrong is rejected here, up front.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid board dimensions {width}x{height}: both must be at least 1")]
    InvalidDimensions { width: u16, height: u16 },
    #[error("invalid tick interval: must be at least 1ms")]
    InvalidTickInterval,
    #[error("invalid cell width: must be at least 1 terminal column")]
    InvalidCellWidth,
    #[error("shape catalog is empty")]
    EmptyCatalog,
    #[error("shape {0} has no occupied cells")]
    EmptyShape(&'static str),
    #[error("shape {shape} has an empty row {row}")]
    BlankRow { shape: &'static str, row: usize },
    #[error("grid rows must be non-empty and of equal length (row {row} has {len} cells, expected {expected})")]
    RaggedGrid {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("grid must have at least one row and one column")]
    EmptyGrid,
}
