//! Spatial-subsystem error type.

use thiserror::Error;

use gt_core::Cell;

/// Errors produced by `gt-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("cell {0} is outside the board")]
    CellOutOfBounds(Cell),

    #[error("invalid board geometry: {0}")]
    InvalidBoard(String),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
