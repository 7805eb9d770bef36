//! Framework error type.
//!
//! Sub-crates define their own error enums and convert into their callers'
//! enums via `From` impls; `GtError` covers the foundations only.

use thiserror::Error;

use crate::{AgentId, Cell};

/// The top-level error type for `gt-core`.
#[derive(Debug, Error)]
pub enum GtError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("cell {0} is outside the board")]
    CellOutOfBounds(Cell),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `gt-core`.
pub type GtResult<T> = Result<T, GtError>;
