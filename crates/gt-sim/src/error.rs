use gt_core::{AgentId, GtError};
use gt_mobility::MobilityError;
use gt_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("agent {0} is not live")]
    AgentNotLive(AgentId),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error(transparent)]
    Core(#[from] GtError),

    #[error("spatial error: {0}")]
    Spatial(#[from] SpatialError),

    #[error("mobility error: {0}")]
    Mobility(#[from] MobilityError),
}

pub type SimResult<T> = Result<T, SimError>;
