use gt_core::AgentId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("agent {0} has no movement slot")]
    UnknownAgent(AgentId),
}

pub type MobilityResult<T> = Result<T, MobilityError>;
