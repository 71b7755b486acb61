//! Running agents on bandits
mod compare;
mod summary;

pub use compare::{compare_agents, AgentReport};
pub use summary::StepsSummary;

use crate::agents::BuildAgentError;
use crate::envs::InvalidActionError;
use crate::logging::LogError;
use thiserror::Error;

/// Error initializing or running a simulation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error(transparent)]
    InvalidAction(#[from] InvalidActionError),
    #[error("error building agent")]
    BuildAgent(#[from] BuildAgentError),
    #[error(transparent)]
    Log(#[from] LogError),
}
