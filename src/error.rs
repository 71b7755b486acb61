//! Error type
use crate::agents::BuildAgentError;
use crate::envs::{BuildEnvError, InvalidActionError};
use crate::logging::LogError;
use crate::simulation::SimulationError;
use thiserror::Error;

/// Error from the `kbandit` crate.
#[derive(Error, Debug)]
pub enum BanditError {
    #[error("error building agent")]
    BuildAgent(#[from] BuildAgentError),
    #[error("error building environment")]
    BuildEnv(#[from] BuildEnvError),
    #[error(transparent)]
    InvalidAction(#[from] InvalidActionError),
    #[error(transparent)]
    Log(#[from] LogError),
    #[error("simulation failed")]
    Simulation(#[from] SimulationError),
}
