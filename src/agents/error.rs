//! Agent errors
use thiserror::Error;

/// Error constructing an agent
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildAgentError {
    #[error("exploration rate {0} is not in [0, 1]")]
    InvalidExplorationRate(f64),
    #[error("UCB exploration rate {0} must be finite and non-negative")]
    InvalidUcbExplorationRate(f64),
    #[error("initial value {0} is not finite")]
    NonFiniteInitialValue(f64),
    #[error("the bandit has no actions")]
    NoActions,
}
