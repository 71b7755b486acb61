//! Reward sources: multi-armed bandit environments
mod bandits;
mod builder;

pub use bandits::StationaryBandit;
pub use builder::{BuildEnvError, EnvBuilder, StationaryBanditConfig};

use crate::Prng;
use thiserror::Error;

/// A multi-armed bandit: a stochastic reward source with a fixed number of actions.
///
/// Sampling takes `&self`; a bandit may be shared by any number of agents.
/// All random state is supplied by the caller.
pub trait Bandit {
    /// The number of selectable actions. Actions are the indices `0 .. num_actions()`.
    fn num_actions(&self) -> usize;

    /// Sample a reward for taking the given action.
    ///
    /// # Errors
    /// Returns [`InvalidActionError`] if `action >= self.num_actions()`.
    fn sample(&self, action: usize, rng: &mut Prng) -> Result<f64, InvalidActionError>;
}

impl<B: Bandit + ?Sized> Bandit for &B {
    fn num_actions(&self) -> usize {
        B::num_actions(self)
    }
    fn sample(&self, action: usize, rng: &mut Prng) -> Result<f64, InvalidActionError> {
        B::sample(self, action, rng)
    }
}

impl<B: Bandit + ?Sized> Bandit for Box<B> {
    fn num_actions(&self) -> usize {
        B::num_actions(self)
    }
    fn sample(&self, action: usize, rng: &mut Prng) -> Result<f64, InvalidActionError> {
        B::sample(self, action, rng)
    }
}

/// An action index outside of the bandit's action range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("action {action} is out of range for {num_actions} actions")]
pub struct InvalidActionError {
    pub action: usize,
    pub num_actions: usize,
}
