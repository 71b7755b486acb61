//! Epsilon-greedy action selection
use super::super::{ActionValues, BuildAgentError, Policy};
use crate::Prng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Epsilon-greedy action selection.
///
/// With probability `exploration_rate` selects an action uniformly at random,
/// otherwise selects greedily.
/// An exploration rate of 0 is [`Greedy`](super::Greedy) and 1 is uniform random.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpsilonGreedy {
    /// Probability of taking a random action. Must be in `[0, 1]`.
    pub exploration_rate: f64,
}

impl EpsilonGreedy {
    pub const fn new(exploration_rate: f64) -> Self {
        Self { exploration_rate }
    }
}

impl Default for EpsilonGreedy {
    fn default() -> Self {
        Self::new(0.1)
    }
}

impl fmt::Display for EpsilonGreedy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "EpsilonGreedy(ε={})", self.exploration_rate)
    }
}

impl Policy for EpsilonGreedy {
    fn validate(&self) -> Result<(), BuildAgentError> {
        if (0.0..=1.0).contains(&self.exploration_rate) {
            Ok(())
        } else {
            Err(BuildAgentError::InvalidExplorationRate(
                self.exploration_rate,
            ))
        }
    }

    fn select_action(&self, values: &ActionValues, rng: &mut Prng) -> usize {
        // The exploration draw happens on every step, even for rates of 0 or 1
        if rng.gen::<f64>() < self.exploration_rate {
            rng.gen_range(0..values.num_actions().max(1))
        } else {
            values.greedy_action()
        }
    }
}
