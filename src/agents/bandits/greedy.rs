//! Greedy action selection
use super::super::{ActionValues, BuildAgentError, Policy};
use crate::Prng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Always select the action with the largest estimate, preferring the lowest index on ties.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Greedy;

impl fmt::Display for Greedy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Greedy")
    }
}

impl Policy for Greedy {
    fn select_action(&self, values: &ActionValues, _rng: &mut Prng) -> usize {
        values.greedy_action()
    }
}

/// Greedy selection starting from optimistic action value estimates.
///
/// Every action looks attractive until it has been tried,
/// so all actions are explored early without any randomness.
/// Only the initial estimates differ from [`Greedy`]; the update rule is the same.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimisticGreedy {
    /// Initial estimate for every action.
    ///
    /// Should exceed the largest plausible mean reward.
    pub initial_value: f64,
}

impl OptimisticGreedy {
    pub const fn new(initial_value: f64) -> Self {
        Self { initial_value }
    }
}

impl Default for OptimisticGreedy {
    fn default() -> Self {
        Self::new(50.0)
    }
}

impl fmt::Display for OptimisticGreedy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "OptimisticGreedy(Q₀={})", self.initial_value)
    }
}

impl Policy for OptimisticGreedy {
    fn validate(&self) -> Result<(), BuildAgentError> {
        if self.initial_value.is_finite() {
            Ok(())
        } else {
            Err(BuildAgentError::NonFiniteInitialValue(self.initial_value))
        }
    }

    fn initial_value(&self) -> f64 {
        self.initial_value
    }

    fn select_action(&self, values: &ActionValues, _rng: &mut Prng) -> usize {
        values.greedy_action()
    }
}
