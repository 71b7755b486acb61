//! Upper confidence bound action selection.
use super::super::{ActionValues, BuildAgentError, Policy};
use crate::utils::iter::ArgMaxBy;
use crate::Prng;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper confidence bound (UCB) action selection.
///
/// Any action that has never been selected is taken first, lowest index first.
/// After that, selects the action maximizing
/// `estimate[a] + exploration_rate * sqrt(ln(total_count) / count[a])`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ucb {
    /// Scale factor on the confidence interval; controls the exploration rate.
    pub exploration_rate: f64,
}

impl Ucb {
    pub const fn new(exploration_rate: f64) -> Self {
        Self { exploration_rate }
    }

    /// Upper confidence bound of each action. Requires every count to be nonzero.
    #[allow(clippy::cast_precision_loss)]
    fn upper_bounds(&self, values: &ActionValues) -> Array1<f64> {
        let log_total_count = (values.total_count() as f64).ln();
        let exploration_rate = self.exploration_rate;
        values.estimates()
            + &values
                .counts()
                .mapv(|count| exploration_rate * (log_total_count / count as f64).sqrt())
    }
}

impl Default for Ucb {
    fn default() -> Self {
        Self::new(0.1)
    }
}

impl fmt::Display for Ucb {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Ucb(c={})", self.exploration_rate)
    }
}

impl Policy for Ucb {
    fn validate(&self) -> Result<(), BuildAgentError> {
        if self.exploration_rate.is_finite() && self.exploration_rate >= 0.0 {
            Ok(())
        } else {
            Err(BuildAgentError::InvalidUcbExplorationRate(
                self.exploration_rate,
            ))
        }
    }

    fn select_action(&self, values: &ActionValues, _rng: &mut Prng) -> usize {
        if let Some(untried) = values.counts().iter().position(|&count| count == 0) {
            return untried;
        }
        self.upper_bounds(values)
            .iter()
            .argmax_by(|a, b| a.total_cmp(b))
            .unwrap_or_default()
    }
}
