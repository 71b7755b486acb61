//! Per-action value estimates
use crate::envs::InvalidActionError;
use crate::utils::iter::ArgMaxBy;
use ndarray::{Array, Array1};

/// Sample-average value estimates and selection counts for each action.
///
/// This is the only place where an agent's estimates are modified.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionValues {
    /// The estimated mean reward of each action
    estimates: Array1<f64>,
    /// The number of times each action has been selected
    counts: Array1<u64>,
    /// Fill value of `estimates` on creation and reset
    initial_value: f64,
}

impl ActionValues {
    pub fn new(num_actions: usize, initial_value: f64) -> Self {
        Self {
            estimates: Array::from_elem(num_actions, initial_value),
            counts: Array::zeros(num_actions),
            initial_value,
        }
    }

    pub fn num_actions(&self) -> usize {
        self.estimates.len()
    }

    pub const fn estimates(&self) -> &Array1<f64> {
        &self.estimates
    }

    pub const fn counts(&self) -> &Array1<u64> {
        &self.counts
    }

    pub const fn initial_value(&self) -> f64 {
        self.initial_value
    }

    /// Total number of selections over all actions.
    pub fn total_count(&self) -> u64 {
        self.counts.sum()
    }

    /// The action with the largest estimate. Ties resolve to the lowest index.
    ///
    /// Returns 0 if there are no actions.
    pub fn greedy_action(&self) -> usize {
        self.estimates
            .iter()
            .argmax_by(|a, b| a.total_cmp(b))
            .unwrap_or_default()
    }

    /// Record a reward observed for the given action.
    ///
    /// With `n` the selection count before this reward,
    /// the first reward (`n == 0`) replaces the initial value outright
    /// and later rewards apply `q += (reward - q) / n`.
    ///
    /// # Errors
    /// Returns [`InvalidActionError`] if `action` is out of range; nothing is modified.
    pub fn update(&mut self, action: usize, reward: f64) -> Result<(), InvalidActionError> {
        let num_actions = self.num_actions();
        let (estimate, count) = match (self.estimates.get_mut(action), self.counts.get_mut(action))
        {
            (Some(estimate), Some(count)) => (estimate, count),
            _ => {
                return Err(InvalidActionError {
                    action,
                    num_actions,
                })
            }
        };
        if *count == 0 {
            *estimate = reward;
        } else {
            #[allow(clippy::cast_precision_loss)]
            let weight = (*count as f64).recip();
            *estimate += weight * (reward - *estimate);
        }
        *count += 1;
        Ok(())
    }

    /// Restore the initial estimates and zero the counts.
    pub fn reset(&mut self) {
        self.estimates.fill(self.initial_value);
        self.counts.fill(0);
    }

    /// Reinitialize for a different number of actions, discarding all history.
    pub fn resize(&mut self, num_actions: usize) {
        *self = Self::new(num_actions, self.initial_value);
    }
}
