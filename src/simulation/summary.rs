use crate::agents::Step;
use crate::utils::stats::OnlineMeanVariance;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FromIterator;

/// Basic summary statistics of agent steps.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepsSummary {
    pub num_steps: u64,
    pub total_reward: f64,
    rewards: OnlineMeanVariance<f64>,
}

impl StepsSummary {
    pub fn push(&mut self, step: &Step) {
        self.num_steps += 1;
        self.total_reward += step.reward;
        self.rewards.push(step.reward);
    }

    /// Mean reward per step. `None` if there are no steps.
    pub fn mean_reward(&self) -> Option<f64> {
        if self.num_steps == 0 {
            None
        } else {
            Some(self.rewards.mean())
        }
    }

    /// Population variance of the per-step rewards. `None` if there are no steps.
    pub fn reward_variance(&self) -> Option<f64> {
        self.rewards.variance()
    }

    /// Total regret relative to always taking an action with mean reward `optimal_mean`.
    ///
    /// This is the empirical regret: it uses the sampled rewards, so it can be negative.
    #[allow(clippy::cast_precision_loss)]
    pub fn regret(&self, optimal_mean: f64) -> f64 {
        optimal_mean * self.num_steps as f64 - self.total_reward
    }
}

impl fmt::Display for StepsSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "num_steps:        {}", self.num_steps)?;
        writeln!(f, "total_reward:     {}", self.total_reward)?;
        if let (Some(mean), Some(variance)) = (self.mean_reward(), self.reward_variance()) {
            writeln!(f, "step_reward_mean: {}", mean)?;
            writeln!(f, "step_reward_std:  {}", variance.sqrt())?;
        }
        Ok(())
    }
}

impl<'a> Extend<&'a Step> for StepsSummary {
    fn extend<I>(&mut self, steps: I)
    where
        I: IntoIterator<Item = &'a Step>,
    {
        for step in steps {
            self.push(step)
        }
    }
}

impl FromIterator<Step> for StepsSummary {
    fn from_iter<I>(steps: I) -> Self
    where
        I: IntoIterator<Item = Step>,
    {
        steps.into_iter().fold(Self::default(), |mut s, step| {
            s.push(&step);
            s
        })
    }
}
