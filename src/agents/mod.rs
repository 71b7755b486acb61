//! Bandit agents
mod bandits;
mod error;
mod random;
#[cfg(test)]
pub mod testing;
mod value_agent;
mod values;

pub use bandits::{EpsilonGreedy, Greedy, OptimisticGreedy, Ucb};
pub use error::BuildAgentError;
pub use random::RandomAgent;
pub use value_agent::{
    EpsilonGreedyAgent, GreedyAgent, OptimisticGreedyAgent, Policy, UcbAgent, ValueAgent,
};
pub use values::ActionValues;

use crate::envs::{Bandit, InvalidActionError};
use crate::logging::{Event, Loggable, Logger};
use crate::simulation::{SimulationError, StepsSummary};
use ndarray::Array1;
use std::num::NonZeroU64;

/// Description of an agent step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// The action selected by the agent.
    pub action: usize,
    /// The reward sampled from the bandit for that action.
    pub reward: f64,
}

/// A learning agent bound to a bandit.
///
/// The agent does not own the bandit; any number of agents may share one.
pub trait Agent<'a, B: Bandit + ?Sized + 'a> {
    /// The bandit this agent currently acts on.
    fn bandit(&self) -> &'a B;

    /// Choose an action, sample its reward from the bandit, and learn from the result.
    ///
    /// # Errors
    /// Returns [`InvalidActionError`] if the bandit rejects the chosen action.
    fn step(&mut self) -> Result<Step, InvalidActionError>;

    /// Sum of all rewards received since construction or the last reset.
    fn cumulative_reward(&self) -> f64;

    /// The estimated mean reward of each action, if the agent keeps estimates.
    fn value_estimates(&self) -> Option<&Array1<f64>> {
        None
    }

    /// The number of times each action has been selected, if the agent keeps counts.
    fn selection_counts(&self) -> Option<&Array1<u64>> {
        None
    }

    /// Forget everything learned, returning to the freshly constructed state.
    fn reset(&mut self);

    /// Bind to a different bandit and reset.
    ///
    /// The new bandit may have a different number of actions.
    fn change_bandit(&mut self, bandit: &'a B);

    /// Log a snapshot of the agent state as an [`Event::Report`].
    ///
    /// # Errors
    /// Returns an error if the logger rejects a value.
    fn report(&self, logger: &mut dyn Logger) -> Result<(), SimulationError> {
        if let Some(estimates) = self.value_estimates() {
            logger.log(Event::Report, "value_estimates", estimates.to_vec().into())?;
        }
        if let Some(counts) = self.selection_counts() {
            #[allow(clippy::cast_precision_loss)]
            let counts = counts.iter().map(|&c| c as f64).collect();
            logger.log(Event::Report, "selection_counts", Loggable::Vector(counts))?;
        }
        logger.log(
            Event::Report,
            "cumulative_reward",
            self.cumulative_reward().into(),
        )?;
        logger.done(Event::Report);
        Ok(())
    }

    /// Take `num_steps` sequential steps.
    ///
    /// Every step logs its action and reward as an [`Event::Step`].
    /// If `report_interval` is `m` then a [report](Agent::report) is logged
    /// after steps `m`, `2m`, `3m`, ... (counting steps from 1).
    /// There is no report before the first step, and no final report unless
    /// `num_steps` is a multiple of `m`.
    ///
    /// # Errors
    /// Stops at the first step that fails.
    fn run_sequence(
        &mut self,
        num_steps: u64,
        report_interval: Option<NonZeroU64>,
        logger: &mut dyn Logger,
    ) -> Result<StepsSummary, SimulationError> {
        let num_actions = self.bandit().num_actions();
        let mut summary = StepsSummary::default();
        for i in 1..=num_steps {
            let step = self.step()?;
            summary.push(&step);

            logger.log(
                Event::Step,
                "action",
                Loggable::IndexSample {
                    value: step.action,
                    size: num_actions,
                },
            )?;
            logger.log(Event::Step, "reward", step.reward.into())?;
            logger.done(Event::Step);

            if report_interval.map_or(false, |interval| i % interval.get() == 0) {
                self.report(logger)?;
            }
        }
        Ok(summary)
    }
}

impl<'a, B, T> Agent<'a, B> for Box<T>
where
    B: Bandit + ?Sized + 'a,
    T: Agent<'a, B> + ?Sized,
{
    fn bandit(&self) -> &'a B {
        T::bandit(self)
    }
    fn step(&mut self) -> Result<Step, InvalidActionError> {
        T::step(self)
    }
    fn cumulative_reward(&self) -> f64 {
        T::cumulative_reward(self)
    }
    fn value_estimates(&self) -> Option<&Array1<f64>> {
        T::value_estimates(self)
    }
    fn selection_counts(&self) -> Option<&Array1<u64>> {
        T::selection_counts(self)
    }
    fn reset(&mut self) {
        T::reset(self)
    }
    fn change_bandit(&mut self, bandit: &'a B) {
        T::change_bandit(self, bandit)
    }
}
