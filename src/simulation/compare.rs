use super::{SimulationError, StepsSummary};
use crate::defs::AgentDef;
use crate::envs::Bandit;
use crate::logging::{Logger, ScopedLogger};
use serde::Serialize;
use std::num::NonZeroU64;

/// The outcome of running one agent on a bandit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentReport {
    /// Display name of the agent, including its parameters.
    pub name: String,
    pub summary: StepsSummary,
    /// Final value estimates; `None` for agents that keep none.
    pub value_estimates: Option<Vec<f64>>,
    /// Final selection counts; `None` for agents that keep none.
    pub selection_counts: Option<Vec<u64>>,
}

impl AgentReport {
    /// Total regret relative to always taking an action with mean reward `optimal_mean`.
    pub fn regret(&self, optimal_mean: f64) -> f64 {
        self.summary.regret(optimal_mean)
    }
}

/// Run each defined agent for `num_steps` steps on the same bandit.
///
/// Agent `i` is seeded with `seed + i`, wrapping on overflow.
/// Each agent logs under a scope named after its kind.
///
/// # Errors
/// Fails on the first agent that cannot be built or whose run fails.
pub fn compare_agents<B>(
    bandit: &B,
    defs: &[AgentDef],
    num_steps: u64,
    seed: u64,
    report_interval: Option<NonZeroU64>,
    logger: &mut dyn Logger,
) -> Result<Vec<AgentReport>, SimulationError>
where
    B: Bandit + ?Sized,
{
    defs.iter()
        .enumerate()
        .map(|(i, def)| -> Result<_, SimulationError> {
            let mut agent = def.build_agent(bandit, seed.wrapping_add(i as u64))?;
            let mut scoped = ScopedLogger::new(&mut *logger, def.name());
            let summary = agent.run_sequence(num_steps, report_interval, &mut scoped)?;
            Ok(AgentReport {
                name: def.to_string(),
                summary,
                value_estimates: agent.value_estimates().map(|v| v.to_vec()),
                selection_counts: agent.selection_counts().map(|c| c.to_vec()),
            })
        })
        .collect()
}
