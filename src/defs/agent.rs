use crate::agents::{
    Agent, BuildAgentError, EpsilonGreedy, Greedy, OptimisticGreedy, RandomAgent, Ucb, ValueAgent,
};
use crate::envs::Bandit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Agent definition
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum AgentDef {
    /// Always take the action with the highest estimate.
    Greedy,
    /// Greedy from optimistic initial estimates.
    OptimisticGreedy(OptimisticGreedy),
    /// Greedy with random exploration.
    EpsilonGreedy(EpsilonGreedy),
    /// Upper confidence bound.
    Ucb(Ucb),
    /// An agent that selects actions randomly.
    Random,
}

impl AgentDef {
    /// Every kind of agent with default parameters.
    pub fn all() -> [Self; 5] {
        [
            Self::Greedy,
            Self::OptimisticGreedy(OptimisticGreedy::default()),
            Self::EpsilonGreedy(EpsilonGreedy::default()),
            Self::Ucb(Ucb::default()),
            Self::Random,
        ]
    }

    /// Short name of the agent kind, without parameters.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Greedy => "Greedy",
            Self::OptimisticGreedy(_) => "OptimisticGreedy",
            Self::EpsilonGreedy(_) => "EpsilonGreedy",
            Self::Ucb(_) => "Ucb",
            Self::Random => "Random",
        }
    }

    /// Construct an agent bound to the given bandit.
    ///
    /// # Errors
    /// Returns an error if the agent parameters are invalid for this bandit.
    pub fn build_agent<'a, B>(
        &self,
        bandit: &'a B,
        seed: u64,
    ) -> Result<Box<dyn Agent<'a, B> + 'a>, BuildAgentError>
    where
        B: Bandit + ?Sized + 'a,
    {
        let agent: Box<dyn Agent<'a, B> + 'a> = match *self {
            Self::Greedy => Box::new(ValueAgent::new(bandit, Greedy, seed)?),
            Self::OptimisticGreedy(policy) => Box::new(ValueAgent::new(bandit, policy, seed)?),
            Self::EpsilonGreedy(policy) => Box::new(ValueAgent::new(bandit, policy, seed)?),
            Self::Ucb(policy) => Box::new(ValueAgent::new(bandit, policy, seed)?),
            Self::Random => Box::new(RandomAgent::new(bandit, seed)),
        };
        Ok(agent)
    }
}

impl fmt::Display for AgentDef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Greedy => fmt::Display::fmt(&Greedy, f),
            Self::OptimisticGreedy(policy) => fmt::Display::fmt(policy, f),
            Self::EpsilonGreedy(policy) => fmt::Display::fmt(policy, f),
            Self::Ucb(policy) => fmt::Display::fmt(policy, f),
            Self::Random => write!(f, "Random"),
        }
    }
}
