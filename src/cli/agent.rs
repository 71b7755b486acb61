use super::Options;
use crate::agents::{EpsilonGreedy, OptimisticGreedy, Ucb};
use crate::defs::AgentDef;
use clap::ArgEnum;

/// Agent type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ArgEnum)]
pub enum AgentType {
    /// Greedy
    Greedy,
    /// Greedy from optimistic initial estimates
    OptimisticGreedy,
    /// Epsilon-greedy
    EpsilonGreedy,
    /// Upper Confidence Bound
    Ucb,
    /// Uniform random
    Random,
}

impl AgentType {
    pub const ALL: [Self; 5] = [
        Self::Greedy,
        Self::OptimisticGreedy,
        Self::EpsilonGreedy,
        Self::Ucb,
        Self::Random,
    ];

    /// Agent definition with parameters taken from the command-line options.
    pub fn agent_def(self, opts: &Options) -> AgentDef {
        match self {
            Self::Greedy => AgentDef::Greedy,
            Self::OptimisticGreedy => AgentDef::OptimisticGreedy(opts.into()),
            Self::EpsilonGreedy => AgentDef::EpsilonGreedy(opts.into()),
            Self::Ucb => AgentDef::Ucb(opts.into()),
            Self::Random => AgentDef::Random,
        }
    }
}

impl Options {
    /// Definitions of the selected agents, in order. All agent types if none were selected.
    pub fn agent_defs(&self) -> Vec<AgentDef> {
        let types: &[AgentType] = if self.agent.is_empty() {
            &AgentType::ALL
        } else {
            &self.agent
        };
        types.iter().map(|t| t.agent_def(self)).collect()
    }
}

impl From<&Options> for OptimisticGreedy {
    #[allow(clippy::cast_precision_loss)]
    fn from(opts: &Options) -> Self {
        Self::new(
            opts.optimistic_value
                .unwrap_or_else(|| 2.0 * opts.max as f64),
        )
    }
}

impl From<&Options> for EpsilonGreedy {
    fn from(opts: &Options) -> Self {
        Self::new(opts.epsilon)
    }
}

impl From<&Options> for Ucb {
    fn from(opts: &Options) -> Self {
        Self::new(opts.confidence)
    }
}
