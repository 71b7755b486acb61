//! Agents for the stationary k-armed bandit problem.
//!
//! A [`Bandit`] is a reward source with a fixed number of actions.
//! An [`Agent`] is bound to a bandit, repeatedly chooses an action, observes the sampled reward
//! and updates its per-action value estimates.
//!
//! ```
//! use kbandit::agents::{Agent, EpsilonGreedy, EpsilonGreedyAgent};
//! use kbandit::envs::StationaryBandit;
//!
//! let bandit = StationaryBandit::new(vec![1.0, 5.0, 3.0], 1.0).unwrap();
//! let mut agent = EpsilonGreedyAgent::new(&bandit, EpsilonGreedy::new(0.1), 0).unwrap();
//! let summary = agent.run_sequence(1000, None, &mut ()).unwrap();
//! assert_eq!(summary.num_steps, 1000);
//! ```
#![warn(clippy::cast_lossless)]
#![warn(clippy::cast_possible_truncation)]
#![warn(clippy::doc_markdown)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::missing_const_for_fn)] // has some false positives
#![warn(clippy::needless_borrow)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::use_self)]
pub mod agents;
pub mod cli;
pub mod defs;
pub mod envs;
mod error;
pub mod logging;
pub mod simulation;
pub mod utils;

pub use agents::{Agent, Step};
pub use defs::AgentDef;
pub use envs::{Bandit, StationaryBandit};
pub use error::BanditError;
pub use simulation::{compare_agents, StepsSummary};

/// Pseudo-random number generator used by bandits and agents.
pub type Prng = rand_chacha::ChaCha8Rng;
