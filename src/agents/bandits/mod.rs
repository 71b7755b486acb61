//! Multi-armed bandit action selection policies.
mod epsilon_greedy;
mod greedy;
mod ucb;

pub use epsilon_greedy::EpsilonGreedy;
pub use greedy::{Greedy, OptimisticGreedy};
pub use ucb::Ucb;
