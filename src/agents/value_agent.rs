//! Agents that act from sample-average action value estimates
use super::bandits::{EpsilonGreedy, Greedy, OptimisticGreedy, Ucb};
use super::{ActionValues, Agent, BuildAgentError, Step};
use crate::envs::{Bandit, InvalidActionError};
use crate::Prng;
use ndarray::Array1;
use rand::SeedableRng;
use std::fmt;

/// An action selection rule over action value estimates.
pub trait Policy {
    /// Check that the policy parameters are valid.
    ///
    /// # Errors
    /// Returns a [`BuildAgentError`] describing the first invalid parameter.
    fn validate(&self) -> Result<(), BuildAgentError> {
        Ok(())
    }

    /// Estimate assigned to every action before it is first selected.
    fn initial_value(&self) -> f64 {
        0.0
    }

    /// Select an action given the current estimates.
    ///
    /// Must return an index in `0 .. values.num_actions()` whenever there is at least one action.
    fn select_action(&self, values: &ActionValues, rng: &mut Prng) -> usize;
}

impl<P: Policy + ?Sized> Policy for &P {
    fn validate(&self) -> Result<(), BuildAgentError> {
        P::validate(self)
    }
    fn initial_value(&self) -> f64 {
        P::initial_value(self)
    }
    fn select_action(&self, values: &ActionValues, rng: &mut Prng) -> usize {
        P::select_action(self, values, rng)
    }
}

/// Always selects the action with the highest estimate.
pub type GreedyAgent<'a, B> = ValueAgent<'a, B, Greedy>;
/// Greedy selection from optimistic initial estimates.
pub type OptimisticGreedyAgent<'a, B> = ValueAgent<'a, B, OptimisticGreedy>;
/// Greedy selection with random exploration.
pub type EpsilonGreedyAgent<'a, B> = ValueAgent<'a, B, EpsilonGreedy>;
/// Upper confidence bound selection.
pub type UcbAgent<'a, B> = ValueAgent<'a, B, Ucb>;

/// An agent that selects actions with a [`Policy`] and learns sample-average value estimates.
#[derive(Debug, Clone)]
pub struct ValueAgent<'a, B: ?Sized, P> {
    bandit: &'a B,
    policy: P,
    values: ActionValues,
    cumulative_reward: f64,
    rng: Prng,
}

impl<'a, B, P> ValueAgent<'a, B, P>
where
    B: Bandit + ?Sized,
    P: Policy,
{
    /// Create a new agent bound to `bandit`.
    ///
    /// # Args
    /// * `bandit` - The bandit on which the agent acts.
    /// * `policy` - Action selection rule.
    /// * `seed` - Seed for the agent's pseudo-random number generator.
    ///
    /// # Errors
    /// Returns an error if the policy parameters are invalid or the bandit has no actions.
    pub fn new(bandit: &'a B, policy: P, seed: u64) -> Result<Self, BuildAgentError> {
        policy.validate()?;
        let num_actions = bandit.num_actions();
        if num_actions == 0 {
            return Err(BuildAgentError::NoActions);
        }
        let values = ActionValues::new(num_actions, policy.initial_value());
        Ok(Self {
            bandit,
            policy,
            values,
            cumulative_reward: 0.0,
            rng: Prng::seed_from_u64(seed),
        })
    }
}

impl<'a, B: ?Sized, P> ValueAgent<'a, B, P> {
    pub const fn policy(&self) -> &P {
        &self.policy
    }

    /// Action value estimates and selection counts.
    pub const fn values(&self) -> &ActionValues {
        &self.values
    }
}

impl<'a, B: ?Sized, P: fmt::Display> fmt::Display for ValueAgent<'a, B, P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.policy, f)
    }
}

impl<'a, B, P> Agent<'a, B> for ValueAgent<'a, B, P>
where
    B: Bandit + ?Sized + 'a,
    P: Policy,
{
    fn bandit(&self) -> &'a B {
        self.bandit
    }

    fn step(&mut self) -> Result<Step, InvalidActionError> {
        let action = self.policy.select_action(&self.values, &mut self.rng);
        let reward = self.bandit.sample(action, &mut self.rng)?;
        self.values.update(action, reward)?;
        self.cumulative_reward += reward;
        Ok(Step { action, reward })
    }

    fn cumulative_reward(&self) -> f64 {
        self.cumulative_reward
    }

    fn value_estimates(&self) -> Option<&Array1<f64>> {
        Some(self.values.estimates())
    }

    fn selection_counts(&self) -> Option<&Array1<u64>> {
        Some(self.values.counts())
    }

    fn reset(&mut self) {
        self.values.reset();
        self.cumulative_reward = 0.0;
    }

    fn change_bandit(&mut self, bandit: &'a B) {
        self.bandit = bandit;
        self.values.resize(bandit.num_actions());
        self.cumulative_reward = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envs::StationaryBandit;
    use ndarray::arr1;
    use rstest::rstest;

    #[rstest]
    #[case::greedy(Box::new(Greedy) as Box<dyn Policy>)]
    #[case::optimistic(Box::new(OptimisticGreedy::new(20.0)))]
    #[case::epsilon_greedy(Box::new(EpsilonGreedy::new(0.3)))]
    #[case::ucb(Box::new(Ucb::new(1.0)))]
    fn counts_sum_to_steps(#[case] policy: Box<dyn Policy>) {
        let bandit = StationaryBandit::new(vec![0.0, 1.0, 2.0, 3.0], 1.0).unwrap();
        let mut agent = ValueAgent::new(&bandit, &*policy, 0).unwrap();
        for n in 1..=200 {
            agent.step().unwrap();
            assert_eq!(agent.values().total_count(), n);
        }
    }

    #[rstest]
    #[case::greedy(Box::new(Greedy) as Box<dyn Policy>)]
    #[case::optimistic(Box::new(OptimisticGreedy::new(20.0)))]
    #[case::epsilon_greedy(Box::new(EpsilonGreedy::new(0.3)))]
    #[case::ucb(Box::new(Ucb::new(1.0)))]
    fn first_selection_estimate_is_reward(#[case] policy: Box<dyn Policy>) {
        let bandit = StationaryBandit::new(vec![4.0, -2.0, 7.0], 3.0).unwrap();
        let mut agent = ValueAgent::new(&bandit, &*policy, 1).unwrap();
        let step = agent.step().unwrap();
        assert_eq!(agent.values().estimates()[step.action], step.reward);
        assert_eq!(agent.cumulative_reward(), step.reward);
    }

    #[test]
    fn reset_restores_initial_state() {
        let bandit = StationaryBandit::new(vec![1.0, 2.0], 1.0).unwrap();
        let mut agent = OptimisticGreedyAgent::new(&bandit, OptimisticGreedy::new(9.0), 0).unwrap();
        let initial = agent.values().clone();
        for _ in 0..30 {
            agent.step().unwrap();
        }
        assert_ne!(agent.values(), &initial);
        agent.reset();
        assert_eq!(agent.values(), &initial);
        assert_eq!(agent.cumulative_reward(), 0.0);
        assert_eq!(agent.value_estimates().unwrap(), &arr1(&[9.0, 9.0]));
    }

    #[test]
    fn change_bandit_resizes() {
        let small = StationaryBandit::new(vec![1.0, 2.0], 1.0).unwrap();
        let large = StationaryBandit::new(vec![1.0, 2.0, 3.0, 4.0, 5.0], 1.0).unwrap();
        let mut agent = UcbAgent::new(&small, Ucb::new(0.5), 0).unwrap();
        for _ in 0..10 {
            agent.step().unwrap();
        }
        agent.change_bandit(&large);
        let fresh = UcbAgent::new(&large, Ucb::new(0.5), 0).unwrap();
        assert_eq!(agent.values(), fresh.values());
        assert_eq!(agent.cumulative_reward(), 0.0);
        assert_eq!(agent.bandit().num_actions(), 5);

        agent.step().unwrap();
        assert_eq!(agent.values().total_count(), 1);
    }

    #[test]
    fn change_bandit_to_smaller() {
        let large = StationaryBandit::new(vec![1.0, 2.0, 3.0, 4.0], 0.0).unwrap();
        let small = StationaryBandit::new(vec![5.0], 0.0).unwrap();
        let mut agent = GreedyAgent::new(&large, Greedy, 0).unwrap();
        agent.step().unwrap();
        agent.change_bandit(&small);
        assert_eq!(agent.step().unwrap(), Step { action: 0, reward: 5.0 });
        assert_eq!(agent.selection_counts().unwrap(), &arr1(&[1u64]));
    }

    #[test]
    fn agents_share_bandit() {
        let bandit = StationaryBandit::new(vec![1.0, 2.0], 0.0).unwrap();
        let mut a = GreedyAgent::new(&bandit, Greedy, 0).unwrap();
        let mut b = OptimisticGreedyAgent::new(&bandit, OptimisticGreedy::default(), 0).unwrap();
        a.step().unwrap();
        b.step().unwrap();
        b.step().unwrap();
        assert_eq!(a.values().total_count(), 1);
        assert_eq!(b.values().total_count(), 2);
        assert_eq!(bandit.means(), &[1.0, 2.0]);
    }

    #[test]
    fn same_seed_same_run() {
        let bandit = StationaryBandit::new(vec![1.0, 2.0, 3.0], 2.0).unwrap();
        let mut a = EpsilonGreedyAgent::new(&bandit, EpsilonGreedy::new(0.5), 7).unwrap();
        let mut b = EpsilonGreedyAgent::new(&bandit, EpsilonGreedy::new(0.5), 7).unwrap();
        for _ in 0..50 {
            assert_eq!(a.step().unwrap(), b.step().unwrap());
        }
    }

    /// A bandit that reports more actions than it accepts.
    #[derive(Debug)]
    struct LyingBandit;

    impl Bandit for LyingBandit {
        fn num_actions(&self) -> usize {
            3
        }
        fn sample(&self, action: usize, _: &mut Prng) -> Result<f64, InvalidActionError> {
            if action == 0 {
                Err(InvalidActionError {
                    action,
                    num_actions: 0,
                })
            } else {
                Ok(1.0)
            }
        }
    }

    #[test]
    fn step_propagates_invalid_action() {
        let mut agent = GreedyAgent::new(&LyingBandit, Greedy, 0).unwrap();
        assert!(agent.step().is_err());
        assert_eq!(agent.values().total_count(), 0);
        assert_eq!(agent.cumulative_reward(), 0.0);
    }

    /// A bandit with no actions.
    #[derive(Debug)]
    struct EmptyBandit;

    impl Bandit for EmptyBandit {
        fn num_actions(&self) -> usize {
            0
        }
        fn sample(&self, action: usize, _: &mut Prng) -> Result<f64, InvalidActionError> {
            Err(InvalidActionError {
                action,
                num_actions: 0,
            })
        }
    }

    #[test]
    fn no_actions() {
        assert_eq!(
            GreedyAgent::new(&EmptyBandit, Greedy, 0).unwrap_err(),
            BuildAgentError::NoActions
        );
    }

    #[test]
    fn display_is_policy() {
        let bandit = StationaryBandit::new(vec![1.0], 1.0).unwrap();
        let agent = EpsilonGreedyAgent::new(&bandit, EpsilonGreedy::new(0.25), 0).unwrap();
        assert_eq!(agent.to_string(), "EpsilonGreedy(ε=0.25)");
        assert_eq!(agent.policy(), &EpsilonGreedy::new(0.25));
    }
}
