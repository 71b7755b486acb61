use super::{Bandit, BuildEnvError, InvalidActionError};
use crate::utils::iter::ArgMaxBy;
use crate::Prng;
use rand_distr::{Distribution, Normal};
use std::fmt;

/// A multi-armed bandit with normally distributed arm rewards.
///
/// The arm means are fixed at construction.
/// Every arm shares the same standard deviation (the reward spread).
#[derive(Debug, Clone)]
pub struct StationaryBandit {
    means: Vec<f64>,
    spread: f64,
    distributions: Vec<Normal<f64>>,
}

impl StationaryBandit {
    /// Create a bandit with the given arm means and reward standard deviation.
    ///
    /// A spread of zero makes every reward equal to the arm mean.
    pub fn new(means: Vec<f64>, spread: f64) -> Result<Self, BuildEnvError> {
        if means.is_empty() {
            return Err(BuildEnvError::NoActions);
        }
        if !(spread.is_finite() && spread >= 0.0) {
            return Err(BuildEnvError::InvalidSpread(spread));
        }
        let distributions = means
            .iter()
            .map(|&mean| {
                if mean.is_finite() {
                    Normal::new(mean, spread).map_err(|_| BuildEnvError::InvalidSpread(spread))
                } else {
                    Err(BuildEnvError::NonFiniteMean(mean))
                }
            })
            .collect::<Result<_, _>>()?;
        Ok(Self {
            means,
            spread,
            distributions,
        })
    }

    /// The mean reward of each arm.
    pub fn means(&self) -> &[f64] {
        &self.means
    }

    /// Standard deviation of the sampled rewards.
    pub const fn spread(&self) -> f64 {
        self.spread
    }

    /// The arm with the largest mean. Ties resolve to the lowest index.
    pub fn optimal_action(&self) -> usize {
        self.means
            .iter()
            .argmax_by(|a, b| a.total_cmp(b))
            .unwrap_or_default()
    }

    /// The largest arm mean; the expected reward of an optimal policy.
    pub fn optimal_mean(&self) -> f64 {
        self.means[self.optimal_action()]
    }
}

impl fmt::Display for StationaryBandit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "StationaryBandit({:?}, σ={})", self.means, self.spread)
    }
}

impl Bandit for StationaryBandit {
    fn num_actions(&self) -> usize {
        self.means.len()
    }

    fn sample(&self, action: usize, rng: &mut Prng) -> Result<f64, InvalidActionError> {
        let distribution = self.distributions.get(action).ok_or(InvalidActionError {
            action,
            num_actions: self.num_actions(),
        })?;
        Ok(distribution.sample(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::stats::OnlineMeanVariance;
    use rand::SeedableRng;
    use rstest::{fixture, rstest};

    #[fixture]
    fn bandit() -> StationaryBandit {
        StationaryBandit::new(vec![2.0, 8.0, -1.0], 1.0).unwrap()
    }

    #[rstest]
    fn num_actions(bandit: StationaryBandit) {
        assert_eq!(bandit.num_actions(), 3);
    }

    #[rstest]
    fn sample_out_of_range(bandit: StationaryBandit) {
        let mut rng = Prng::seed_from_u64(0);
        assert_eq!(
            bandit.sample(3, &mut rng),
            Err(InvalidActionError {
                action: 3,
                num_actions: 3
            })
        );
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    fn sample_statistics(bandit: StationaryBandit, #[case] action: usize) {
        let mut rng = Prng::seed_from_u64(action as u64);
        let stats: OnlineMeanVariance<f64> = (0..5000)
            .map(|_| bandit.sample(action, &mut rng).unwrap())
            .collect();
        assert!((stats.mean() - bandit.means()[action]).abs() < 0.1);
        assert!((stats.variance().unwrap() - 1.0).abs() < 0.1);
    }

    #[test]
    fn zero_spread_is_deterministic() {
        let bandit = StationaryBandit::new(vec![0.5, 3.0], 0.0).unwrap();
        let mut rng = Prng::seed_from_u64(0);
        for _ in 0..10 {
            assert_eq!(bandit.sample(0, &mut rng).unwrap(), 0.5);
            assert_eq!(bandit.sample(1, &mut rng).unwrap(), 3.0);
        }
    }

    #[rstest]
    fn optimal(bandit: StationaryBandit) {
        assert_eq!(bandit.optimal_action(), 1);
        assert_eq!(bandit.optimal_mean(), 8.0);
    }

    #[test]
    fn optimal_tie_is_first() {
        let bandit = StationaryBandit::new(vec![1.0, 4.0, 4.0], 1.0).unwrap();
        assert_eq!(bandit.optimal_action(), 1);
    }

    #[test]
    fn shared_by_reference() {
        let bandit = StationaryBandit::new(vec![1.0], 0.0).unwrap();
        let by_ref: &dyn Bandit = &bandit;
        assert_eq!(by_ref.num_actions(), 1);
        assert_eq!(
            (&bandit).sample(0, &mut Prng::seed_from_u64(0)).unwrap(),
            1.0
        );
    }

    #[rstest]
    #[case::empty(vec![], 1.0, BuildEnvError::NoActions)]
    #[case::negative_spread(vec![1.0], -0.5, BuildEnvError::InvalidSpread(-0.5))]
    #[case::infinite_spread(vec![1.0], f64::INFINITY, BuildEnvError::InvalidSpread(f64::INFINITY))]
    #[case::infinite_mean(vec![1.0, f64::INFINITY], 1.0, BuildEnvError::NonFiniteMean(f64::INFINITY))]
    fn invalid(#[case] means: Vec<f64>, #[case] spread: f64, #[case] expected: BuildEnvError) {
        assert_eq!(StationaryBandit::new(means, spread).unwrap_err(), expected);
    }

    #[rstest]
    fn display(bandit: StationaryBandit) {
        assert_eq!(bandit.to_string(), "StationaryBandit([2.0, 8.0, -1.0], σ=1)");
    }
}
