use super::StationaryBandit;
use crate::Prng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub trait EnvBuilder<E> {
    /// Build an environment instance.
    ///
    /// # Args
    /// * `rng` - Random state used to randomize the environment structure.
    fn build_env(&self, rng: &mut Prng) -> Result<E, BuildEnvError>;
}

/// Error building an environment
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildEnvError {
    #[error("a bandit must have at least one action")]
    NoActions,
    #[error("empty mean range [{min}, {max})")]
    EmptyMeanRange { min: i64, max: i64 },
    #[error("reward spread {0} must be finite and non-negative")]
    InvalidSpread(f64),
    #[error("arm mean {0} is not finite")]
    NonFiniteMean(f64),
}

/// Configuration of a [`StationaryBandit`] with randomly drawn arm means.
///
/// Each arm mean is drawn independently as an integer, uniformly from `[min_mean, max_mean)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StationaryBanditConfig {
    /// Number of arms.
    pub num_actions: usize,
    /// Inclusive lower bound on the arm means.
    pub min_mean: i64,
    /// Exclusive upper bound on the arm means.
    pub max_mean: i64,
    /// Standard deviation of the sampled rewards around the arm mean.
    pub spread: f64,
}

impl StationaryBanditConfig {
    pub const fn new(num_actions: usize, min_mean: i64, max_mean: i64, spread: f64) -> Self {
        Self {
            num_actions,
            min_mean,
            max_mean,
            spread,
        }
    }
}

impl Default for StationaryBanditConfig {
    fn default() -> Self {
        Self::new(3, 0, 10, 1.0)
    }
}

impl EnvBuilder<StationaryBandit> for StationaryBanditConfig {
    fn build_env(&self, rng: &mut Prng) -> Result<StationaryBandit, BuildEnvError> {
        if self.num_actions == 0 {
            return Err(BuildEnvError::NoActions);
        }
        if self.min_mean >= self.max_mean {
            return Err(BuildEnvError::EmptyMeanRange {
                min: self.min_mean,
                max: self.max_mean,
            });
        }
        // Validate before consuming any randomness
        if !(self.spread.is_finite() && self.spread >= 0.0) {
            return Err(BuildEnvError::InvalidSpread(self.spread));
        }
        #[allow(clippy::cast_precision_loss)]
        let means = (0..self.num_actions)
            .map(|_| rng.gen_range(self.min_mean..self.max_mean) as f64)
            .collect();
        StationaryBandit::new(means, self.spread)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envs::Bandit;
    use rand::SeedableRng;
    use rstest::rstest;

    #[test]
    fn default_matches_three_arms_zero_to_ten() {
        let config = StationaryBanditConfig::default();
        assert_eq!(config, StationaryBanditConfig::new(3, 0, 10, 1.0));
    }

    #[test]
    fn means_are_integers_in_range() {
        let config = StationaryBanditConfig::new(50, -5, 5, 1.0);
        let bandit = config.build_env(&mut Prng::seed_from_u64(0)).unwrap();
        assert_eq!(bandit.num_actions(), 50);
        for &mean in bandit.means() {
            assert!((-5.0..5.0).contains(&mean));
            assert_eq!(mean, mean.trunc());
        }
    }

    #[test]
    fn unit_range_gives_min() {
        let config = StationaryBanditConfig::new(4, 7, 8, 0.0);
        let bandit = config.build_env(&mut Prng::seed_from_u64(1)).unwrap();
        assert_eq!(bandit.means(), &[7.0, 7.0, 7.0, 7.0]);
    }

    #[test]
    fn same_seed_same_means() {
        let config = StationaryBanditConfig::new(10, 0, 100, 1.0);
        let a = config.build_env(&mut Prng::seed_from_u64(3)).unwrap();
        let b = config.build_env(&mut Prng::seed_from_u64(3)).unwrap();
        assert_eq!(a.means(), b.means());
    }

    #[rstest]
    #[case::no_actions(StationaryBanditConfig::new(0, 0, 10, 1.0), BuildEnvError::NoActions)]
    #[case::empty_range(
        StationaryBanditConfig::new(3, 5, 5, 1.0),
        BuildEnvError::EmptyMeanRange { min: 5, max: 5 }
    )]
    #[case::reversed_range(
        StationaryBanditConfig::new(3, 10, 0, 1.0),
        BuildEnvError::EmptyMeanRange { min: 10, max: 0 }
    )]
    #[case::negative_spread(
        StationaryBanditConfig::new(3, 0, 10, -1.0),
        BuildEnvError::InvalidSpread(-1.0)
    )]
    fn invalid_config(#[case] config: StationaryBanditConfig, #[case] expected: BuildEnvError) {
        let result = config.build_env(&mut Prng::seed_from_u64(0));
        assert_eq!(result.unwrap_err(), expected);
    }
}
