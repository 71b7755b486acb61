//! Parse the bandit configuration from Options
use super::Options;
use crate::envs::StationaryBanditConfig;

impl From<&Options> for StationaryBanditConfig {
    fn from(opts: &Options) -> Self {
        Self::new(opts.num_actions, opts.min, opts.max, opts.spread)
    }
}
