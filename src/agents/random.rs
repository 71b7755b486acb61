use super::{Agent, Step};
use crate::envs::{Bandit, InvalidActionError};
use crate::Prng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// An agent that always acts uniformly at random.
///
/// Keeps no estimates; useful as a baseline.
#[derive(Debug, Clone)]
pub struct RandomAgent<'a, B: ?Sized> {
    bandit: &'a B,
    cumulative_reward: f64,
    rng: Prng,
}

impl<'a, B: ?Sized> RandomAgent<'a, B> {
    pub fn new(bandit: &'a B, seed: u64) -> Self {
        Self {
            bandit,
            cumulative_reward: 0.0,
            rng: Prng::seed_from_u64(seed),
        }
    }
}

impl<'a, B: ?Sized> fmt::Display for RandomAgent<'a, B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Random")
    }
}

impl<'a, B: Bandit + ?Sized + 'a> Agent<'a, B> for RandomAgent<'a, B> {
    fn bandit(&self) -> &'a B {
        self.bandit
    }

    fn step(&mut self) -> Result<Step, InvalidActionError> {
        let action = self.rng.gen_range(0..self.bandit.num_actions().max(1));
        let reward = self.bandit.sample(action, &mut self.rng)?;
        self.cumulative_reward += reward;
        Ok(Step { action, reward })
    }

    fn cumulative_reward(&self) -> f64 {
        self.cumulative_reward
    }

    fn reset(&mut self) {
        self.cumulative_reward = 0.0;
    }

    fn change_bandit(&mut self, bandit: &'a B) {
        self.bandit = bandit;
        self.cumulative_reward = 0.0;
    }
}
