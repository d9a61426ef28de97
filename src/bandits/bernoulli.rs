use super::bandit::Bandit;
use super::errors::BanditError;

use crate::rng::MaybeSeededRng;

use rand_distr::{Bernoulli, Distribution};

/// Stationary bandit paying 1 with a fixed probability, 0 otherwise.
#[derive(Clone, Debug)]
pub struct BernoulliBandit {
    probability: f64,
    distribution: Bernoulli,
    rng: MaybeSeededRng,
}

impl BernoulliBandit {
    pub fn new(probability: f64, seed: Option<u64>) -> Result<Self, BanditError> {
        let distribution =
            Bernoulli::new(probability).map_err(|_| BanditError::InvalidProbability(probability))?;

        Ok(Self {
            probability,
            distribution,
            rng: MaybeSeededRng::new(seed),
        })
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl Bandit for BernoulliBandit {
    fn reward(&mut self, _: u64) -> f64 {
        if self.distribution.sample(self.rng.get_rng()) {
            1.0
        } else {
            0.0
        }
    }
}
