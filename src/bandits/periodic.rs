use super::bandit::{check_std_dev, Bandit};
use super::errors::BanditError;

use crate::rng::MaybeSeededRng;

use rand::Rng;
use rand_distr::StandardNormal;

/// Normal bandit cycling through `means`, holding each one for `sub_period`
/// steps.
#[derive(Clone, Debug)]
pub struct PeriodicNormalBandit {
    means: Vec<f64>,
    std_dev: f64,
    sub_period: u64,
    period: u64,
    rng: MaybeSeededRng,
}

impl PeriodicNormalBandit {
    pub fn new(
        means: Vec<f64>,
        std_dev: f64,
        sub_period: u64,
        seed: Option<u64>,
    ) -> Result<Self, BanditError> {
        if means.is_empty() {
            return Err(BanditError::EmptyMeans);
        }
        if sub_period == 0 {
            return Err(BanditError::InvalidPeriod);
        }
        let period = sub_period
            .checked_mul(means.len() as u64)
            .ok_or(BanditError::InvalidPeriod)?;

        Ok(Self {
            means,
            std_dev: check_std_dev(std_dev)?,
            sub_period,
            period,
            rng: MaybeSeededRng::new(seed),
        })
    }

    pub fn period(&self) -> u64 {
        self.period
    }

    pub fn mean_at(&self, step: u64) -> f64 {
        let index = (step % self.period) / self.sub_period;
        self.means[index as usize]
    }
}

impl Bandit for PeriodicNormalBandit {
    fn reward(&mut self, step: u64) -> f64 {
        let z: f64 = self.rng.get_rng().sample(StandardNormal);
        self.mean_at(step) + self.std_dev * z
    }
}
