use super::bandit::{check_std_dev, Bandit};
use super::errors::BanditError;

use crate::rng::MaybeSeededRng;

use rand::Rng;
use rand_distr::{Distribution, Normal, StandardNormal};

/// Stationary bandit with rewards drawn from `N(mean, std_dev)`.
#[derive(Clone, Debug)]
pub struct NormalBandit {
    distribution: Normal<f64>,
    rng: MaybeSeededRng,
}

impl NormalBandit {
    pub fn new(mean: f64, std_dev: f64, seed: Option<u64>) -> Result<Self, BanditError> {
        let distribution = Normal::new(mean, check_std_dev(std_dev)?)
            .map_err(|_| BanditError::InvalidStandardDeviation(std_dev))?;

        Ok(Self {
            distribution,
            rng: MaybeSeededRng::new(seed),
        })
    }

    pub fn mean(&self) -> f64 {
        self.distribution.mean()
    }

    pub fn std_dev(&self) -> f64 {
        self.distribution.std_dev()
    }
}

impl Bandit for NormalBandit {
    fn reward(&mut self, _: u64) -> f64 {
        self.distribution.sample(self.rng.get_rng())
    }
}

/// Non-stationary normal bandit whose mean grows by `increment` every
/// `steps_per_increment` steps.
#[derive(Clone, Debug)]
pub struct IncrementingNormalBandit {
    mean: f64,
    std_dev: f64,
    increment: f64,
    steps_per_increment: u64,
    rng: MaybeSeededRng,
}

impl IncrementingNormalBandit {
    pub fn new(
        mean: f64,
        std_dev: f64,
        increment: f64,
        steps_per_increment: u64,
        seed: Option<u64>,
    ) -> Result<Self, BanditError> {
        if steps_per_increment == 0 {
            return Err(BanditError::InvalidStepInterval);
        }

        Ok(Self {
            mean,
            std_dev: check_std_dev(std_dev)?,
            increment,
            steps_per_increment,
            rng: MaybeSeededRng::new(seed),
        })
    }

    pub fn mean_at(&self, step: u64) -> f64 {
        self.mean + self.increment * (step / self.steps_per_increment) as f64
    }
}

impl Bandit for IncrementingNormalBandit {
    fn reward(&mut self, step: u64) -> f64 {
        let z: f64 = self.rng.get_rng().sample(StandardNormal);
        self.mean_at(step) + self.std_dev * z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: u64 = 1234;

    #[test]
    fn zero_std_dev_is_constant() {
        let mut bandit = NormalBandit::new(4.5, 0.0, Some(SEED)).unwrap();
        assert!((1..=100).all(|step| bandit.reward(step) == 4.5));
    }

    #[test]
    fn sample_mean() {
        let mut bandit = NormalBandit::new(50.0, 5.0, Some(SEED)).unwrap();
        assert_eq!(bandit.mean(), 50.0);
        assert_eq!(bandit.std_dev(), 5.0);
        let mean = (1..=10_000).map(|step| bandit.reward(step)).sum::<f64>() / 10_000.0;
        assert!((mean - 50.0).abs() < 0.5);
    }

    #[test]
    fn negative_std_dev() {
        assert!(matches!(
            NormalBandit::new(0.0, -1.0, None),
            Err(BanditError::InvalidStandardDeviation(_))
        ));
        assert!(matches!(
            IncrementingNormalBandit::new(0.0, -1.0, 1.0, 10, None),
            Err(BanditError::InvalidStandardDeviation(_))
        ));
    }

    #[test]
    fn zero_step_interval() {
        assert!(matches!(
            IncrementingNormalBandit::new(0.0, 1.0, 1.0, 0, None),
            Err(BanditError::InvalidStepInterval)
        ));
    }

    #[test]
    fn mean_increments_on_schedule() {
        let mut bandit = IncrementingNormalBandit::new(10.0, 0.0, 2.5, 100, Some(SEED)).unwrap();

        assert_eq!(bandit.reward(1), 10.0);
        assert_eq!(bandit.reward(99), 10.0);
        assert_eq!(bandit.reward(100), 12.5);
        assert_eq!(bandit.reward(199), 12.5);
        assert_eq!(bandit.reward(200), 15.0);
        assert_eq!(bandit.mean_at(1_000), 35.0);
    }
}
