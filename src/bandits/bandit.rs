use super::bernoulli::BernoulliBandit;
use super::errors::BanditError;
use super::normal::{IncrementingNormalBandit, NormalBandit};
use super::periodic::PeriodicNormalBandit;

use serde::{Deserialize, Serialize};

/// A stochastic reward source.
///
/// `step` is the simulator's shared clock, starting at 1 and strictly
/// increasing between calls. Implementations do not validate it.
pub trait Bandit {
    fn reward(&mut self, step: u64) -> f64;
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BanditType {
    Bernoulli {
        probability: f64,
        seed: Option<u64>,
    },
    Normal {
        mean: f64,
        std_dev: f64,
        seed: Option<u64>,
    },
    IncrementingNormal {
        mean: f64,
        std_dev: f64,
        increment: f64,
        steps_per_increment: u64,
        seed: Option<u64>,
    },
    PeriodicNormal {
        means: Vec<f64>,
        std_dev: f64,
        sub_period: u64,
        seed: Option<u64>,
    },
}

impl BanditType {
    pub fn into_inner(self) -> Result<Box<dyn Bandit + Send>, BanditError> {
        let bandit: Box<dyn Bandit + Send> = match self {
            BanditType::Bernoulli { probability, seed } => {
                Box::new(BernoulliBandit::new(probability, seed)?)
            }
            BanditType::Normal {
                mean,
                std_dev,
                seed,
            } => Box::new(NormalBandit::new(mean, std_dev, seed)?),
            BanditType::IncrementingNormal {
                mean,
                std_dev,
                increment,
                steps_per_increment,
                seed,
            } => Box::new(IncrementingNormalBandit::new(
                mean,
                std_dev,
                increment,
                steps_per_increment,
                seed,
            )?),
            BanditType::PeriodicNormal {
                means,
                std_dev,
                sub_period,
                seed,
            } => Box::new(PeriodicNormalBandit::new(means, std_dev, sub_period, seed)?),
        };

        Ok(bandit)
    }
}

pub(super) fn check_std_dev(std_dev: f64) -> Result<f64, BanditError> {
    if std_dev.is_finite() && std_dev >= 0.0 {
        Ok(std_dev)
    } else {
        Err(BanditError::InvalidStandardDeviation(std_dev))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_from_type() {
        let mut bandit = BanditType::Bernoulli {
            probability: 1.0,
            seed: Some(1234),
        }
        .into_inner()
        .unwrap();
        assert_eq!(bandit.reward(1), 1.0);
    }

    #[test]
    fn build_rejects_invalid() {
        let result = BanditType::Normal {
            mean: 0.0,
            std_dev: -1.0,
            seed: None,
        }
        .into_inner();
        assert!(matches!(
            result,
            Err(BanditError::InvalidStandardDeviation(_))
        ));

        let result = BanditType::PeriodicNormal {
            means: vec![],
            std_dev: 1.0,
            sub_period: 10,
            seed: None,
        }
        .into_inner();
        assert!(matches!(result, Err(BanditError::EmptyMeans)));
    }

    #[test]
    fn check_std_dev_bounds() {
        assert!(check_std_dev(0.0).is_ok());
        assert!(check_std_dev(f64::NAN).is_err());
        assert!(check_std_dev(f64::INFINITY).is_err());
    }
}
