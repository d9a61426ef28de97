use super::arm::{ArmStats, Arms};
use super::epsilon_greedy::EpsilonGreedy;
use super::errors::PolicyError;
use super::greedy::Greedy;
use super::ucb::Ucb;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PolicyStats {
    pub step: u64,
    pub arms: Vec<ArmStats>,
}

impl From<&Arms> for PolicyStats {
    fn from(arms: &Arms) -> Self {
        Self {
            step: arms.step(),
            arms: arms.iter().map(|arm| arm.stats()).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PolicyType {
    Greedy {
        seed: Option<u64>,
    },
    EpsilonGreedy {
        epsilon: f64,
        seed: Option<u64>,
    },
    Ucb {
        explore_coefficient: f64,
        seed: Option<u64>,
    },
}

impl PolicyType {
    pub fn into_inner(self) -> Result<Box<dyn Policy + Send>, PolicyError> {
        let policy: Box<dyn Policy + Send> = match self {
            PolicyType::Greedy { seed } => Box::new(Greedy::new(seed)),
            PolicyType::EpsilonGreedy { epsilon, seed } => {
                Box::new(EpsilonGreedy::new(epsilon, seed)?)
            }
            PolicyType::Ucb {
                explore_coefficient,
                seed,
            } => Box::new(Ucb::new(explore_coefficient, seed)?),
        };

        Ok(policy)
    }
}

/// Action selection rule over the registered arms.
///
/// Callers must alternate `next_action` and `update` for the same arm, once
/// each per step. `update` is the only place where pull counts change.
pub trait Policy: Send {
    fn policy_type(&self) -> PolicyType;

    /// Registers a new arm whose estimate and score both start at
    /// `initial_evaluation`. Returns the arm index.
    fn add_arm(&mut self, initial_evaluation: f64) -> usize;

    /// Restores every arm to its registration-time evaluation, with zero
    /// pulls and a zero step count.
    fn reinit(&mut self);

    fn next_action(&mut self) -> Result<usize, PolicyError>;

    fn update(&mut self, arm_id: usize, reward: f64) -> Result<(), PolicyError>;

    fn arms(&self) -> &Arms;

    fn stats(&self) -> PolicyStats {
        PolicyStats::from(self.arms())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: Option<u64> = Some(1234);

    #[test]
    fn round_trip_type() {
        let types = [
            PolicyType::Greedy { seed: SEED },
            PolicyType::EpsilonGreedy {
                epsilon: 0.1,
                seed: SEED,
            },
            PolicyType::Ucb {
                explore_coefficient: 2.0,
                seed: None,
            },
        ];

        for policy_type in types {
            let policy = policy_type.clone().into_inner().unwrap();
            assert_eq!(policy.policy_type(), policy_type);
        }
    }

    #[test]
    fn invalid_parameters() {
        assert!(matches!(
            PolicyType::EpsilonGreedy {
                epsilon: 1.5,
                seed: SEED
            }
            .into_inner(),
            Err(PolicyError::InvalidEpsilon(_))
        ));
        assert!(matches!(
            PolicyType::Ucb {
                explore_coefficient: -1.0,
                seed: SEED
            }
            .into_inner(),
            Err(PolicyError::InvalidExploreCoefficient(_))
        ));
    }

    #[test]
    fn deserialize_tagged() {
        let policy_type: PolicyType =
            serde_json::from_str(r#"{"type": "ucb", "explore_coefficient": 50.0}"#).unwrap();
        assert_eq!(
            policy_type,
            PolicyType::Ucb {
                explore_coefficient: 50.0,
                seed: None
            }
        );
    }

    #[test]
    fn stats() {
        let mut policy = PolicyType::Greedy { seed: SEED }.into_inner().unwrap();
        policy.add_arm(1.0);
        policy.add_arm(2.0);
        let arm_id = policy.next_action().unwrap();
        policy.update(arm_id, 0.0).unwrap();

        let stats = policy.stats();
        assert_eq!(stats.step, 1);
        assert_eq!(stats.arms.len(), 2);
        assert_eq!(stats.arms[arm_id].pulls, 1);
        assert_eq!(stats.arms[0].initial_evaluation, 1.0);
    }
}
