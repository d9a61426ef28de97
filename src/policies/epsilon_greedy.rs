use super::arm::{choose, Arms};
use super::errors::PolicyError;
use super::policy::{Policy, PolicyType};

use crate::rng::MaybeSeededRng;

use rand::Rng;
use tracing::trace;

/// Explores with probability `epsilon`, exploits otherwise.
///
/// An exploration action is drawn among the arms that are *not* tied at the
/// best score. When every arm is tied, it falls back to any arm.
#[derive(Clone, Debug)]
pub struct EpsilonGreedy {
    arms: Arms,
    epsilon: f64,
    rng: MaybeSeededRng,
}

impl EpsilonGreedy {
    pub fn new(epsilon: f64, seed: Option<u64>) -> Result<Self, PolicyError> {
        if !(0.0..=1.0).contains(&epsilon) {
            return Err(PolicyError::InvalidEpsilon(epsilon));
        }

        Ok(Self {
            arms: Arms::new(),
            epsilon,
            rng: MaybeSeededRng::new(seed),
        })
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    fn candidates(&mut self) -> Vec<usize> {
        if self.rng.get_rng().random_bool(self.epsilon) {
            let explore = self.arms.explore_actions();
            if explore.is_empty() {
                (0..self.arms.len()).collect()
            } else {
                explore
            }
        } else {
            self.arms.greedy_actions()
        }
    }
}

impl Policy for EpsilonGreedy {
    fn policy_type(&self) -> PolicyType {
        PolicyType::EpsilonGreedy {
            epsilon: self.epsilon,
            seed: self.rng.seed(),
        }
    }

    fn add_arm(&mut self, initial_evaluation: f64) -> usize {
        self.arms.push(initial_evaluation)
    }

    fn reinit(&mut self) {
        self.arms.reinit();
    }

    fn next_action(&mut self) -> Result<usize, PolicyError> {
        if self.arms.is_empty() {
            return Err(PolicyError::NoArmsAvailable);
        }

        let step = self.arms.tick();
        let candidates = self.candidates();
        let arm_id = choose(&candidates, self.rng.get_rng())?;
        trace!(step, arm_id, "Epsilon-greedy action");

        Ok(arm_id)
    }

    fn update(&mut self, arm_id: usize, reward: f64) -> Result<(), PolicyError> {
        self.arms.get_mut(arm_id)?.update_blended(reward);
        Ok(())
    }

    fn arms(&self) -> &Arms {
        &self.arms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    const SEED: u64 = 1234;

    #[test]
    fn create_arm() {
        let mut policy = EpsilonGreedy::new(0.15, Some(SEED)).unwrap();
        assert_eq!(policy.epsilon(), 0.15);
        assert!(policy.arms.is_empty());

        let arm_id = policy.add_arm(0.0);
        assert_eq!(policy.arms.len(), 1);
        assert_eq!(arm_id, 0);
    }

    #[test]
    fn invalid_epsilon() {
        assert!(EpsilonGreedy::new(-0.01, None).is_err());
        assert!(EpsilonGreedy::new(1.01, None).is_err());
        assert!(EpsilonGreedy::new(f64::NAN, None).is_err());
        assert!(EpsilonGreedy::new(0.0, None).is_ok());
        assert!(EpsilonGreedy::new(1.0, None).is_ok());
    }

    #[test]
    fn draw() {
        let mut policy = EpsilonGreedy::new(0.15, Some(SEED)).unwrap();
        let arm_id = policy.add_arm(0.0);
        assert_eq!(policy.next_action().ok(), Some(arm_id));
    }

    #[test]
    fn draw_best() {
        let mut policy = EpsilonGreedy::new(0.0, Some(SEED)).unwrap();
        let arm_1 = policy.add_arm(1.0);
        let _ = policy.add_arm(0.0);
        let _ = policy.add_arm(0.5);

        assert!((0..100).all(|_| policy.next_action().ok() == Some(arm_1)));
    }

    #[test]
    fn always_explore() {
        let mut policy = EpsilonGreedy::new(1.0, Some(SEED)).unwrap();
        let arm_1 = policy.add_arm(1.0);
        let _ = policy.add_arm(0.0);
        let _ = policy.add_arm(0.5);

        assert!((0..100).all(|_| policy.next_action().ok() != Some(arm_1)));
    }

    #[test]
    fn explore_falls_back_when_all_tied() {
        let mut policy = EpsilonGreedy::new(1.0, Some(SEED)).unwrap();
        policy.add_arm(1.0);
        policy.add_arm(1.0);

        let mut seen = [false; 2];
        for _ in 0..100 {
            seen[policy.next_action().unwrap()] = true;
        }
        assert_eq!(seen, [true, true]);
    }

    #[test]
    fn draw_empty() {
        let mut policy = EpsilonGreedy::new(0.15, Some(SEED)).unwrap();
        assert!(policy.next_action().is_err());
    }

    #[test]
    fn update() {
        let mut policy = EpsilonGreedy::new(0.0, Some(SEED)).unwrap();
        let arm_1 = policy.add_arm(0.0);
        let arm_2 = policy.add_arm(0.0);

        assert!(policy.update(arm_1, 1.0).is_ok());
        assert_eq!(policy.arms.get(arm_1).map(|arm| arm.estimate()), Some(0.5));
        assert_eq!(policy.arms.get(arm_2).map(|arm| arm.estimate()), Some(0.0));
        assert_eq!(policy.arms.get(arm_1).map(|arm| arm.pulls()), Some(1));
    }

    #[test]
    fn learns_best_arm() {
        let mut rng = SmallRng::seed_from_u64(SEED);
        let mut policy = EpsilonGreedy::new(0.1, Some(SEED)).unwrap();
        let probabilities = [0.2, 0.5, 0.8];
        probabilities.iter().for_each(|_| {
            policy.add_arm(1.0);
        });

        for _ in 0..2_000 {
            let arm_id = policy.next_action().unwrap();
            let reward = rng.random_bool(probabilities[arm_id]) as u8 as f64;
            policy.update(arm_id, reward).unwrap();
        }

        let pulls = policy.arms.pulls();
        assert_eq!(pulls.iter().sum::<u64>(), 2_000);
        assert!(pulls[2] > pulls[0] && pulls[2] > pulls[1]);
    }
}
