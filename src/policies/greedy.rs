use super::arm::{choose, Arms};
use super::errors::PolicyError;
use super::policy::{Policy, PolicyType};

use crate::rng::MaybeSeededRng;

use tracing::trace;

/// Always exploits: picks uniformly among the arms tied at the best score.
#[derive(Clone, Debug)]
pub struct Greedy {
    arms: Arms,
    rng: MaybeSeededRng,
}

impl Greedy {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            arms: Arms::new(),
            rng: MaybeSeededRng::new(seed),
        }
    }
}

impl Policy for Greedy {
    fn policy_type(&self) -> PolicyType {
        PolicyType::Greedy {
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
        let arm_id = choose(&self.arms.greedy_actions(), self.rng.get_rng())?;
        trace!(step, arm_id, "Greedy action");

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
