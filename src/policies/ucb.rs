use super::arm::{choose, Arms};
use super::errors::PolicyError;
use super::policy::{Policy, PolicyType};

use crate::rng::MaybeSeededRng;

use tracing::trace;

/// Upper confidence bound policy.
///
/// `score = estimate + c * sqrt(ln(step + 1) / (1 + pulls))`, recomputed for
/// every arm after each update since the `ln(step + 1)` term is shared.
/// Estimates are plain sample averages: the initial evaluation only matters
/// until an arm is first pulled.
#[derive(Clone, Debug)]
pub struct Ucb {
    arms: Arms,
    explore_coefficient: f64,
    rng: MaybeSeededRng,
}

impl Ucb {
    pub fn new(explore_coefficient: f64, seed: Option<u64>) -> Result<Self, PolicyError> {
        if !(explore_coefficient.is_finite() && explore_coefficient >= 0.0) {
            return Err(PolicyError::InvalidExploreCoefficient(explore_coefficient));
        }

        Ok(Self {
            arms: Arms::new(),
            explore_coefficient,
            rng: MaybeSeededRng::new(seed),
        })
    }

    pub fn explore_coefficient(&self) -> f64 {
        self.explore_coefficient
    }

    fn refresh_scores(&mut self) {
        let log_step = ((self.arms.step() + 1) as f64).ln();
        let c = self.explore_coefficient;

        self.arms.iter_mut().for_each(|arm| {
            let uncertainty = (log_step / (1 + arm.pulls) as f64).sqrt();
            arm.score = arm.estimate + c * uncertainty;
        });
    }
}

impl Policy for Ucb {
    fn policy_type(&self) -> PolicyType {
        PolicyType::Ucb {
            explore_coefficient: self.explore_coefficient,
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
        trace!(step, arm_id, "UCB action");

        Ok(arm_id)
    }

    fn update(&mut self, arm_id: usize, reward: f64) -> Result<(), PolicyError> {
        self.arms.get_mut(arm_id)?.update_unbiased(reward);
        self.refresh_scores();
        Ok(())
    }

    fn arms(&self) -> &Arms {
        &self.arms
    }
}
