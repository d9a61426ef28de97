use super::errors::PolicyError;

use rand::{seq::IndexedRandom, Rng};
use serde::Serialize;

/// Statistics a policy keeps for one registered bandit.
#[derive(Clone, Debug, PartialEq)]
pub struct Arm {
    pub(super) initial_evaluation: f64,
    pub(super) pulls: u64,
    pub(super) estimate: f64,
    pub(super) score: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ArmStats {
    pub pulls: u64,
    pub estimate: f64,
    pub score: f64,
    pub initial_evaluation: f64,
}

impl Arm {
    fn new(initial_evaluation: f64) -> Self {
        Self {
            initial_evaluation,
            pulls: 0,
            estimate: initial_evaluation,
            score: initial_evaluation,
        }
    }

    pub fn pulls(&self) -> u64 {
        self.pulls
    }

    pub fn estimate(&self) -> f64 {
        self.estimate
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn initial_evaluation(&self) -> f64 {
        self.initial_evaluation
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.initial_evaluation);
    }

    // the initial evaluation counts as one observation, hence pulls + 1
    pub(super) fn update_blended(&mut self, reward: f64) {
        self.pulls += 1;
        self.estimate += (reward - self.estimate) / (self.pulls + 1) as f64;
        self.score = self.estimate;
    }

    // plain sample average, the initial evaluation is gone after the first pull
    pub(super) fn update_unbiased(&mut self, reward: f64) {
        self.pulls += 1;
        self.estimate += (reward - self.estimate) / self.pulls as f64;
    }

    pub fn stats(&self) -> ArmStats {
        ArmStats {
            pulls: self.pulls,
            estimate: self.estimate,
            score: self.score,
            initial_evaluation: self.initial_evaluation,
        }
    }
}

/// Per-arm statistics indexed by registration order, plus the number of
/// actions taken so far.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Arms {
    step: u64,
    arms: Vec<Arm>,
}

impl Arms {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.arms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    pub fn get(&self, arm_id: usize) -> Option<&Arm> {
        self.arms.get(arm_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arm> {
        self.arms.iter()
    }

    pub fn scores(&self) -> Vec<f64> {
        self.arms.iter().map(|arm| arm.score).collect()
    }

    pub fn estimates(&self) -> Vec<f64> {
        self.arms.iter().map(|arm| arm.estimate).collect()
    }

    pub fn pulls(&self) -> Vec<u64> {
        self.arms.iter().map(|arm| arm.pulls).collect()
    }

    pub fn initial_evaluations(&self) -> Vec<f64> {
        self.arms.iter().map(Arm::initial_evaluation).collect()
    }

    /// Indices of every arm tied at the maximum score.
    pub fn greedy_actions(&self) -> Vec<usize> {
        match self.max_score() {
            Some(max) => self.indices_where(|score| score == max),
            None => Vec::new(),
        }
    }

    /// Indices of every arm strictly below the maximum score.
    pub fn explore_actions(&self) -> Vec<usize> {
        match self.max_score() {
            Some(max) => self.indices_where(|score| score < max),
            None => Vec::new(),
        }
    }

    pub(super) fn push(&mut self, initial_evaluation: f64) -> usize {
        self.arms.push(Arm::new(initial_evaluation));
        self.arms.len() - 1
    }

    pub(super) fn reinit(&mut self) {
        self.step = 0;
        self.arms.iter_mut().for_each(Arm::reset);
    }

    pub(super) fn tick(&mut self) -> u64 {
        self.step += 1;
        self.step
    }

    pub(super) fn get_mut(&mut self, arm_id: usize) -> Result<&mut Arm, PolicyError> {
        self.arms
            .get_mut(arm_id)
            .ok_or(PolicyError::ArmNotFound(arm_id))
    }

    pub(super) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Arm> {
        self.arms.iter_mut()
    }

    fn max_score(&self) -> Option<f64> {
        self.arms.iter().map(|arm| arm.score).reduce(f64::max)
    }

    fn indices_where(&self, predicate: impl Fn(f64) -> bool) -> Vec<usize> {
        self.arms
            .iter()
            .enumerate()
            .filter(|(_, arm)| predicate(arm.score))
            .map(|(arm_id, _)| arm_id)
            .collect()
    }
}

/// Uniform choice among `candidates`.
pub(super) fn choose<R: Rng + ?Sized>(
    candidates: &[usize],
    rng: &mut R,
) -> Result<usize, PolicyError> {
    candidates
        .choose(rng)
        .copied()
        .ok_or(PolicyError::NoArmsAvailable)
}
