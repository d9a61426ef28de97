use crate::bandits::Bandit;
use crate::errors::SimulatorError;
use crate::policies::errors::PolicyError;
use crate::policies::{Policy, PolicyStats};

use tracing::{debug, trace, warn};

/// Couples a roster of bandits with a policy and drives the step loop.
///
/// Arms are registered first, then stepped. Every bandit is pulled with the
/// simulator's own clock, shared by the whole roster.
pub struct Simulator {
    step: u64,
    policy: Box<dyn Policy + Send>,
    bandits: Vec<Box<dyn Bandit + Send>>,
    actions: Vec<usize>,
    rewards: Vec<f64>,
}

impl Simulator {
    /// Takes ownership of a policy with no registered arms, so that every
    /// policy slot has a bandit behind it.
    pub fn new(policy: Box<dyn Policy + Send>) -> Result<Self, SimulatorError> {
        if !policy.arms().is_empty() {
            return Err(SimulatorError::PolicyNotEmpty {
                arms: policy.arms().len(),
            });
        }

        Ok(Self {
            step: 0,
            policy,
            bandits: Vec::new(),
            actions: Vec::new(),
            rewards: Vec::new(),
        })
    }

    /// Registers `bandit` and seeds its policy slot with `initial_evaluation`.
    ///
    /// Fails once the first step has been taken, or when the evaluation is
    /// not finite.
    pub fn add_arm(
        &mut self,
        bandit: Box<dyn Bandit + Send>,
        initial_evaluation: f64,
    ) -> Result<usize, SimulatorError> {
        if self.step > 0 {
            warn!(step = self.step, "Arm registered after stepping started");
            return Err(SimulatorError::ArmsLocked { step: self.step });
        }
        if !initial_evaluation.is_finite() {
            return Err(SimulatorError::InvalidInitialEvaluation(initial_evaluation));
        }

        self.bandits.push(bandit);
        let arm_id = self.policy.add_arm(initial_evaluation);
        debug!(arm_id, initial_evaluation, "Registered arm");

        Ok(arm_id)
    }

    pub fn next_step(&mut self) -> Result<(usize, f64), SimulatorError> {
        if self.bandits.is_empty() {
            return Err(SimulatorError::NoArmsRegistered);
        }

        let arm_id = self.policy.next_action()?;
        let bandit = self
            .bandits
            .get_mut(arm_id)
            .ok_or(PolicyError::ArmNotFound(arm_id))?;

        self.step += 1;
        let reward = bandit.reward(self.step);

        self.actions.push(arm_id);
        self.rewards.push(reward);
        self.policy.update(arm_id, reward)?;
        trace!(step = self.step, arm_id, reward, "Step");

        Ok((arm_id, reward))
    }

    /// Back to step 0 with empty histories. The roster, the bandits'
    /// parameters and their random streams are left as they are.
    pub fn reinit(&mut self) {
        self.step = 0;
        self.actions.clear();
        self.rewards.clear();
        self.policy.reinit();
        debug!(arms = self.bandits.len(), "Reinitialized simulator");
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    pub fn num_arms(&self) -> usize {
        self.bandits.len()
    }

    pub fn scores(&self) -> Vec<f64> {
        self.policy.arms().scores()
    }

    pub fn initial_evaluations(&self) -> Vec<f64> {
        self.policy.arms().initial_evaluations()
    }

    pub fn action_history(&self) -> &[usize] {
        &self.actions
    }

    pub fn reward_history(&self) -> &[f64] {
        &self.rewards
    }

    pub fn policy(&self) -> &dyn Policy {
        &*self.policy
    }

    pub fn stats(&self) -> PolicyStats {
        self.policy.stats()
    }
}
