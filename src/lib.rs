//! Multi-armed bandit simulation engine.
//!
//! A [`Simulator`](simulator::Simulator) owns a roster of
//! [`Bandit`](bandits::Bandit)s and a [`Policy`](policies::Policy). Each step
//! asks the policy for an arm, pulls that bandit with the shared step clock,
//! records the reward and feeds it back to the policy.

pub mod bandits;
pub mod config;
pub mod errors;
pub mod policies;
pub mod rng;
pub mod runner;
pub mod simulator;

pub use simulator::Simulator;
