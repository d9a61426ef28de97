use crate::bandits::errors::BanditError;
use crate::policies::errors::PolicyError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("Cannot register arms after stepping started (step {step})")]
    ArmsLocked { step: u64 },
    #[error("No arms registered")]
    NoArmsRegistered,
    #[error("Policy already has {arms} arms registered")]
    PolicyNotEmpty { arms: usize },
    #[error("Initial evaluation {0} must be finite")]
    InvalidInitialEvaluation(f64),
    #[error(transparent)]
    Policy(#[from] PolicyError),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot read config: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Bandit(#[from] BanditError),
    #[error(transparent)]
    Policy(#[from] PolicyError),
    #[error(transparent)]
    Simulator(#[from] SimulatorError),
    #[error("Failed to serialize report to JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}
