use crate::bandits::BanditType;
use crate::errors::AppError;
use crate::policies::PolicyType;
use crate::simulator::Simulator;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SimulationConfig {
    pub steps: usize,
    pub trials: usize,
    pub window: usize,
}

#[derive(Debug, Deserialize)]
pub struct ArmConfig {
    pub bandit: BanditType,
    pub initial_evaluation: f64,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub log_level: String,
    pub simulation: SimulationConfig,
    pub policy: PolicyType,
    pub arms: Vec<ArmConfig>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config"))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        builder.try_deserialize()
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Builds the policy and every bandit, then registers the arms in
    /// declaration order.
    pub fn build_simulator(&self) -> Result<Simulator, AppError> {
        let mut simulator = Simulator::new(self.policy.clone().into_inner()?)?;

        for arm in &self.arms {
            let bandit = arm.bandit.clone().into_inner()?;
            simulator.add_arm(bandit, arm.initial_evaluation)?;
        }

        Ok(simulator)
    }
}
