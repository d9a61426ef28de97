use thiserror::Error;

#[derive(Debug, Error)]
pub enum BanditError {
    #[error("Probability {0} is outside [0, 1]")]
    InvalidProbability(f64),
    #[error("Standard deviation {0} must be finite and non-negative")]
    InvalidStandardDeviation(f64),
    #[error("Steps per increment must be positive")]
    InvalidStepInterval,
    #[error("Sub-period must be positive and the full period must fit in 64 bits")]
    InvalidPeriod,
    #[error("Periodic bandit needs at least one mean")]
    EmptyMeans,
}
