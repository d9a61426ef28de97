use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("No arms to draw from")]
    NoArmsAvailable,
    #[error("Arm {0} not found")]
    ArmNotFound(usize),
    #[error("Epsilon {0} is outside [0, 1]")]
    InvalidEpsilon(f64),
    #[error("Exploration coefficient {0} must be finite and non-negative")]
    InvalidExploreCoefficient(f64),
}
