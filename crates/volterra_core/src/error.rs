use thiserror::Error;

/// Errors raised while setting up a run.
///
/// Numerical blow-up is not an error: overflow and NaN flow into the
/// trajectory unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntegrationError {
    #[error("step size dt must be positive, got {0}")]
    NonPositiveStep(f64),
    #[error("step size dt must be finite, got {0}")]
    NonFiniteStep(f64),
    #[error("final time must be finite and non-negative, got {0}")]
    InvalidFinalTime(f64),
    #[error("time grid with final time {final_time} and dt {dt} has too many steps")]
    TooManySteps { final_time: f64, dt: f64 },
    #[error("unknown integration method \"{0}\" (expected \"euler\" or \"rk4\")")]
    UnknownMethod(String),
}
