//! Error type shared by the simulation library

use thiserror::Error;

/// Errors raised while configuring or running a simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("year count must be non-negative, got {0}")]
    NegativeYears(i64),

    #[error("year count {0} is too large")]
    TooManyYears(i64),

    #[error("invalid value {value} for parameter `{name}`: {reason}")]
    InvalidParameter {
        name: String,
        value: f64,
        reason: &'static str,
    },

    #[error("unknown assumption parameter `{0}`")]
    UnknownParameter(String),

    #[error("failed to read assumptions CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
