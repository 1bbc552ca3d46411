//! Error types for trajectory construction and sampling.

use bf_core::BfError;
use thiserror::Error;

/// Errors that can occur while building or sampling a trajectory.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    #[error("Sample step must be positive and finite, got {value}")]
    InvalidStep { value: f64 },

    #[error("Tangent length must be positive and finite, got {value} m")]
    InvalidLength { value: f64 },

    #[error("Arc radius must be positive and finite, got {value} m")]
    InvalidRadius { value: f64 },

    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

pub type PathResult<T> = Result<T, PathError>;

impl From<PathError> for BfError {
    fn from(e: PathError) -> Self {
        match e {
            PathError::InvalidStep { value } => BfError::NonPositive {
                what: "sample step",
                value,
            },
            PathError::InvalidLength { value } => BfError::NonPositive {
                what: "tangent length",
                value,
            },
            PathError::InvalidRadius { value } => BfError::NonPositive {
                what: "arc radius",
                value,
            },
            PathError::NonFinite { what, value } => BfError::NonFinite { what, value },
        }
    }
}
