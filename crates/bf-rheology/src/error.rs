//! Rheology and annulus hydraulics errors.

use bf_core::BfError;
use thiserror::Error;

/// Result type for rheology operations.
pub type RheoResult<T> = Result<T, RheologyError>;

/// Errors that can occur during annular hydraulics calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RheologyError {
    /// Geometry that cannot form an annulus.
    #[error("Invalid annulus geometry: {what}")]
    InvalidGeometry { what: &'static str },

    /// Negative or non-finite volumetric flow rate.
    #[error("Invalid flow rate: {value} m³/s")]
    InvalidFlow { value: f64 },

    /// Non-positive or non-finite Reynolds number.
    #[error("Invalid Reynolds number: {value}")]
    InvalidReynolds { value: f64 },

    /// Non-physical values (negative density, viscosity, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// A target state the closure can never reach.
    #[error("Unattainable target: {what}")]
    Unattainable { what: &'static str },

    /// Per-segment gradient list does not match the segment count.
    #[error("Gradient count mismatch: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    /// Measured depth decreases along the path.
    #[error("Path is not monotonic: measured depth decreases after {at_m} m")]
    NonMonotonicPath { at_m: f64 },
}

impl From<RheologyError> for BfError {
    fn from(err: RheologyError) -> Self {
        match err {
            RheologyError::InvalidGeometry { what } => BfError::InvalidArg { what },
            RheologyError::InvalidFlow { value } => BfError::NonPositive {
                what: "flow rate",
                value,
            },
            RheologyError::InvalidReynolds { value } => BfError::NonPositive {
                what: "Reynolds number",
                value,
            },
            RheologyError::NonPhysical { what } => BfError::InvalidArg { what },
            RheologyError::Unattainable { what } => BfError::InvalidArg { what },
            RheologyError::LengthMismatch { expected, got } => BfError::LengthMismatch {
                what: "per-segment gradients",
                left: expected,
                right: got,
            },
            RheologyError::NonMonotonicPath { .. } => BfError::Invariant {
                what: "measured depth must be non-decreasing",
            },
        }
    }
}
