//! Profile integration errors.

use bf_core::BfError;
use bf_path::PathError;
use bf_rheology::RheologyError;
use thiserror::Error;

/// Result type for profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Errors that can occur while integrating pressure profiles.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    /// Measured depth decreases along the path.
    #[error("Path is not monotonic: measured depth decreases after {at_m} m")]
    NonMonotonicPath { at_m: f64 },

    /// Aligned sequences differ in length.
    #[error("Length mismatch for {what}: left={left}, right={right}")]
    LengthMismatch {
        what: &'static str,
        left: usize,
        right: usize,
    },

    /// A sample references a segment id with no gradient.
    #[error("Sample {index} references unknown segment {segment}")]
    UnknownSegment { segment: usize, index: usize },

    /// Non-physical scalar input.
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    #[error("Path error: {0}")]
    Path(#[from] PathError),

    #[error("Rheology error: {0}")]
    Rheology(#[from] RheologyError),
}

impl From<ProfileError> for BfError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::NonMonotonicPath { .. } => BfError::Invariant {
                what: "measured depth must be non-decreasing",
            },
            ProfileError::LengthMismatch { what, left, right } => {
                BfError::LengthMismatch { what, left, right }
            }
            ProfileError::UnknownSegment { .. } => BfError::Invariant {
                what: "sample references a segment with no gradient",
            },
            ProfileError::NonPhysical { what } => BfError::InvalidArg { what },
            ProfileError::Path(e) => e.into(),
            ProfileError::Rheology(e) => e.into(),
        }
    }
}
