//! Non-fatal diagnostics attached to otherwise successful results.
//!
//! An advisory flags an operational concern (poor hole cleaning, flow
//! outside the laminar range) without failing the computation. Callers
//! decide whether to surface, log, or ignore them.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Advisory {
    /// Mean annular velocity below the cuttings-transport minimum.
    LowAnnularVelocity { velocity_mps: f64, minimum_mps: f64 },

    /// Reynolds number past the laminar range; friction estimates
    /// carry correlation uncertainty there.
    BeyondLaminarRange { reynolds: f64 },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::LowAnnularVelocity {
                velocity_mps,
                minimum_mps,
            } => write!(
                f,
                "annular velocity {velocity_mps:.3} m/s is below the {minimum_mps:.3} m/s cuttings-transport minimum"
            ),
            Advisory::BeyondLaminarRange { reynolds } => write!(
                f,
                "Reynolds number {reynolds:.0} is beyond the laminar range; friction is correlation-based"
            ),
        }
    }
}
