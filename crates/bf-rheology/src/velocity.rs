//! Annular velocity and cuttings-transport checks.

use bf_core::Advisory;
use bf_core::units::{Velocity, VolumeRate};

use crate::annulus::Annulus;
use crate::error::{RheoResult, RheologyError};

/// Mean annular velocity for a flow rate, with a cuttings-transport check.
///
/// Returns the velocity and, when it falls below `min_velocity_mps`, a
/// [`Advisory::LowAnnularVelocity`] the caller can surface. Flow must be
/// strictly positive here; this is an operating check, not a closure.
pub fn annular_velocity(
    q: VolumeRate,
    annulus: &Annulus,
    min_velocity_mps: f64,
) -> RheoResult<(Velocity, Option<Advisory>)> {
    if !q.value.is_finite() || q.value <= 0.0 {
        return Err(RheologyError::InvalidFlow { value: q.value });
    }
    let v = annulus.mean_velocity(q);
    let advisory = (v.value < min_velocity_mps).then(|| Advisory::LowAnnularVelocity {
        velocity_mps: v.value,
        minimum_mps: min_velocity_mps,
    });
    Ok((v, advisory))
}

/// Flow rate needed to hold a target mean annular velocity.
///
/// The advisory fires when the target itself is below the transport
/// minimum, mirroring [`annular_velocity`].
pub fn flow_for_target_velocity(
    v_target: Velocity,
    annulus: &Annulus,
    min_velocity_mps: f64,
) -> RheoResult<(VolumeRate, Option<Advisory>)> {
    if !v_target.value.is_finite() || v_target.value <= 0.0 {
        return Err(RheologyError::NonPhysical {
            what: "target velocity must be positive and finite",
        });
    }
    let q = v_target * annulus.flow_area();
    let advisory = (v_target.value < min_velocity_mps).then(|| Advisory::LowAnnularVelocity {
        velocity_mps: v_target.value,
        minimum_mps: min_velocity_mps,
    });
    Ok((q, advisory))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bf_core::units::constants::MIN_TRANSPORT_VELOCITY_MPS;
    use bf_core::units::{m, m3ps, mps};

    fn annulus() -> Annulus {
        Annulus::new(m(0.3), m(0.1)).unwrap()
    }

    #[test]
    fn slow_flow_triggers_advisory() {
        let ann = annulus();
        let (v, advisory) =
            annular_velocity(m3ps(0.02), &ann, MIN_TRANSPORT_VELOCITY_MPS).unwrap();
        assert!(v.value < MIN_TRANSPORT_VELOCITY_MPS);
        assert!(matches!(
            advisory,
            Some(Advisory::LowAnnularVelocity { .. })
        ));
    }

    #[test]
    fn fast_flow_passes_clean() {
        let ann = annulus();
        let (v, advisory) =
            annular_velocity(m3ps(0.06), &ann, MIN_TRANSPORT_VELOCITY_MPS).unwrap();
        assert!(v.value > MIN_TRANSPORT_VELOCITY_MPS);
        assert!(advisory.is_none());
    }

    #[test]
    fn non_positive_flow_is_rejected() {
        let ann = annulus();
        assert!(annular_velocity(m3ps(0.0), &ann, MIN_TRANSPORT_VELOCITY_MPS).is_err());
        assert!(annular_velocity(m3ps(-0.01), &ann, MIN_TRANSPORT_VELOCITY_MPS).is_err());
    }

    #[test]
    fn target_velocity_round_trips_through_flow() {
        let ann = annulus();
        let (q, advisory) =
            flow_for_target_velocity(mps(1.0), &ann, MIN_TRANSPORT_VELOCITY_MPS).unwrap();
        assert!(advisory.is_none());
        let (v, _) = annular_velocity(q, &ann, MIN_TRANSPORT_VELOCITY_MPS).unwrap();
        assert!((v.value - 1.0).abs() < 1e-12);
    }

    #[test]
    fn slow_target_still_returns_flow_with_advisory() {
        let ann = annulus();
        let (q, advisory) =
            flow_for_target_velocity(mps(0.3), &ann, MIN_TRANSPORT_VELOCITY_MPS).unwrap();
        assert!(q.value > 0.0);
        assert!(advisory.is_some());
    }
}
