//! Rheology closure trait mapping flow conditions to frictional gradients.

use crate::annulus::Annulus;
use crate::error::{RheoResult, RheologyError};

/// Trait for annular friction closures.
///
/// A closure maps a mean annular velocity (or a volumetric flow rate) to
/// a frictional pressure gradient in Pa/m, and can be inverted to answer
/// "what flow rate produces this gradient". Implementations must be
/// thread-safe (Send + Sync) to support parallel sweeps.
pub trait RheologyModel: Send + Sync {
    /// Closure name (for logs and reports).
    fn name(&self) -> &'static str;

    /// Frictional pressure gradient [Pa/m] at a mean annular velocity.
    ///
    /// Velocity must be non-negative; zero velocity is allowed and yields
    /// whatever the closure predicts at rest (zero for most, the yield
    /// floor for Bingham plastics).
    fn gradient_from_velocity(&self, velocity_mps: f64, annulus: &Annulus) -> RheoResult<f64>;

    /// Frictional pressure gradient [Pa/m] for a volumetric flow rate.
    fn gradient_from_flow(&self, q_m3s: f64, annulus: &Annulus) -> RheoResult<f64> {
        let v = mean_velocity(q_m3s, annulus)?;
        self.gradient_from_velocity(v, annulus)
    }

    /// Invert the closure: flow rate [m³/s] that produces a target gradient.
    fn flow_from_gradient(&self, gradient_pa_m: f64, annulus: &Annulus) -> RheoResult<f64>;

    /// Reynolds number at a mean velocity, for closures that define one.
    ///
    /// Generalized (non-Newtonian) closures return `None`; regime
    /// advisories are skipped for them.
    fn reynolds(&self, velocity_mps: f64, annulus: &Annulus) -> Option<f64> {
        let _ = (velocity_mps, annulus);
        None
    }

    /// Cumulative frictional pressure [Pa] along a sampled path.
    ///
    /// The profile starts at zero and accumulates gradient × Δmd across
    /// each interval.
    fn friction_profile(&self, md_m: &[f64], q_m3s: f64, annulus: &Annulus) -> RheoResult<Vec<f64>> {
        let gradient = self.gradient_from_flow(q_m3s, annulus)?;
        cumulative_friction(md_m, gradient)
    }
}

/// Mean annular velocity for a flow rate, with the shared flow guard.
///
/// Zero flow is allowed; negative or non-finite flow is not.
pub fn mean_velocity(q_m3s: f64, annulus: &Annulus) -> RheoResult<f64> {
    if !q_m3s.is_finite() || q_m3s < 0.0 {
        return Err(RheologyError::InvalidFlow { value: q_m3s });
    }
    if q_m3s == 0.0 {
        return Ok(0.0);
    }
    Ok(q_m3s / annulus.flow_area().value)
}

/// Running sum of a uniform gradient over measured-depth intervals.
///
/// With fewer than two samples the profile is all zeros, matching the
/// input length.
pub fn cumulative_friction(md_m: &[f64], gradient_pa_m: f64) -> RheoResult<Vec<f64>> {
    if md_m.len() < 2 {
        return Ok(vec![0.0; md_m.len()]);
    }
    let mut out = Vec::with_capacity(md_m.len());
    out.push(0.0);
    let mut acc = 0.0;
    for pair in md_m.windows(2) {
        let dmd = pair[1] - pair[0];
        if dmd < 0.0 {
            return Err(RheologyError::NonMonotonicPath { at_m: pair[0] });
        }
        acc += gradient_pa_m * dmd;
        out.push(acc);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bf_core::units::m;

    fn annulus() -> Annulus {
        Annulus::new(m(0.3), m(0.1)).unwrap()
    }

    #[test]
    fn mean_velocity_guards_flow_sign() {
        let ann = annulus();
        assert_eq!(mean_velocity(0.0, &ann).unwrap(), 0.0);
        assert!(mean_velocity(-0.01, &ann).is_err());
        assert!(mean_velocity(f64::NAN, &ann).is_err());
        let v = mean_velocity(0.02, &ann).unwrap();
        assert!((v - 0.02 / ann.flow_area().value).abs() < 1e-15);
    }

    #[test]
    fn cumulative_friction_runs_from_zero() {
        let md = [0.0, 1.0, 2.5, 2.5, 4.0];
        let pf = cumulative_friction(&md, 10.0).unwrap();
        assert_eq!(pf, vec![0.0, 10.0, 25.0, 25.0, 40.0]);
    }

    #[test]
    fn cumulative_friction_short_inputs_are_zeros() {
        assert_eq!(cumulative_friction(&[], 5.0).unwrap(), Vec::<f64>::new());
        assert_eq!(cumulative_friction(&[3.0], 5.0).unwrap(), vec![0.0]);
    }

    #[test]
    fn cumulative_friction_rejects_decreasing_md() {
        let md = [0.0, 2.0, 1.0];
        let err = cumulative_friction(&md, 5.0).unwrap_err();
        assert!(matches!(err, RheologyError::NonMonotonicPath { .. }));
    }
}
