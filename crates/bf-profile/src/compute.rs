//! End-to-end annular pressure profile computation.

use serde::{Deserialize, Serialize};

use bf_core::Advisory;
use bf_core::units::constants::{G0_MPS2, MIN_TRANSPORT_VELOCITY_MPS};
use bf_core::units::{Density, VolumeRate};
use bf_path::{PathSamples, Trajectory, sample_path};
use bf_rheology::{
    Annulus, RE_LAMINAR_ADVISORY, RheologyModel, SegmentGradients, cumulative_friction,
    mean_velocity,
};

use crate::error::{ProfileError, ProfileResult};
use crate::friction::friction_profile_piecewise;
use crate::hydrostatic::hydrostatic_profile;
use crate::total::{MaxPressure, PressureProfile};

/// Tunables for profile integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileOptions {
    /// Gravitational acceleration used for hydrostatic head.
    pub gravity_mps2: f64,
    /// Mean annular velocity below which the transport advisory fires.
    pub min_velocity_mps: f64,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            gravity_mps2: G0_MPS2,
            min_velocity_mps: MIN_TRANSPORT_VELOCITY_MPS,
        }
    }
}

/// Everything needed to compute one pressure profile.
#[derive(Clone, Copy)]
pub struct ComputeRequest<'a> {
    pub trajectory: &'a Trajectory,
    pub annulus: Annulus,
    pub fluid: &'a dyn RheologyModel,
    /// Mud density driving the hydrostatic head.
    pub density: Density,
    pub flow_rate: VolumeRate,
    /// Nominal along-hole sample step.
    pub step_m: f64,
    pub options: ProfileOptions,
}

/// Point hydraulics evaluated once per computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HydraulicsSummary {
    pub flow_area_m2: f64,
    pub hydraulic_diameter_m: f64,
    pub velocity_mps: f64,
    /// `None` for closures without a Reynolds definition.
    pub reynolds: Option<f64>,
    pub gradient_pa_m: f64,
}

/// Full result of a profile computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputeOutcome {
    pub samples: PathSamples,
    pub profile: PressureProfile,
    pub max_total: MaxPressure,
    pub hydraulics: HydraulicsSummary,
    pub advisories: Vec<Advisory>,
}

/// Sample the trajectory and integrate hydrostatic + frictional pressure.
///
/// The closure supplies one uniform gradient for the whole annulus; use
/// [`compute_profile_piecewise`] when segments carry distinct gradients.
pub fn compute_profile(request: &ComputeRequest<'_>) -> ProfileResult<ComputeOutcome> {
    let rho = request.density.value;
    if !rho.is_finite() || rho <= 0.0 {
        return Err(ProfileError::NonPhysical {
            what: "mud density must be positive and finite",
        });
    }

    let samples = sample_path(request.trajectory, request.step_m)?;

    let q = request.flow_rate.value;
    let velocity = mean_velocity(q, &request.annulus)?;
    let gradient = request.fluid.gradient_from_flow(q, &request.annulus)?;
    let reynolds = request.fluid.reynolds(velocity, &request.annulus);

    let friction = cumulative_friction(&samples.md_m, gradient)?;
    let hydrostatic = hydrostatic_profile(&samples.z_m, rho, request.options.gravity_mps2);
    let profile = PressureProfile::new(hydrostatic, friction)?;
    let max_total = MaxPressure::locate(&profile, &samples)?;

    let advisories = collect_advisories(velocity, reynolds, request.options.min_velocity_mps);

    tracing::debug!(
        model = request.fluid.name(),
        samples = samples.len(),
        gradient_pa_m = gradient,
        max_total_pa = max_total.total_pa,
        "computed annular pressure profile"
    );

    Ok(ComputeOutcome {
        samples,
        profile,
        max_total,
        hydraulics: HydraulicsSummary {
            flow_area_m2: request.annulus.flow_area().value,
            hydraulic_diameter_m: request.annulus.hydraulic_diameter().value,
            velocity_mps: velocity,
            reynolds,
            gradient_pa_m: gradient,
        },
        advisories,
    })
}

/// Advisories for one operating point.
///
/// The velocity advisory only fires while circulating; a static annulus
/// has no transport requirement. The regime advisory needs a closure
/// that defines a Reynolds number.
pub(crate) fn collect_advisories(
    velocity_mps: f64,
    reynolds: Option<f64>,
    min_velocity_mps: f64,
) -> Vec<Advisory> {
    let mut advisories = Vec::new();
    if velocity_mps > 0.0 && velocity_mps < min_velocity_mps {
        advisories.push(Advisory::LowAnnularVelocity {
            velocity_mps,
            minimum_mps: min_velocity_mps,
        });
    }
    if let Some(re) = reynolds {
        if re > RE_LAMINAR_ADVISORY {
            advisories.push(Advisory::BeyondLaminarRange { reynolds: re });
        }
    }
    advisories
}

/// Profile outcome when gradients are supplied per segment instead of
/// derived from a single closure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PiecewiseOutcome {
    pub samples: PathSamples,
    pub profile: PressureProfile,
    pub max_total: MaxPressure,
}

/// Integrate a profile from externally supplied per-segment gradients.
///
/// Used when fluid batches with different rheology occupy different
/// hole sections, so no single closure describes the whole annulus.
pub fn compute_profile_piecewise(
    trajectory: &Trajectory,
    step_m: f64,
    density: Density,
    gradients: &SegmentGradients,
    options: ProfileOptions,
) -> ProfileResult<PiecewiseOutcome> {
    let rho = density.value;
    if !rho.is_finite() || rho <= 0.0 {
        return Err(ProfileError::NonPhysical {
            what: "mud density must be positive and finite",
        });
    }
    if gradients.len() != trajectory.segments().len() {
        return Err(ProfileError::LengthMismatch {
            what: "segment gradients vs trajectory segments",
            left: gradients.len(),
            right: trajectory.segments().len(),
        });
    }

    let samples = sample_path(trajectory, step_m)?;
    let friction = friction_profile_piecewise(&samples.md_m, &samples.segment, gradients)?;
    let hydrostatic = hydrostatic_profile(&samples.z_m, rho, options.gravity_mps2);
    let profile = PressureProfile::new(hydrostatic, friction)?;
    let max_total = MaxPressure::locate(&profile, &samples)?;

    Ok(PiecewiseOutcome {
        samples,
        profile,
        max_total,
    })
}
