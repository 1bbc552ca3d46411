//! Tolerant flow-rate sweeps over a fixed well.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use bf_core::Advisory;
use bf_path::{PathSamples, sample_path};
use bf_rheology::{cumulative_friction, mean_velocity};

use crate::compute::{ComputeRequest, collect_advisories};
use crate::error::{ProfileError, ProfileResult};
use crate::hydrostatic::hydrostatic_profile;
use crate::total::{MaxPressure, PressureProfile};

/// Operating-point summary for one flow rate in a sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub flow_rate_m3_s: f64,
    pub velocity_mps: f64,
    pub reynolds: Option<f64>,
    pub gradient_pa_m: f64,
    pub max_total: MaxPressure,
    pub advisories: Vec<Advisory>,
}

/// Results of a flow-rate sweep.
///
/// One slot per requested flow rate, in request order. A point that
/// fails to evaluate is recorded as `None` and counted, without
/// aborting the rest of the sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowSweepResult {
    pub points: Vec<Option<SweepPoint>>,
    pub num_successful: usize,
    pub num_failed: usize,
}

impl FlowSweepResult {
    /// Iterate over the points that evaluated successfully.
    pub fn successful(&self) -> impl Iterator<Item = &SweepPoint> {
        self.points.iter().filter_map(|p| p.as_ref())
    }

    /// Sweep point with the largest maximum total pressure, if any
    /// point succeeded.
    pub fn worst_case(&self) -> Option<&SweepPoint> {
        self.successful()
            .max_by(|a, b| a.max_total.total_pa.total_cmp(&b.max_total.total_pa))
    }
}

/// Evaluate the profile maximum at each flow rate in `flow_rates_m3_s`.
///
/// The trajectory is sampled once and the hydrostatic component is
/// shared across points; only the frictional part varies with flow.
/// Points evaluate in parallel and independently, so one bad flow rate
/// (negative, non-finite) costs a `None` slot, not the whole sweep.
pub fn sweep_flow_rates(
    request: &ComputeRequest<'_>,
    flow_rates_m3_s: &[f64],
) -> ProfileResult<FlowSweepResult> {
    let rho = request.density.value;
    if !rho.is_finite() || rho <= 0.0 {
        return Err(ProfileError::NonPhysical {
            what: "mud density must be positive and finite",
        });
    }

    let samples = sample_path(request.trajectory, request.step_m)?;
    let hydrostatic = hydrostatic_profile(&samples.z_m, rho, request.options.gravity_mps2);

    let points: Vec<Option<SweepPoint>> = flow_rates_m3_s
        .par_iter()
        .map(|&q| evaluate_point(request, &samples, &hydrostatic, q).ok())
        .collect();

    let num_successful = points.iter().filter(|p| p.is_some()).count();
    let num_failed = points.len() - num_successful;

    tracing::debug!(
        requested = points.len(),
        num_successful,
        num_failed,
        "flow-rate sweep finished"
    );

    Ok(FlowSweepResult {
        points,
        num_successful,
        num_failed,
    })
}

fn evaluate_point(
    request: &ComputeRequest<'_>,
    samples: &PathSamples,
    hydrostatic: &[f64],
    q_m3s: f64,
) -> ProfileResult<SweepPoint> {
    let velocity = mean_velocity(q_m3s, &request.annulus)?;
    let gradient = request.fluid.gradient_from_flow(q_m3s, &request.annulus)?;
    let reynolds = request.fluid.reynolds(velocity, &request.annulus);

    let friction = cumulative_friction(&samples.md_m, gradient)?;
    let profile = PressureProfile::new(hydrostatic.to_vec(), friction)?;
    let max_total = MaxPressure::locate(&profile, samples)?;

    Ok(SweepPoint {
        flow_rate_m3_s: q_m3s,
        velocity_mps: velocity,
        reynolds,
        gradient_pa_m: gradient,
        max_total,
        advisories: collect_advisories(velocity, reynolds, request.options.min_velocity_mps),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::{ProfileOptions, compute_profile};
    use bf_core::units::{deg, kgpm3, m, m3ps, pas};
    use bf_path::{Segment, Trajectory};
    use bf_rheology::{Annulus, NewtonianFluid};

    fn request_over<'a>(
        traj: &'a Trajectory,
        fluid: &'a NewtonianFluid,
    ) -> ComputeRequest<'a> {
        ComputeRequest {
            trajectory: traj,
            annulus: Annulus::new(m(0.3), m(0.1)).unwrap(),
            fluid,
            density: kgpm3(1000.0),
            flow_rate: m3ps(0.02),
            step_m: 1.0,
            options: ProfileOptions::default(),
        }
    }

    #[test]
    fn sweep_preserves_order_and_counts_failures() {
        let traj = Trajectory::new(
            vec![Segment::tangent(m(50.0)).unwrap()],
            deg(-20.0),
            m(0.0),
        )
        .unwrap();
        let fluid = NewtonianFluid::new(kgpm3(1000.0), pas(0.01)).unwrap();
        let request = request_over(&traj, &fluid);

        let rates = [0.01, -1.0, 0.02, f64::NAN, 0.04];
        let result = sweep_flow_rates(&request, &rates).unwrap();

        assert_eq!(result.points.len(), 5);
        assert_eq!(result.num_successful, 3);
        assert_eq!(result.num_failed, 2);
        assert!(result.points[1].is_none());
        assert!(result.points[3].is_none());
        for (slot, &q) in result.points.iter().zip(&rates) {
            if let Some(point) = slot {
                assert_eq!(point.flow_rate_m3_s, q);
            }
        }
    }

    #[test]
    fn max_total_grows_with_flow_rate() {
        let traj = Trajectory::new(
            vec![Segment::tangent(m(200.0)).unwrap()],
            deg(0.0),
            m(0.0),
        )
        .unwrap();
        let fluid = NewtonianFluid::new(kgpm3(1000.0), pas(0.05)).unwrap();
        let request = request_over(&traj, &fluid);

        let rates = [0.005, 0.01, 0.02, 0.04];
        let result = sweep_flow_rates(&request, &rates).unwrap();
        let maxima: Vec<f64> = result
            .successful()
            .map(|p| p.max_total.total_pa)
            .collect();
        assert_eq!(maxima.len(), 4);
        for pair in maxima.windows(2) {
            assert!(pair[1] > pair[0], "friction must grow with flow");
        }
        let worst = result.worst_case().unwrap();
        assert_eq!(worst.flow_rate_m3_s, 0.04);
    }

    #[test]
    fn sweep_point_matches_single_computation() {
        let traj = Trajectory::new(
            vec![
                Segment::tangent(m(80.0)).unwrap(),
                Segment::arc(m(200.0), deg(-45.0)).unwrap(),
                Segment::tangent(m(120.0)).unwrap(),
            ],
            deg(0.0),
            m(0.0),
        )
        .unwrap();
        let fluid = NewtonianFluid::new(kgpm3(1100.0), pas(0.02)).unwrap();
        let request = request_over(&traj, &fluid);

        let result = sweep_flow_rates(&request, &[0.02]).unwrap();
        let point = result.points[0].as_ref().unwrap();
        let single = compute_profile(&request).unwrap();

        assert_eq!(point.max_total, single.max_total);
        assert_eq!(point.gradient_pa_m, single.hydraulics.gradient_pa_m);
        assert_eq!(point.advisories, single.advisories);
    }

    #[test]
    fn empty_rate_list_is_an_empty_sweep() {
        let traj = Trajectory::new(
            vec![Segment::tangent(m(10.0)).unwrap()],
            deg(0.0),
            m(0.0),
        )
        .unwrap();
        let fluid = NewtonianFluid::new(kgpm3(1000.0), pas(0.01)).unwrap();
        let request = request_over(&traj, &fluid);

        let result = sweep_flow_rates(&request, &[]).unwrap();
        assert!(result.points.is_empty());
        assert_eq!(result.num_successful, 0);
        assert_eq!(result.num_failed, 0);
        assert!(result.worst_case().is_none());
    }
}
