//! Compilation of validated cases into runtime types.

use bf_core::units::{Density, VolumeRate, deg, kgpm3, m, m3ps, pa, pas};
use bf_path::{Segment, Trajectory};
use bf_profile::{ComputeRequest, ProfileOptions};
use bf_rheology::{Annulus, BinghamFluid, NewtonianFluid, PowerLawFluid, RheologyModel};

use crate::schema::{Case, FluidModelDef, SegmentDef};
use crate::validate::validate_case;
use crate::{CaseError, CaseResult};

/// Runtime representation of a compiled case.
pub struct CompiledCase {
    pub name: String,
    pub trajectory: Trajectory,
    pub annulus: Annulus,
    pub fluid: Box<dyn RheologyModel>,
    pub density: Density,
    pub flow_rate: VolumeRate,
    pub step_m: f64,
    pub options: ProfileOptions,
}

impl std::fmt::Debug for CompiledCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // `dyn RheologyModel` is not `Debug`; show its closure name instead.
        f.debug_struct("CompiledCase")
            .field("name", &self.name)
            .field("trajectory", &self.trajectory)
            .field("annulus", &self.annulus)
            .field("fluid", &self.fluid.name())
            .field("density", &self.density)
            .field("flow_rate", &self.flow_rate)
            .field("step_m", &self.step_m)
            .field("options", &self.options)
            .finish()
    }
}

impl CompiledCase {
    /// Borrow the compiled pieces as a compute request.
    pub fn request(&self) -> ComputeRequest<'_> {
        ComputeRequest {
            trajectory: &self.trajectory,
            annulus: self.annulus,
            fluid: self.fluid.as_ref(),
            density: self.density,
            flow_rate: self.flow_rate,
            step_m: self.step_m,
            options: self.options,
        }
    }
}

/// Compile a case definition into runtime structures.
///
/// Validation runs first so construction only ever sees well-formed
/// values; a constructor rejection after that still surfaces as a
/// compile error rather than a panic.
pub fn compile_case(case: &Case) -> CaseResult<CompiledCase> {
    validate_case(case)?;

    let mut segments = Vec::with_capacity(case.trajectory.segments.len());
    for (i, def) in case.trajectory.segments.iter().enumerate() {
        let segment = match def {
            SegmentDef::Tangent { length_m } => Segment::tangent(m(*length_m)),
            SegmentDef::Arc {
                radius_m,
                deflection_deg,
            } => Segment::arc(m(*radius_m), deg(*deflection_deg)),
        }
        .map_err(|e| CaseError::Compile(format!("segment {}: {}", i + 1, e)))?;
        segments.push(segment);
    }
    let trajectory = Trajectory::new(
        segments,
        deg(case.trajectory.entry_inclination_deg),
        m(case.trajectory.entry_elevation_m),
    )
    .map_err(|e| CaseError::Compile(format!("trajectory: {e}")))?;

    let annulus = Annulus::new(
        m(case.geometry.bore_diameter_m),
        m(case.geometry.pipe_diameter_m),
    )
    .map_err(|e| CaseError::Compile(format!("geometry: {e}")))?;

    let density = kgpm3(case.fluid.rho_kg_m3);
    let fluid: Box<dyn RheologyModel> = match &case.fluid.model {
        FluidModelDef::Newtonian { mu_pa_s } => Box::new(
            NewtonianFluid::new(density, pas(*mu_pa_s))
                .map_err(|e| CaseError::Compile(format!("fluid: {e}")))?,
        ),
        FluidModelDef::Bingham {
            mu_p_pa_s,
            tau_y_pa,
        } => Box::new(
            BinghamFluid::new(pas(*mu_p_pa_s), pa(*tau_y_pa))
                .map_err(|e| CaseError::Compile(format!("fluid: {e}")))?,
        ),
        FluidModelDef::PowerLaw { k_pa_sn, n } => Box::new(
            PowerLawFluid::new(*k_pa_sn, *n)
                .map_err(|e| CaseError::Compile(format!("fluid: {e}")))?,
        ),
    };

    Ok(CompiledCase {
        name: case.name.clone(),
        trajectory,
        annulus,
        fluid,
        density,
        flow_rate: m3ps(case.operation.q_m3_s),
        step_m: case.operation.step_m,
        options: ProfileOptions {
            min_velocity_mps: case.operation.min_velocity_mps,
            ..ProfileOptions::default()
        },
    })
}
