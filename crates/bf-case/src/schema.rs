//! Case file schema definitions.
//!
//! A case is the on-disk description of one annular flow problem:
//! trajectory, annulus geometry, fluid, and operating point. Fields are
//! plain f64 with unit-suffixed names; compilation into typed quantities
//! happens in [`crate::compile`].

use serde::{Deserialize, Serialize};

use bf_core::units::constants::MIN_TRANSPORT_VELOCITY_MPS;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Case {
    pub name: String,
    pub trajectory: TrajectoryDef,
    pub geometry: GeometryDef,
    pub fluid: FluidDef,
    pub operation: OperationDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrajectoryDef {
    /// Inclination at the entry point, degrees from horizontal
    /// (negative = downward).
    #[serde(default)]
    pub entry_inclination_deg: f64,
    /// Elevation datum of the entry point.
    #[serde(default)]
    pub entry_elevation_m: f64,
    pub segments: Vec<SegmentDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum SegmentDef {
    Tangent {
        length_m: f64,
    },
    Arc {
        radius_m: f64,
        /// Signed inclination change over the arc, degrees
        /// (positive = build-up).
        deflection_deg: f64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeometryDef {
    pub bore_diameter_m: f64,
    pub pipe_diameter_m: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FluidDef {
    /// Mud density driving the hydrostatic head.
    pub rho_kg_m3: f64,
    pub model: FluidModelDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum FluidModelDef {
    Newtonian {
        mu_pa_s: f64,
    },
    Bingham {
        mu_p_pa_s: f64,
        tau_y_pa: f64,
    },
    PowerLaw {
        /// Consistency index, Pa·s^n.
        k_pa_sn: f64,
        /// Flow behavior index (n = 1 recovers a Newtonian slope).
        n: f64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OperationDef {
    pub q_m3_s: f64,
    #[serde(default = "default_step_m")]
    pub step_m: f64,
    #[serde(default = "default_min_velocity_mps")]
    pub min_velocity_mps: f64,
}

fn default_step_m() -> f64 {
    1.0
}

fn default_min_velocity_mps() -> f64 {
    MIN_TRANSPORT_VELOCITY_MPS
}
