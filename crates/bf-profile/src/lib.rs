//! Annular pressure profile computation.
//!
//! This crate glues trajectory sampling to rheology closures: it walks a
//! sampled borehole path, accumulates hydrostatic head from the elevation
//! profile and frictional losses from a closure (or from externally
//! supplied per-segment gradients), and reports the profile together with
//! its maximum and any operating advisories. Flow-rate sweeps evaluate
//! many operating points against one sampled path.

pub mod compute;
pub mod error;
pub mod friction;
pub mod hydrostatic;
pub mod sweep;
pub mod total;

pub use compute::{
    ComputeOutcome, ComputeRequest, HydraulicsSummary, PiecewiseOutcome, ProfileOptions,
    compute_profile, compute_profile_piecewise,
};
pub use error::{ProfileError, ProfileResult};
pub use friction::friction_profile_piecewise;
pub use hydrostatic::hydrostatic_profile;
pub use sweep::{FlowSweepResult, SweepPoint, sweep_flow_rates};
pub use total::{MaxPressure, PressureProfile};
