//! bf-rheology: annulus hydraulics and rheology closures for boreflow.
//!
//! Provides:
//! - Concentric annulus geometry (flow area, hydraulic diameter)
//! - Reynolds number and blended Darcy friction factor
//! - RheologyModel trait with Newtonian, Bingham plastic, and power-law
//!   closures, each invertible from gradient back to flow rate
//! - Annular velocity checks for cuttings transport
//!
//! # Architecture
//!
//! The `RheologyModel` trait isolates profile integration from the
//! specific closure. Closures are constructed from validated parameters,
//! so every instance that exists can be evaluated without re-checking.
//!
//! # Example
//!
//! ```
//! use bf_core::units::{kgpm3, m, pas};
//! use bf_rheology::{Annulus, NewtonianFluid, RheologyModel};
//!
//! let annulus = Annulus::new(m(0.3), m(0.1)).unwrap();
//! let fluid = NewtonianFluid::new(kgpm3(1000.0), pas(0.01)).unwrap();
//!
//! let gradient = fluid.gradient_from_flow(0.02, &annulus).unwrap();
//! assert!(gradient > 0.0);
//! ```

pub mod annulus;
pub mod bingham;
pub mod error;
pub mod gradients;
pub mod model;
pub mod newtonian;
pub mod power_law;
pub mod reynolds;
pub mod velocity;

// Re-exports for ergonomics
pub use annulus::Annulus;
pub use bingham::BinghamFluid;
pub use error::{RheoResult, RheologyError};
pub use gradients::SegmentGradients;
pub use model::{RheologyModel, cumulative_friction, mean_velocity};
pub use newtonian::NewtonianFluid;
pub use power_law::PowerLawFluid;
pub use reynolds::{
    RE_LAMINAR_ADVISORY, RE_LAMINAR_MAX, RE_TURBULENT_MIN, friction_factor, reynolds_number,
    reynolds_number_kinematic,
};
pub use velocity::{annular_velocity, flow_for_target_velocity};
