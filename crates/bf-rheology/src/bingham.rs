//! Bingham plastic closure.

use bf_core::numeric::{ensure_non_negative, ensure_positive};
use bf_core::units::{DynVisc, Pressure};

use crate::annulus::Annulus;
use crate::error::{RheoResult, RheologyError};
use crate::model::RheologyModel;

/// Yield-stress fluid with constant plastic viscosity.
///
/// Annular (slot-flow) gradient: 48·μp·v / Dh² + 6·τy / Dh. The yield
/// term persists at zero velocity, so a Bingham plastic reports a
/// non-zero gradient even at rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinghamFluid {
    mu_p: DynVisc,
    tau_y: Pressure,
}

impl BinghamFluid {
    pub fn new(mu_p: DynVisc, tau_y: Pressure) -> RheoResult<Self> {
        ensure_positive(mu_p.value, "plastic viscosity").map_err(|_| {
            RheologyError::NonPhysical {
                what: "plastic viscosity must be positive and finite",
            }
        })?;
        ensure_non_negative(tau_y.value, "yield stress").map_err(|_| {
            RheologyError::NonPhysical {
                what: "yield stress must be non-negative and finite",
            }
        })?;
        Ok(Self { mu_p, tau_y })
    }

    pub fn plastic_viscosity(&self) -> DynVisc {
        self.mu_p
    }

    pub fn yield_stress(&self) -> Pressure {
        self.tau_y
    }

    /// Gradient the yield stress alone sustains, 6·τy / Dh.
    pub fn yield_floor(&self, annulus: &Annulus) -> f64 {
        6.0 * self.tau_y.value / annulus.hydraulic_diameter().value
    }
}

impl RheologyModel for BinghamFluid {
    fn name(&self) -> &'static str {
        "bingham"
    }

    fn gradient_from_velocity(&self, velocity_mps: f64, annulus: &Annulus) -> RheoResult<f64> {
        if !velocity_mps.is_finite() || velocity_mps < 0.0 {
            return Err(RheologyError::NonPhysical {
                what: "velocity must be non-negative and finite",
            });
        }
        let dh = annulus.hydraulic_diameter().value;
        Ok(48.0 * self.mu_p.value * velocity_mps / (dh * dh) + 6.0 * self.tau_y.value / dh)
    }

    fn flow_from_gradient(&self, gradient_pa_m: f64, annulus: &Annulus) -> RheoResult<f64> {
        if !gradient_pa_m.is_finite() || gradient_pa_m < 0.0 {
            return Err(RheologyError::NonPhysical {
                what: "target gradient must be non-negative and finite",
            });
        }
        let floor = self.yield_floor(annulus);
        if gradient_pa_m < floor {
            return Err(RheologyError::Unattainable {
                what: "target gradient is below the Bingham yield floor",
            });
        }
        let dh = annulus.hydraulic_diameter().value;
        let v = (gradient_pa_m - floor) * dh * dh / (48.0 * self.mu_p.value);
        Ok(v * annulus.flow_area().value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bf_core::units::{m, pa, pas};

    fn annulus() -> Annulus {
        Annulus::new(m(0.3), m(0.1)).unwrap()
    }

    fn mud() -> BinghamFluid {
        BinghamFluid::new(pas(0.02), pa(5.0)).unwrap()
    }

    #[test]
    fn constructor_rejects_non_physical_inputs() {
        assert!(BinghamFluid::new(pas(0.0), pa(5.0)).is_err());
        assert!(BinghamFluid::new(pas(-0.02), pa(5.0)).is_err());
        assert!(BinghamFluid::new(pas(0.02), pa(-1.0)).is_err());
        // Zero yield stress degenerates to Newtonian-like behavior; allowed.
        assert!(BinghamFluid::new(pas(0.02), pa(0.0)).is_ok());
    }

    #[test]
    fn gradient_matches_analytic_form() {
        let fluid = mud();
        let ann = annulus();
        let v = 0.5;
        let dh = ann.hydraulic_diameter().value;
        let expected = 48.0 * 0.02 * v / (dh * dh) + 6.0 * 5.0 / dh;
        let grad = fluid.gradient_from_velocity(v, &ann).unwrap();
        assert!((grad - expected).abs() < 1e-12);
    }

    #[test]
    fn rest_gradient_is_the_yield_floor() {
        let fluid = mud();
        let ann = annulus();
        let grad = fluid.gradient_from_flow(0.0, &ann).unwrap();
        assert!((grad - fluid.yield_floor(&ann)).abs() < 1e-12);
        assert!(grad > 0.0);
    }

    #[test]
    fn flow_gradient_round_trip() {
        let fluid = mud();
        let ann = annulus();
        let q = 0.03;
        let grad = fluid.gradient_from_flow(q, &ann).unwrap();
        let q_back = fluid.flow_from_gradient(grad, &ann).unwrap();
        assert!((q_back - q).abs() < 1e-12 * q);
    }

    #[test]
    fn gradient_below_yield_floor_is_unattainable() {
        let fluid = mud();
        let ann = annulus();
        let floor = fluid.yield_floor(&ann);
        let err = fluid.flow_from_gradient(0.5 * floor, &ann).unwrap_err();
        assert!(matches!(err, RheologyError::Unattainable { .. }));
        // Exactly the floor corresponds to no flow.
        let q = fluid.flow_from_gradient(floor, &ann).unwrap();
        assert_eq!(q, 0.0);
    }

    #[test]
    fn reynolds_hook_is_undefined() {
        let fluid = mud();
        assert!(fluid.reynolds(0.5, &annulus()).is_none());
    }
}
