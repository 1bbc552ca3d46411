//! Power-law (Ostwald-de Waele) closure.

use crate::annulus::Annulus;
use crate::error::{RheoResult, RheologyError};
use crate::model::RheologyModel;

/// Shear-thinning or shear-thickening fluid, τ = k·(du/dr)ⁿ.
///
/// The consistency index `k` carries units of Pa·sⁿ, which no fixed
/// unit type can express, so both parameters are plain floats.
///
/// Annular gradient: 4·k·(8 + 4/n)ⁿ · vⁿ / Dh^(n+1). With n = 1 and
/// k = μ this collapses to the laminar Newtonian form 48·μ·v / Dh².
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLawFluid {
    k_pa_sn: f64,
    n: f64,
}

impl PowerLawFluid {
    pub fn new(k_pa_sn: f64, n: f64) -> RheoResult<Self> {
        if !k_pa_sn.is_finite() || k_pa_sn <= 0.0 {
            return Err(RheologyError::NonPhysical {
                what: "consistency index must be positive and finite",
            });
        }
        if !n.is_finite() || n <= 0.0 {
            return Err(RheologyError::NonPhysical {
                what: "flow behavior index must be positive and finite",
            });
        }
        Ok(Self { k_pa_sn, n })
    }

    pub fn consistency_index(&self) -> f64 {
        self.k_pa_sn
    }

    pub fn flow_behavior_index(&self) -> f64 {
        self.n
    }

    /// Shape coefficient (8 + 4/n)ⁿ for annular slot flow.
    fn shape_factor(&self) -> f64 {
        (8.0 + 4.0 / self.n).powf(self.n)
    }
}

impl RheologyModel for PowerLawFluid {
    fn name(&self) -> &'static str {
        "power-law"
    }

    fn gradient_from_velocity(&self, velocity_mps: f64, annulus: &Annulus) -> RheoResult<f64> {
        if !velocity_mps.is_finite() || velocity_mps < 0.0 {
            return Err(RheologyError::NonPhysical {
                what: "velocity must be non-negative and finite",
            });
        }
        let dh = annulus.hydraulic_diameter().value;
        Ok(4.0 * self.k_pa_sn * self.shape_factor() * velocity_mps.powf(self.n)
            / dh.powf(self.n + 1.0))
    }

    fn flow_from_gradient(&self, gradient_pa_m: f64, annulus: &Annulus) -> RheoResult<f64> {
        if !gradient_pa_m.is_finite() || gradient_pa_m < 0.0 {
            return Err(RheologyError::NonPhysical {
                what: "target gradient must be non-negative and finite",
            });
        }
        if gradient_pa_m == 0.0 {
            return Ok(0.0);
        }
        let dh = annulus.hydraulic_diameter().value;
        let v = (gradient_pa_m / (4.0 * self.k_pa_sn)).powf(1.0 / self.n)
            * dh.powf((self.n + 1.0) / self.n)
            / (8.0 + 4.0 / self.n);
        Ok(v * annulus.flow_area().value)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use bf_core::units::m;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn round_trip_over_parameter_space(
            q in 1e-5f64..0.5,
            k in 1e-3f64..5.0,
            n in 0.2f64..1.8,
        ) {
            let ann = Annulus::new(m(0.3), m(0.1)).unwrap();
            let fluid = PowerLawFluid::new(k, n).unwrap();
            let grad = fluid.gradient_from_flow(q, &ann).unwrap();
            let q_back = fluid.flow_from_gradient(grad, &ann).unwrap();
            prop_assert!((q_back - q).abs() < 1e-8 * q);
        }

        #[test]
        fn gradient_is_monotone_in_flow(
            q in 1e-5f64..0.4,
            n in 0.2f64..1.8,
        ) {
            let ann = Annulus::new(m(0.3), m(0.1)).unwrap();
            let fluid = PowerLawFluid::new(0.3, n).unwrap();
            let g1 = fluid.gradient_from_flow(q, &ann).unwrap();
            let g2 = fluid.gradient_from_flow(q * 1.5, &ann).unwrap();
            prop_assert!(g2 > g1);
        }
    }
}
