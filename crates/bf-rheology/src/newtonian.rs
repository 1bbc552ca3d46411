//! Newtonian closure with laminar/turbulent regime handling.

use bf_core::units::{Density, DynVisc};

use crate::annulus::Annulus;
use crate::error::{RheoResult, RheologyError};
use crate::model::RheologyModel;
use crate::reynolds::{BLASIUS_COEFF, RE_LAMINAR_MAX, RE_TURBULENT_MIN, friction_factor};

/// Constant-viscosity drilling fluid.
///
/// In the laminar regime the gradient uses the analytic slot-flow form
/// 32·μ·v / Dh²; past the laminar bound it switches to the Darcy form
/// f·ρ·v² / (2·Dh) with the blended friction factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonianFluid {
    rho: Density,
    mu: DynVisc,
}

impl NewtonianFluid {
    pub fn new(rho: Density, mu: DynVisc) -> RheoResult<Self> {
        if !rho.value.is_finite() || rho.value <= 0.0 {
            return Err(RheologyError::NonPhysical {
                what: "fluid density must be positive and finite",
            });
        }
        if !mu.value.is_finite() || mu.value <= 0.0 {
            return Err(RheologyError::NonPhysical {
                what: "dynamic viscosity must be positive and finite",
            });
        }
        Ok(Self { rho, mu })
    }

    pub fn density(&self) -> Density {
        self.rho
    }

    pub fn viscosity(&self) -> DynVisc {
        self.mu
    }

    /// Mean velocity at a given Reynolds number in this fluid.
    fn velocity_at_reynolds(&self, re: f64, dh: f64) -> f64 {
        re * self.mu.value / (self.rho.value * dh)
    }
}

impl RheologyModel for NewtonianFluid {
    fn name(&self) -> &'static str {
        "newtonian"
    }

    fn gradient_from_velocity(&self, velocity_mps: f64, annulus: &Annulus) -> RheoResult<f64> {
        if !velocity_mps.is_finite() || velocity_mps < 0.0 {
            return Err(RheologyError::NonPhysical {
                what: "velocity must be non-negative and finite",
            });
        }
        if velocity_mps == 0.0 {
            // No flow, no friction; skips the Reynolds computation entirely.
            return Ok(0.0);
        }

        let dh = annulus.hydraulic_diameter().value;
        let re = self.rho.value * velocity_mps * dh / self.mu.value;
        if re <= RE_LAMINAR_MAX {
            Ok(32.0 * self.mu.value * velocity_mps / (dh * dh))
        } else {
            let f = friction_factor(re)?;
            Ok(f * self.rho.value * velocity_mps * velocity_mps / (2.0 * dh))
        }
    }

    fn flow_from_gradient(&self, gradient_pa_m: f64, annulus: &Annulus) -> RheoResult<f64> {
        const MAX_ITER: usize = 60;
        const TOL_REL: f64 = 1e-12;

        if !gradient_pa_m.is_finite() || gradient_pa_m < 0.0 {
            return Err(RheologyError::NonPhysical {
                what: "target gradient must be non-negative and finite",
            });
        }
        if gradient_pa_m == 0.0 {
            return Ok(0.0);
        }

        let dh = annulus.hydraulic_diameter().value;
        let area = annulus.flow_area().value;
        let rho = self.rho.value;
        let mu = self.mu.value;

        // Laminar closed form: grad = 32 μ v / Dh².
        let v_lam = gradient_pa_m * dh * dh / (32.0 * mu);
        let v_lam_max = self.velocity_at_reynolds(RE_LAMINAR_MAX, dh);
        if v_lam <= v_lam_max {
            return Ok(v_lam * area);
        }

        // Blasius closed form: grad = (C/2) ρ^¾ μ^¼ Dh^-5/4 v^7/4.
        let v_turb = (gradient_pa_m * 2.0 * dh.powf(1.25)
            / (BLASIUS_COEFF * rho.powf(0.75) * mu.powf(0.25)))
        .powf(1.0 / 1.75);
        let v_turb_min = self.velocity_at_reynolds(RE_TURBULENT_MIN, dh);
        if v_turb >= v_turb_min {
            return Ok(v_turb * area);
        }

        // Transitional band: the forward map is continuous and strictly
        // increasing in v, so bisect between the regime bound velocities.
        let mut lo = v_lam_max;
        let mut hi = v_turb_min;
        for _ in 0..MAX_ITER {
            let mid = 0.5 * (lo + hi);
            let g_mid = self.gradient_from_velocity(mid, annulus)?;
            if (g_mid - gradient_pa_m).abs() <= TOL_REL * gradient_pa_m {
                return Ok(mid * area);
            }
            if g_mid < gradient_pa_m {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        // Interval is tiny by now; return the best estimate.
        Ok(0.5 * (lo + hi) * area)
    }

    fn reynolds(&self, velocity_mps: f64, annulus: &Annulus) -> Option<f64> {
        let dh = annulus.hydraulic_diameter().value;
        Some(self.rho.value * velocity_mps * dh / self.mu.value)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use bf_core::units::{kgpm3, m, pas};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn round_trip_across_regimes(
            q in 1e-5f64..0.5,
            rho in 800.0f64..2000.0,
            mu in 1e-3f64..0.5,
        ) {
            let ann = Annulus::new(m(0.3), m(0.1)).unwrap();
            let fluid = NewtonianFluid::new(kgpm3(rho), pas(mu)).unwrap();
            let grad = fluid.gradient_from_flow(q, &ann).unwrap();
            let q_back = fluid.flow_from_gradient(grad, &ann).unwrap();
            prop_assert!((q_back - q).abs() < 1e-6 * q);
        }

        #[test]
        fn gradient_is_monotone_in_flow(
            q in 1e-5f64..0.4,
            dq in 1e-6f64..0.1,
        ) {
            let ann = Annulus::new(m(0.3), m(0.1)).unwrap();
            let fluid = NewtonianFluid::new(kgpm3(1000.0), pas(0.01)).unwrap();
            let g1 = fluid.gradient_from_flow(q, &ann).unwrap();
            let g2 = fluid.gradient_from_flow(q + dq, &ann).unwrap();
            prop_assert!(g2 > g1);
        }
    }
}
