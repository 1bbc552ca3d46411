//! Reynolds number and Darcy friction factor for annular flow.
//!
//! The friction factor uses 64/Re below the laminar bound and the
//! smooth-pipe Blasius correlation above the turbulent bound. Between
//! the two the factor is a linear blend of the boundary values, which
//! keeps the correlation continuous through the transition band.

use bf_core::numeric::ensure_positive;

use crate::error::{RheoResult, RheologyError};

/// Upper Reynolds bound of the laminar regime.
pub const RE_LAMINAR_MAX: f64 = 2100.0;

/// Lower Reynolds bound of the fully turbulent (Blasius) regime.
pub const RE_TURBULENT_MIN: f64 = 3000.0;

/// Reynolds number above which laminar-flow assumptions get flagged.
pub const RE_LAMINAR_ADVISORY: f64 = 2000.0;

pub(crate) const BLASIUS_COEFF: f64 = 0.3164;

/// Reynolds number from dynamic viscosity, Re = ρ·v·Dh / μ.
pub fn reynolds_number(
    rho_kg_m3: f64,
    velocity_mps: f64,
    dh_m: f64,
    mu_pa_s: f64,
) -> RheoResult<f64> {
    check_positive(rho_kg_m3, "density")?;
    check_positive(dh_m, "hydraulic diameter")?;
    check_positive(mu_pa_s, "dynamic viscosity")?;
    check_positive(velocity_mps, "velocity")?;
    Ok(rho_kg_m3 * velocity_mps * dh_m / mu_pa_s)
}

/// Reynolds number from kinematic viscosity, Re = v·Dh / ν.
pub fn reynolds_number_kinematic(velocity_mps: f64, dh_m: f64, nu_m2_s: f64) -> RheoResult<f64> {
    check_positive(dh_m, "hydraulic diameter")?;
    check_positive(nu_m2_s, "kinematic viscosity")?;
    check_positive(velocity_mps, "velocity")?;
    Ok(velocity_mps * dh_m / nu_m2_s)
}

/// Darcy friction factor with a blended transitional band.
pub fn friction_factor(re: f64) -> RheoResult<f64> {
    if !re.is_finite() || re <= 0.0 {
        return Err(RheologyError::InvalidReynolds { value: re });
    }
    if re <= RE_LAMINAR_MAX {
        return Ok(64.0 / re);
    }
    if re >= RE_TURBULENT_MIN {
        return Ok(BLASIUS_COEFF * re.powf(-0.25));
    }
    let f_lam = 64.0 / RE_LAMINAR_MAX;
    let f_turb = BLASIUS_COEFF * RE_TURBULENT_MIN.powf(-0.25);
    let w = (re - RE_LAMINAR_MAX) / (RE_TURBULENT_MIN - RE_LAMINAR_MAX);
    Ok((1.0 - w) * f_lam + w * f_turb)
}

fn check_positive(v: f64, what: &'static str) -> RheoResult<()> {
    ensure_positive(v, what).map_err(|_| RheologyError::NonPhysical { what })?;
    Ok(())
}
