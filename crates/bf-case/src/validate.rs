//! Aggregate case validation.
//!
//! Validation walks the entire case and collects every violation before
//! failing, so one report shows everything that needs fixing instead of
//! the first problem found.

use crate::schema::{Case, FluidModelDef, SegmentDef};
use crate::{CaseError, CaseResult};

/// Validate a case, failing with the full list of violations.
pub fn validate_case(case: &Case) -> CaseResult<()> {
    let violations = case_violations(case);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(CaseError::InputValidationFailed { violations })
    }
}

/// Every violation in `case`, in schema order. Empty means valid.
pub fn case_violations(case: &Case) -> Vec<String> {
    let mut violations = Vec::new();
    check_trajectory(case, &mut violations);
    check_geometry(case, &mut violations);
    check_fluid(case, &mut violations);
    check_operation(case, &mut violations);
    violations
}

fn check_trajectory(case: &Case, violations: &mut Vec<String>) {
    let traj = &case.trajectory;
    if !traj.entry_inclination_deg.is_finite() {
        violations.push(format!(
            "trajectory: entry_inclination_deg must be finite (got {})",
            traj.entry_inclination_deg
        ));
    }
    if !traj.entry_elevation_m.is_finite() {
        violations.push(format!(
            "trajectory: entry_elevation_m must be finite (got {})",
            traj.entry_elevation_m
        ));
    }
    if traj.segments.is_empty() {
        violations.push("trajectory: at least one segment is required".to_string());
    }
    for (i, segment) in traj.segments.iter().enumerate() {
        let id = i + 1;
        match segment {
            SegmentDef::Tangent { length_m } => {
                if !length_m.is_finite() || *length_m <= 0.0 {
                    violations.push(format!(
                        "trajectory segment {id}: length_m must be positive and finite (got {length_m})"
                    ));
                }
            }
            SegmentDef::Arc {
                radius_m,
                deflection_deg,
            } => {
                if !radius_m.is_finite() || *radius_m <= 0.0 {
                    violations.push(format!(
                        "trajectory segment {id}: radius_m must be positive and finite (got {radius_m})"
                    ));
                }
                if !deflection_deg.is_finite() {
                    violations.push(format!(
                        "trajectory segment {id}: deflection_deg must be finite (got {deflection_deg})"
                    ));
                }
            }
        }
    }
}

fn check_geometry(case: &Case, violations: &mut Vec<String>) {
    let db = case.geometry.bore_diameter_m;
    let dp = case.geometry.pipe_diameter_m;
    let db_ok = db.is_finite() && db > 0.0;
    let dp_ok = dp.is_finite() && dp > 0.0;
    if !db_ok {
        violations.push(format!(
            "geometry: bore_diameter_m must be positive and finite (got {db})"
        ));
    }
    if !dp_ok {
        violations.push(format!(
            "geometry: pipe_diameter_m must be positive and finite (got {dp})"
        ));
    }
    if db_ok && dp_ok && db <= dp {
        violations.push(format!(
            "geometry: bore_diameter_m ({db}) must exceed pipe_diameter_m ({dp})"
        ));
    }
}

fn check_fluid(case: &Case, violations: &mut Vec<String>) {
    let rho = case.fluid.rho_kg_m3;
    if !rho.is_finite() || rho <= 0.0 {
        violations.push(format!(
            "fluid: rho_kg_m3 must be positive and finite (got {rho})"
        ));
    }
    match &case.fluid.model {
        FluidModelDef::Newtonian { mu_pa_s } => {
            if !mu_pa_s.is_finite() || *mu_pa_s <= 0.0 {
                violations.push(format!(
                    "fluid: mu_pa_s must be positive and finite (got {mu_pa_s})"
                ));
            }
        }
        FluidModelDef::Bingham {
            mu_p_pa_s,
            tau_y_pa,
        } => {
            if !mu_p_pa_s.is_finite() || *mu_p_pa_s <= 0.0 {
                violations.push(format!(
                    "fluid: mu_p_pa_s must be positive and finite (got {mu_p_pa_s})"
                ));
            }
            if !tau_y_pa.is_finite() || *tau_y_pa < 0.0 {
                violations.push(format!(
                    "fluid: tau_y_pa must be non-negative and finite (got {tau_y_pa})"
                ));
            }
        }
        FluidModelDef::PowerLaw { k_pa_sn, n } => {
            if !k_pa_sn.is_finite() || *k_pa_sn <= 0.0 {
                violations.push(format!(
                    "fluid: k_pa_sn must be positive and finite (got {k_pa_sn})"
                ));
            }
            if !n.is_finite() || *n <= 0.0 {
                violations.push(format!(
                    "fluid: n must be positive and finite (got {n})"
                ));
            }
        }
    }
}

fn check_operation(case: &Case, violations: &mut Vec<String>) {
    let op = &case.operation;
    if !op.q_m3_s.is_finite() || op.q_m3_s < 0.0 {
        violations.push(format!(
            "operation: q_m3_s must be non-negative and finite (got {})",
            op.q_m3_s
        ));
    }
    if !op.step_m.is_finite() || op.step_m <= 0.0 {
        violations.push(format!(
            "operation: step_m must be positive and finite (got {})",
            op.step_m
        ));
    }
    if !op.min_velocity_mps.is_finite() || op.min_velocity_mps < 0.0 {
        violations.push(format!(
            "operation: min_velocity_mps must be non-negative and finite (got {})",
            op.min_velocity_mps
        ));
    }
}
