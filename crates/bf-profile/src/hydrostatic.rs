//! Hydrostatic pressure along the sampled path.

/// Hydrostatic head relative to the entry sample, ρ·g·(z₀ − zᵢ).
///
/// The first sample is the datum, so the profile starts at exactly zero
/// and grows positive as the path descends below the entry elevation.
/// Empty input yields an empty profile.
pub fn hydrostatic_profile(z_m: &[f64], rho_kg_m3: f64, gravity_mps2: f64) -> Vec<f64> {
    let Some(&z_ref) = z_m.first() else {
        return Vec::new();
    };
    z_m.iter()
        .map(|zi| rho_kg_m3 * gravity_mps2 * (z_ref - zi))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bf_core::units::constants::G0_MPS2;

    #[test]
    fn entry_sample_is_the_datum() {
        let z = [50.0, 40.0, 30.0];
        let ps = hydrostatic_profile(&z, 1000.0, G0_MPS2);
        assert_eq!(ps[0], 0.0);
    }

    #[test]
    fn descending_path_gains_pressure() {
        let z = [0.0, -10.0, -20.0];
        let ps = hydrostatic_profile(&z, 1000.0, G0_MPS2);
        assert!((ps[1] - 1000.0 * G0_MPS2 * 10.0).abs() < 1e-9);
        assert!((ps[2] - 1000.0 * G0_MPS2 * 20.0).abs() < 1e-9);
        assert!(ps.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn climbing_above_entry_goes_negative() {
        let z = [0.0, 5.0];
        let ps = hydrostatic_profile(&z, 1000.0, G0_MPS2);
        assert!(ps[1] < 0.0);
    }

    #[test]
    fn custom_gravity_scales_linearly() {
        let z = [0.0, -100.0];
        let earth = hydrostatic_profile(&z, 1200.0, G0_MPS2);
        let moon = hydrostatic_profile(&z, 1200.0, G0_MPS2 / 6.0);
        assert!((earth[1] / moon[1] - 6.0).abs() < 1e-12);
    }

    #[test]
    fn empty_input_yields_empty_profile() {
        assert!(hydrostatic_profile(&[], 1000.0, G0_MPS2).is_empty());
    }
}
