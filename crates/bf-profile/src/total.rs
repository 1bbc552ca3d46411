//! Combined pressure profile and summary statistics.

use serde::{Deserialize, Serialize};

use bf_path::PathSamples;

use crate::error::{ProfileError, ProfileResult};

/// Hydrostatic, frictional, and total pressure at every path sample.
///
/// All three sequences are index-aligned with the samples they were
/// integrated over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureProfile {
    pub hydrostatic_pa: Vec<f64>,
    pub friction_pa: Vec<f64>,
    pub total_pa: Vec<f64>,
}

impl PressureProfile {
    /// Combine aligned hydrostatic and friction profiles.
    pub fn new(hydrostatic_pa: Vec<f64>, friction_pa: Vec<f64>) -> ProfileResult<Self> {
        if hydrostatic_pa.len() != friction_pa.len() {
            return Err(ProfileError::LengthMismatch {
                what: "hydrostatic vs friction profiles",
                left: hydrostatic_pa.len(),
                right: friction_pa.len(),
            });
        }
        let total_pa = hydrostatic_pa
            .iter()
            .zip(&friction_pa)
            .map(|(ps, pf)| ps + pf)
            .collect();
        Ok(Self {
            hydrostatic_pa,
            friction_pa,
            total_pa,
        })
    }

    pub fn len(&self) -> usize {
        self.total_pa.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_pa.is_empty()
    }

    /// Index and value of the maximum total pressure. Ties resolve to
    /// the first occurrence.
    pub fn argmax_total(&self) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &p) in self.total_pa.iter().enumerate() {
            let better = match best {
                None => true,
                Some((_, bp)) => p > bp,
            };
            if better {
                best = Some((i, p));
            }
        }
        best
    }
}

/// Location and magnitude of the governing (maximum) total pressure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaxPressure {
    pub index: usize,
    pub md_m: f64,
    pub z_m: f64,
    pub total_pa: f64,
}

impl MaxPressure {
    /// Locate the profile maximum on its path samples.
    pub fn locate(profile: &PressureProfile, samples: &PathSamples) -> ProfileResult<Self> {
        if profile.len() != samples.len() {
            return Err(ProfileError::LengthMismatch {
                what: "pressure profile vs path samples",
                left: profile.len(),
                right: samples.len(),
            });
        }
        let (index, total_pa) = profile.argmax_total().ok_or(ProfileError::NonPhysical {
            what: "profile must contain at least one sample",
        })?;
        Ok(Self {
            index,
            md_m: samples.md_m[index],
            z_m: samples.z_m[index],
            total_pa,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples_for(md: Vec<f64>) -> PathSamples {
        let n = md.len();
        PathSamples {
            md_m: md,
            z_m: vec![0.0; n],
            theta_rad: vec![0.0; n],
            segment: vec![0; n],
        }
    }

    #[test]
    fn totals_are_element_wise_sums() {
        let profile = PressureProfile::new(vec![0.0, 10.0, 20.0], vec![0.0, 1.0, 2.0]).unwrap();
        assert_eq!(profile.total_pa, vec![0.0, 11.0, 22.0]);
    }

    #[test]
    fn mismatched_inputs_are_rejected() {
        let err = PressureProfile::new(vec![0.0, 10.0], vec![0.0]).unwrap_err();
        assert!(matches!(err, ProfileError::LengthMismatch { .. }));
    }

    #[test]
    fn argmax_takes_first_of_ties() {
        let profile = PressureProfile::new(vec![0.0, 5.0, 5.0, 1.0], vec![0.0; 4]).unwrap();
        assert_eq!(profile.argmax_total(), Some((1, 5.0)));
    }

    #[test]
    fn locate_reports_position_on_path() {
        let profile = PressureProfile::new(vec![0.0, 3.0, 9.0], vec![0.0, 1.0, 1.0]).unwrap();
        let samples = samples_for(vec![0.0, 1.0, 2.0]);
        let max = MaxPressure::locate(&profile, &samples).unwrap();
        assert_eq!(max.index, 2);
        assert_eq!(max.md_m, 2.0);
        assert_eq!(max.total_pa, 10.0);
    }

    #[test]
    fn locate_rejects_misaligned_samples() {
        let profile = PressureProfile::new(vec![0.0, 3.0], vec![0.0, 1.0]).unwrap();
        let samples = samples_for(vec![0.0, 1.0, 2.0]);
        assert!(MaxPressure::locate(&profile, &samples).is_err());
    }
}
