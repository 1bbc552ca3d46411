//! Piecewise frictional pressure accumulation.
//!
//! The uniform-gradient running sum lives with the rheology closures
//! ([`bf_rheology::cumulative_friction`]); this module handles the
//! per-segment case where each trajectory segment carries its own
//! gradient, e.g. when fluid batches with different rheology occupy
//! different hole sections.

use bf_rheology::SegmentGradients;

use crate::error::{ProfileError, ProfileResult};

/// Cumulative friction where each interval is charged at the gradient of
/// the segment owning its *destination* sample.
///
/// Interval `i → i+1` therefore uses `gradients` for `segment[i+1]`, so
/// the step that crosses a segment boundary is charged entirely to the
/// segment being entered. Fewer than two samples yield all zeros.
pub fn friction_profile_piecewise(
    md_m: &[f64],
    segment: &[usize],
    gradients: &SegmentGradients,
) -> ProfileResult<Vec<f64>> {
    if md_m.len() != segment.len() {
        return Err(ProfileError::LengthMismatch {
            what: "measured depth vs segment ids",
            left: md_m.len(),
            right: segment.len(),
        });
    }
    if md_m.len() < 2 {
        return Ok(vec![0.0; md_m.len()]);
    }

    let mut out = Vec::with_capacity(md_m.len());
    out.push(0.0);
    let mut acc = 0.0;
    for i in 1..md_m.len() {
        let dmd = md_m[i] - md_m[i - 1];
        if dmd < 0.0 {
            return Err(ProfileError::NonMonotonicPath { at_m: md_m[i - 1] });
        }
        let grad = gradients
            .for_segment(segment[i])
            .ok_or(ProfileError::UnknownSegment {
                segment: segment[i],
                index: i,
            })?;
        acc += grad * dmd;
        out.push(acc);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charges_interval_to_destination_segment() {
        // Two segments of 1 m each at different gradients: the boundary
        // interval (sample 1 -> 2) belongs to segment 2.
        let md = [0.0, 1.0, 2.0];
        let seg = [0, 1, 2];
        let grads = SegmentGradients::per_segment(vec![10.0, 100.0], 2).unwrap();
        let pf = friction_profile_piecewise(&md, &seg, &grads).unwrap();
        assert_eq!(pf, vec![0.0, 10.0, 110.0]);
    }

    #[test]
    fn uniform_gradients_match_simple_running_sum() {
        let md = [0.0, 0.5, 1.5, 3.0];
        let seg = [0, 1, 1, 2];
        let grads = SegmentGradients::uniform(8.0, 2).unwrap();
        let pf = friction_profile_piecewise(&md, &seg, &grads).unwrap();
        let expected = bf_rheology::cumulative_friction(&md, 8.0).unwrap();
        assert_eq!(pf, expected);
    }

    #[test]
    fn zero_length_interval_adds_nothing() {
        let md = [0.0, 1.0, 1.0, 2.0];
        let seg = [0, 1, 2, 2];
        let grads = SegmentGradients::per_segment(vec![10.0, 100.0], 2).unwrap();
        let pf = friction_profile_piecewise(&md, &seg, &grads).unwrap();
        assert_eq!(pf, vec![0.0, 10.0, 10.0, 110.0]);
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let grads = SegmentGradients::uniform(8.0, 1).unwrap();
        let err = friction_profile_piecewise(&[0.0, 1.0], &[0], &grads).unwrap_err();
        assert!(matches!(err, ProfileError::LengthMismatch { .. }));
    }

    #[test]
    fn decreasing_md_is_rejected() {
        let grads = SegmentGradients::uniform(8.0, 1).unwrap();
        let err = friction_profile_piecewise(&[0.0, 2.0, 1.0], &[0, 1, 1], &grads).unwrap_err();
        assert!(matches!(err, ProfileError::NonMonotonicPath { .. }));
    }

    #[test]
    fn unknown_segment_id_is_rejected() {
        let grads = SegmentGradients::uniform(8.0, 1).unwrap();
        let err = friction_profile_piecewise(&[0.0, 1.0], &[0, 5], &grads).unwrap_err();
        assert!(matches!(
            err,
            ProfileError::UnknownSegment {
                segment: 5,
                index: 1
            }
        ));
    }

    #[test]
    fn short_inputs_yield_zeros() {
        let grads = SegmentGradients::uniform(8.0, 0).unwrap();
        assert!(
            friction_profile_piecewise(&[], &[], &grads)
                .unwrap()
                .is_empty()
        );
        assert_eq!(
            friction_profile_piecewise(&[0.0], &[0], &grads).unwrap(),
            vec![0.0]
        );
    }
}
