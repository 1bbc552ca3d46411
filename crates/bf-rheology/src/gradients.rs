//! Per-segment frictional gradients with scalar broadcast.

use crate::error::{RheoResult, RheologyError};

/// Frictional gradient for every trajectory segment, in segment order.
///
/// Accepts either one gradient broadcast across all segments or an
/// explicit per-segment list; both normalize to the same storage so
/// downstream integration has a single shape to deal with.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentGradients {
    per_segment: Vec<f64>,
}

impl SegmentGradients {
    /// Broadcast a single gradient to `segment_count` segments.
    pub fn uniform(gradient_pa_m: f64, segment_count: usize) -> RheoResult<Self> {
        if !gradient_pa_m.is_finite() {
            return Err(RheologyError::NonPhysical {
                what: "segment gradient must be finite",
            });
        }
        Ok(Self {
            per_segment: vec![gradient_pa_m; segment_count],
        })
    }

    /// Use an explicit gradient per segment, validated against the count.
    pub fn per_segment(gradients: Vec<f64>, segment_count: usize) -> RheoResult<Self> {
        if gradients.len() != segment_count {
            return Err(RheologyError::LengthMismatch {
                expected: segment_count,
                got: gradients.len(),
            });
        }
        if gradients.iter().any(|g| !g.is_finite()) {
            return Err(RheologyError::NonPhysical {
                what: "segment gradient must be finite",
            });
        }
        Ok(Self {
            per_segment: gradients,
        })
    }

    pub fn len(&self) -> usize {
        self.per_segment.len()
    }

    pub fn is_empty(&self) -> bool {
        self.per_segment.is_empty()
    }

    /// Gradient owned by 1-based segment id `id`, as carried by path
    /// samples. Id 0 (the entry sample) owns no gradient.
    pub fn for_segment(&self, id: usize) -> Option<f64> {
        if id == 0 {
            return None;
        }
        self.per_segment.get(id - 1).copied()
    }
}
