//! Trajectory segments and validated trajectory assembly.
//!
//! A trajectory is a 2-D profile in the vertical plane: a sequence of
//! straight (tangent) and circular-arc sections traversed in order from
//! the entry point. Inclination is measured from horizontal, positive
//! upward, so a descending hole carries a negative inclination.

use bf_core::units::{Angle, Length};

use crate::error::{PathError, PathResult};

/// A single trajectory section in the vertical plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// Straight section at constant inclination.
    Tangent { length: Length },

    /// Circular build/drop section. `deflection` is the signed change in
    /// inclination over the section; positive builds angle upward.
    Arc { radius: Length, deflection: Angle },
}

impl Segment {
    /// Create a tangent section of the given along-hole length.
    pub fn tangent(length: Length) -> PathResult<Self> {
        let l = length.value;
        if !l.is_finite() || l <= 0.0 {
            return Err(PathError::InvalidLength { value: l });
        }
        Ok(Segment::Tangent { length })
    }

    /// Create an arc section from curvature radius and signed deflection.
    ///
    /// A zero deflection is allowed and produces a zero-length section.
    pub fn arc(radius: Length, deflection: Angle) -> PathResult<Self> {
        let r = radius.value;
        if !r.is_finite() || r <= 0.0 {
            return Err(PathError::InvalidRadius { value: r });
        }
        let d = deflection.value;
        if !d.is_finite() {
            return Err(PathError::NonFinite {
                what: "arc deflection",
                value: d,
            });
        }
        Ok(Segment::Arc { radius, deflection })
    }

    /// Along-hole length of the section in meters.
    ///
    /// For an arc this is `|radius * deflection|`.
    pub fn length_m(&self) -> f64 {
        match self {
            Segment::Tangent { length } => length.value,
            Segment::Arc { radius, deflection } => (radius.value * deflection.value).abs(),
        }
    }

    /// Signed inclination change across the section in radians.
    pub fn deflection_rad(&self) -> f64 {
        match self {
            Segment::Tangent { .. } => 0.0,
            Segment::Arc { deflection, .. } => deflection.value,
        }
    }
}

/// An ordered sequence of segments plus the entry state.
///
/// Construction validates the entry state; segments are validated by
/// their own constructors, so a `Trajectory` is well-formed by the time
/// it exists.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    segments: Vec<Segment>,
    entry_inclination: Angle,
    entry_elevation: Length,
}

impl Trajectory {
    /// Assemble a trajectory from validated segments and an entry state.
    pub fn new(
        segments: Vec<Segment>,
        entry_inclination: Angle,
        entry_elevation: Length,
    ) -> PathResult<Self> {
        if !entry_inclination.value.is_finite() {
            return Err(PathError::NonFinite {
                what: "entry inclination",
                value: entry_inclination.value,
            });
        }
        if !entry_elevation.value.is_finite() {
            return Err(PathError::NonFinite {
                what: "entry elevation",
                value: entry_elevation.value,
            });
        }
        Ok(Self {
            segments,
            entry_inclination,
            entry_elevation,
        })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn entry_inclination(&self) -> Angle {
        self.entry_inclination
    }

    pub fn entry_elevation(&self) -> Length {
        self.entry_elevation
    }

    /// Total along-hole length in meters.
    pub fn total_length_m(&self) -> f64 {
        self.segments.iter().map(Segment::length_m).sum()
    }

    /// Final inclination after traversing every section, in radians.
    pub fn exit_inclination_rad(&self) -> f64 {
        self.entry_inclination.value + self.segments.iter().map(Segment::deflection_rad).sum::<f64>()
    }
}
