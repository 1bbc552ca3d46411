//! Concentric annulus geometry.

use bf_core::units::{Area, Length, Velocity, VolumeRate};

use crate::error::{RheoResult, RheologyError};

/// Concentric annulus between a borehole wall and a pipe running inside it.
///
/// Validated at construction: both diameters positive and finite, and the
/// borehole strictly larger than the pipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Annulus {
    bore_diameter: Length,
    pipe_diameter: Length,
}

impl Annulus {
    /// Create an annulus from borehole and pipe outer diameters.
    pub fn new(bore_diameter: Length, pipe_diameter: Length) -> RheoResult<Self> {
        let db = bore_diameter.value;
        let dp = pipe_diameter.value;
        if !db.is_finite() || db <= 0.0 {
            return Err(RheologyError::InvalidGeometry {
                what: "borehole diameter must be positive and finite",
            });
        }
        if !dp.is_finite() || dp <= 0.0 {
            return Err(RheologyError::InvalidGeometry {
                what: "pipe outer diameter must be positive and finite",
            });
        }
        if db <= dp {
            return Err(RheologyError::InvalidGeometry {
                what: "borehole diameter must exceed pipe outer diameter",
            });
        }
        Ok(Self {
            bore_diameter,
            pipe_diameter,
        })
    }

    pub fn bore_diameter(&self) -> Length {
        self.bore_diameter
    }

    pub fn pipe_diameter(&self) -> Length {
        self.pipe_diameter
    }

    /// Open flow area, A = π/4 · (Db² − Dp²).
    pub fn flow_area(&self) -> Area {
        let db = self.bore_diameter;
        let dp = self.pipe_diameter;
        std::f64::consts::FRAC_PI_4 * (db * db - dp * dp)
    }

    /// Hydraulic diameter for a concentric annulus, Dh = Db − Dp.
    pub fn hydraulic_diameter(&self) -> Length {
        self.bore_diameter - self.pipe_diameter
    }

    /// Mean velocity of a volumetric flow through the annulus.
    pub fn mean_velocity(&self, q: VolumeRate) -> Velocity {
        q / self.flow_area()
    }
}
