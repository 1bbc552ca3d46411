// bf-core/src/units.rs

use uom::si::f64::{
    Acceleration as UomAcceleration, Angle as UomAngle, Area as UomArea,
    DynamicViscosity as UomDynamicViscosity, Length as UomLength, MassDensity as UomMassDensity,
    Pressure as UomPressure, Ratio as UomRatio, Velocity as UomVelocity,
    VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type Accel = UomAcceleration;
pub type Angle = UomAngle;
pub type Area = UomArea;
pub type Density = UomMassDensity;
pub type DynVisc = UomDynamicViscosity;
pub type Length = UomLength;
pub type Pressure = UomPressure;
pub type Ratio = UomRatio;
pub type Velocity = UomVelocity;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn rad(v: f64) -> Angle {
    use uom::si::angle::radian;
    Angle::new::<radian>(v)
}

#[inline]
pub fn deg(v: f64) -> Angle {
    use uom::si::angle::degree;
    Angle::new::<degree>(v)
}

#[inline]
pub fn kgpm3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn pas(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn m3ps(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_meter_per_second;
    VolumeRate::new::<cubic_meter_per_second>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

pub mod constants {
    use super::*;

    pub const G0_MPS2: f64 = 9.806_65;

    /// Minimum mean annular velocity for reliable cuttings transport (2.5 ft/s).
    pub const MIN_TRANSPORT_VELOCITY_MPS: f64 = 0.762;

    #[inline]
    pub fn g0() -> Accel {
        use uom::si::acceleration::meter_per_second_squared;
        Accel::new::<meter_per_second_squared>(G0_MPS2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _l = m(2.0);
        let _p = pa(101_325.0);
        let _rho = kgpm3(1_000.0);
        let _mu = pas(0.01);
        let _v = mps(0.5);
        let _q = m3ps(0.02);
        let _r = unitless(0.5);
        let _g0 = constants::g0();
    }

    #[test]
    fn degrees_convert_to_radians() {
        let a = deg(180.0);
        assert!((a.value - std::f64::consts::PI).abs() < 1e-12);
    }
}
