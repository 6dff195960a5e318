use crate::units::dimension::Dimension;
use crate::units::errors::UnitError;
use crate::units::quantity::{Quantity, Unit, AU, DAY, DEGREE, KM_PER_S, SOLAR_MASS};

/// An ordered choice of units, one per base kind plus an explicit speed
/// unit, used to re-express derived quantities consistently.
///
/// The speed unit is carried separately so that velocities come out in
/// e.g. km/s instead of the awkward AU/day that would follow from the
/// base units alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitSystem {
    length: Unit,
    time: Unit,
    mass: Unit,
    angle: Unit,
    speed: Unit,
}

impl UnitSystem {
    /// (AU, day, Msun, degree, km/s) — the conventional system for binary
    /// star work.
    pub const DEFAULT: UnitSystem = UnitSystem {
        length: AU,
        time: DAY,
        mass: SOLAR_MASS,
        angle: DEGREE,
        speed: KM_PER_S,
    };

    /// # Panics
    /// If any unit does not carry the dimension of its slot. A unit system
    /// built from the wrong units is a programming error, not a runtime
    /// condition.
    pub fn new(length: Unit, time: Unit, mass: Unit, angle: Unit, speed: Unit) -> Self {
        assert_eq!(length.dim(), Dimension::LENGTH, "not a length unit");
        assert_eq!(time.dim(), Dimension::TIME, "not a time unit");
        assert_eq!(mass.dim(), Dimension::MASS, "not a mass unit");
        assert_eq!(angle.dim(), Dimension::ANGLE, "not an angle unit");
        assert_eq!(speed.dim(), Dimension::SPEED, "not a speed unit");
        UnitSystem {
            length,
            time,
            mass,
            angle,
            speed,
        }
    }

    pub const fn length(&self) -> Unit {
        self.length
    }

    pub const fn time(&self) -> Unit {
        self.time
    }

    pub const fn mass(&self) -> Unit {
        self.mass
    }

    pub const fn angle(&self) -> Unit {
        self.angle
    }

    pub const fn speed(&self) -> Unit {
        self.speed
    }

    /// Re-expresses `quantity` in this system's units.
    ///
    /// Pure length, time, mass, angle and speed quantities map onto the
    /// system's unit for that kind; dimensionless quantities pass through
    /// unchanged; any other compound dimension falls back to SI base units.
    pub fn decompose(&self, quantity: Quantity) -> Quantity {
        let dim = quantity.dim();
        if dim.is_none() {
            return quantity;
        }
        let target = if dim == Dimension::LENGTH {
            self.length
        } else if dim == Dimension::TIME {
            self.time
        } else if dim == Dimension::MASS {
            self.mass
        } else if dim == Dimension::ANGLE {
            self.angle
        } else if dim == Dimension::SPEED {
            self.speed
        } else {
            Unit::base(dim)
        };
        quantity.convert_unchecked(target)
    }
}

impl Default for UnitSystem {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Builds a system from a plain list of units, picking each slot by
/// dimension. Errors if any of the five kinds is absent.
impl TryFrom<&[Unit]> for UnitSystem {
    type Error = UnitError;

    fn try_from(units: &[Unit]) -> Result<Self, UnitError> {
        let find = |dim: Dimension, kind: &'static str| {
            units
                .iter()
                .copied()
                .find(|u| u.dim() == dim)
                .ok_or(UnitError::MissingUnit(kind))
        };
        Ok(UnitSystem {
            length: find(Dimension::LENGTH, "length")?,
            time: find(Dimension::TIME, "time")?,
            mass: find(Dimension::MASS, "mass")?,
            angle: find(Dimension::ANGLE, "angle")?,
            speed: find(Dimension::SPEED, "speed")?,
        })
    }
}
