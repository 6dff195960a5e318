use crate::units::errors::UnitError;
use crate::units::quantity::{Quantity, DEGREE};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A plane angle.
///
/// Degrees are the base representation, so degree-valued input survives
/// wrapping and bounds checks without binary round-off.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Angle(f64); // Base unit: degrees

impl Angle {
    pub const ZERO: Angle = Angle(0.0);
    pub const HALF_TURN: Angle = Angle(180.0);

    pub const fn from_degrees(degrees: f64) -> Self {
        Angle(degrees)
    }

    pub fn from_radians(radians: f64) -> Self {
        Angle(radians.to_degrees())
    }

    pub const fn to_degrees(&self) -> f64 {
        self.0
    }

    pub fn to_radians(&self) -> f64 {
        self.0.to_radians()
    }

    /// The same direction wrapped into [0°, 360°), so 370° becomes 10°
    /// and -10° becomes 350°.
    pub fn wrapped_360(&self) -> Angle {
        Angle(self.0.rem_euclid(360.0))
    }

    pub fn sin(&self) -> f64 {
        self.to_radians().sin()
    }

    pub fn cos(&self) -> f64 {
        self.to_radians().cos()
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

impl From<Angle> for Quantity {
    fn from(angle: Angle) -> Quantity {
        Quantity::new(angle.to_degrees(), DEGREE)
    }
}

/// Errors unless the quantity carries the angle dimension.
impl TryFrom<Quantity> for Angle {
    type Error = UnitError;

    fn try_from(quantity: Quantity) -> Result<Angle, UnitError> {
        Ok(Angle(quantity.value_in(DEGREE)?))
    }
}
