use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Div, Mul};

/// Physical dimension of a quantity, as integer exponents over the base
/// kinds length, time, mass and angle.
///
/// Angle is carried as an explicit base kind even though it is physically
/// dimensionless, so that angular quantities can be re-expressed in the
/// angle unit of a [`crate::units::UnitSystem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
    pub length: i8,
    pub time: i8,
    pub mass: i8,
    pub angle: i8,
}

impl Dimension {
    pub const NONE: Dimension = Dimension::new(0, 0, 0, 0);
    pub const LENGTH: Dimension = Dimension::new(1, 0, 0, 0);
    pub const TIME: Dimension = Dimension::new(0, 1, 0, 0);
    pub const MASS: Dimension = Dimension::new(0, 0, 1, 0);
    pub const ANGLE: Dimension = Dimension::new(0, 0, 0, 1);
    pub const SPEED: Dimension = Dimension::new(1, -1, 0, 0);
    /// Dimension of the gravitational constant, m³ kg⁻¹ s⁻².
    pub const GRAVITATION: Dimension = Dimension::new(3, -2, -1, 0);

    pub const fn new(length: i8, time: i8, mass: i8, angle: i8) -> Self {
        Dimension {
            length,
            time,
            mass,
            angle,
        }
    }

    pub const fn is_none(&self) -> bool {
        self.length == 0 && self.time == 0 && self.mass == 0 && self.angle == 0
    }

    /// Exponents multiplied by `n`, the dimension of a quantity raised to
    /// the `n`-th power.
    pub const fn pow(self, n: i8) -> Self {
        Dimension::new(
            self.length * n,
            self.time * n,
            self.mass * n,
            self.angle * n,
        )
    }

    /// Exponents divided by `n`. Returns `None` if any exponent is not a
    /// multiple of `n` (the root would not have integer dimension).
    pub const fn root(self, n: i8) -> Option<Self> {
        if self.length % n != 0 || self.time % n != 0 || self.mass % n != 0 || self.angle % n != 0
        {
            return None;
        }
        Some(Dimension::new(
            self.length / n,
            self.time / n,
            self.mass / n,
            self.angle / n,
        ))
    }
}

impl Mul for Dimension {
    type Output = Dimension;

    fn mul(self, rhs: Dimension) -> Dimension {
        Dimension::new(
            self.length + rhs.length,
            self.time + rhs.time,
            self.mass + rhs.mass,
            self.angle + rhs.angle,
        )
    }
}

impl Div for Dimension {
    type Output = Dimension;

    fn div(self, rhs: Dimension) -> Dimension {
        Dimension::new(
            self.length - rhs.length,
            self.time - rhs.time,
            self.mass - rhs.mass,
            self.angle - rhs.angle,
        )
    }
}

impl fmt::Display for Dimension {
    /// Renders in SI base symbols, e.g. `m^3 kg^-1 s^-2`. Dimensionless
    /// renders as an empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (symbol, exp) in [
            ("m", self.length),
            ("kg", self.mass),
            ("s", self.time),
            ("rad", self.angle),
        ] {
            if exp == 0 {
                continue;
            }
            if !first {
                write!(f, " ")?;
            }
            if exp == 1 {
                write!(f, "{}", symbol)?;
            } else {
                write!(f, "{}^{}", symbol, exp)?;
            }
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_exponents() {
        assert_eq!(Dimension::LENGTH / Dimension::TIME, Dimension::SPEED);
        assert_eq!(Dimension::SPEED * Dimension::TIME, Dimension::LENGTH);
        assert_eq!(Dimension::LENGTH / Dimension::LENGTH, Dimension::NONE);
        assert_eq!(
            Dimension::LENGTH.pow(3) / (Dimension::MASS * Dimension::TIME.pow(2)),
            Dimension::GRAVITATION
        );
    }

    #[test]
    fn integer_roots() {
        assert_eq!(Dimension::TIME.pow(2).root(2), Some(Dimension::TIME));
        assert_eq!(Dimension::LENGTH.pow(3).root(3), Some(Dimension::LENGTH));
        assert_eq!(Dimension::SPEED.root(2), None);
    }

    #[test]
    fn display_si_symbols() {
        assert_eq!(Dimension::GRAVITATION.to_string(), "m^3 kg^-1 s^-2");
        assert_eq!(Dimension::SPEED.to_string(), "m s^-1");
        assert_eq!(Dimension::NONE.to_string(), "");
    }
}
