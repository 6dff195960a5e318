use crate::constants::{AU_M, M_SUN, PI, SECONDS_PER_DAY, SECONDS_PER_YEAR};
use crate::units::dimension::Dimension;
use crate::units::errors::UnitError;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// A named scale factor to SI base units for a single dimension.
///
/// Unlabeled units are always the SI base of their dimension (scale 1),
/// which is what quantity arithmetic normalizes to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    label: Option<&'static str>,
    to_si: f64,
    dim: Dimension,
}

pub const METER: Unit = Unit::new("m", 1.0, Dimension::LENGTH);
pub const KILOMETER: Unit = Unit::new("km", 1.0e3, Dimension::LENGTH);
pub const AU: Unit = Unit::new("AU", AU_M, Dimension::LENGTH);
pub const SECOND: Unit = Unit::new("s", 1.0, Dimension::TIME);
pub const DAY: Unit = Unit::new("d", SECONDS_PER_DAY, Dimension::TIME);
pub const YEAR: Unit = Unit::new("yr", SECONDS_PER_YEAR, Dimension::TIME);
pub const KILOGRAM: Unit = Unit::new("kg", 1.0, Dimension::MASS);
pub const SOLAR_MASS: Unit = Unit::new("Msun", M_SUN, Dimension::MASS);
pub const RADIAN: Unit = Unit::new("rad", 1.0, Dimension::ANGLE);
pub const DEGREE: Unit = Unit::new("deg", PI / 180.0, Dimension::ANGLE);
pub const M_PER_S: Unit = Unit::new("m/s", 1.0, Dimension::SPEED);
pub const KM_PER_S: Unit = Unit::new("km/s", 1.0e3, Dimension::SPEED);
pub const DIMENSIONLESS: Unit = Unit::base(Dimension::NONE);

impl Unit {
    pub const fn new(label: &'static str, to_si: f64, dim: Dimension) -> Self {
        Unit {
            label: Some(label),
            to_si,
            dim,
        }
    }

    /// The unlabeled SI base unit of `dim`.
    pub const fn base(dim: Dimension) -> Self {
        Unit {
            label: None,
            to_si: 1.0,
            dim,
        }
    }

    pub const fn label(&self) -> Option<&'static str> {
        self.label
    }

    pub const fn to_si(&self) -> f64 {
        self.to_si
    }

    pub const fn dim(&self) -> Dimension {
        self.dim
    }
}

/// A scalar physical quantity: a value paired with its unit.
///
/// Arithmetic is dimension-checked. Multiplication and division combine
/// dimensions and normalize the result to SI base units; addition and
/// subtraction require matching dimensions and keep the left-hand unit.
#[derive(Debug, Clone, Copy)]
pub struct Quantity {
    value: f64,
    unit: Unit,
}

impl Quantity {
    pub const fn new(value: f64, unit: Unit) -> Self {
        Quantity { value, unit }
    }

    /// A quantity of dimension `dim` whose value is already in SI base units.
    pub const fn from_si(value: f64, dim: Dimension) -> Self {
        Quantity::new(value, Unit::base(dim))
    }

    pub const fn dimensionless(value: f64) -> Self {
        Quantity::new(value, DIMENSIONLESS)
    }

    /// The numeric value in this quantity's own unit.
    pub const fn value(&self) -> f64 {
        self.value
    }

    pub const fn unit(&self) -> Unit {
        self.unit
    }

    pub const fn dim(&self) -> Dimension {
        self.unit.dim
    }

    /// The value re-expressed in SI base units.
    pub fn si_value(&self) -> f64 {
        self.value * self.unit.to_si
    }

    pub fn is_dimensionless(&self) -> bool {
        self.dim().is_none()
    }

    /// Errors unless this quantity has the expected dimension.
    pub fn expect_dim(&self, expected: Dimension) -> Result<(), UnitError> {
        if self.dim() == expected {
            Ok(())
        } else {
            Err(UnitError::DimensionMismatch {
                expected,
                found: self.dim(),
            })
        }
    }

    /// Re-expresses this quantity in `unit`.
    pub fn to(&self, unit: Unit) -> Result<Quantity, UnitError> {
        self.expect_dim(unit.dim)?;
        Ok(self.convert_unchecked(unit))
    }

    /// The numeric value this quantity takes in `unit`.
    pub fn value_in(&self, unit: Unit) -> Result<f64, UnitError> {
        Ok(self.to(unit)?.value)
    }

    // Caller guarantees the dimensions match.
    pub(crate) fn convert_unchecked(&self, unit: Unit) -> Quantity {
        Quantity::new(self.si_value() / unit.to_si, unit)
    }

    /// Integer power, multiplying the dimension exponents by `n`.
    pub fn powi(&self, n: i8) -> Quantity {
        Quantity::from_si(self.si_value().powi(n as i32), self.dim().pow(n))
    }

    /// Square root.
    ///
    /// # Panics
    /// If any dimension exponent is odd.
    pub fn sqrt(&self) -> Quantity {
        let dim = self
            .dim()
            .root(2)
            .unwrap_or_else(|| panic!("square root of quantity with dimension [{}]", self.dim()));
        Quantity::from_si(self.si_value().sqrt(), dim)
    }

    /// Cube root.
    ///
    /// # Panics
    /// If any dimension exponent is not a multiple of three.
    pub fn cbrt(&self) -> Quantity {
        let dim = self
            .dim()
            .root(3)
            .unwrap_or_else(|| panic!("cube root of quantity with dimension [{}]", self.dim()));
        Quantity::from_si(self.si_value().cbrt(), dim)
    }
}

/// Equal when the dimensions match and the SI magnitudes are equal, so
/// `1 AU == 1.495978707e11 m`.
impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        self.dim() == other.dim() && self.si_value() == other.si_value()
    }
}

impl Add for Quantity {
    type Output = Quantity;

    /// # Panics
    /// If the dimensions differ.
    fn add(self, rhs: Quantity) -> Quantity {
        assert_eq!(
            self.dim(),
            rhs.dim(),
            "cannot add quantities of different dimensions"
        );
        Quantity::new(self.value + rhs.convert_unchecked(self.unit).value, self.unit)
    }
}

impl Sub for Quantity {
    type Output = Quantity;

    /// # Panics
    /// If the dimensions differ.
    fn sub(self, rhs: Quantity) -> Quantity {
        assert_eq!(
            self.dim(),
            rhs.dim(),
            "cannot subtract quantities of different dimensions"
        );
        Quantity::new(self.value - rhs.convert_unchecked(self.unit).value, self.unit)
    }
}

impl Mul for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: Quantity) -> Quantity {
        Quantity::from_si(self.si_value() * rhs.si_value(), self.dim() * rhs.dim())
    }
}

impl Div for Quantity {
    type Output = Quantity;

    fn div(self, rhs: Quantity) -> Quantity {
        Quantity::from_si(self.si_value() / rhs.si_value(), self.dim() / rhs.dim())
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: f64) -> Quantity {
        Quantity::new(self.value * rhs, self.unit)
    }
}

impl Mul<Quantity> for f64 {
    type Output = Quantity;

    fn mul(self, rhs: Quantity) -> Quantity {
        rhs * self
    }
}

impl Div<f64> for Quantity {
    type Output = Quantity;

    fn div(self, rhs: f64) -> Quantity {
        Quantity::new(self.value / rhs, self.unit)
    }
}

impl fmt::Display for Quantity {
    /// Value followed by the unit label, honoring formatter precision,
    /// e.g. `365.25 d`. Unlabeled units render their SI dimension symbols.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}", p, self.value)?,
            None => write!(f, "{}", self.value)?,
        }
        match self.unit.label {
            Some(label) => write!(f, " {}", label),
            None if !self.dim().is_none() => write!(f, " {}", self.dim()),
            None => Ok(()),
        }
    }
}
