use crate::elements::kepler::ElementName;
use crate::units::UnitError;
use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum ElementsError {
    /// A required element was not supplied to a builder.
    MissingElement(&'static str),
    /// A two-body system needs both component masses.
    MissingMasses,
    /// Neither the period nor the semi-major axis was supplied, so the
    /// orbit's scale cannot be resolved.
    UnderdeterminedOrbit,
    NonPositivePeriod,
    NonPositiveSemiMajorAxis,
    /// Eccentricity outside [0, 1); the offending value.
    InvalidEccentricity(f64),
    /// Inclination outside [0°, 180°]; the offending value in degrees.
    InvalidInclination(f64),
    /// The variant does not expose this element name.
    NotAnElement(ElementName),
    /// `get_component` selector other than "1" or "2".
    InvalidComponent(String),
    Unit(UnitError),
}

impl fmt::Display for ElementsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementsError::MissingElement(name) => write!(f, "you must specify `{}`", name),
            ElementsError::MissingMasses => {
                write!(f, "you must specify both masses `m1` and `m2`")
            }
            ElementsError::UnderdeterminedOrbit => {
                write!(f, "you must specify at least one of `P` and `a`")
            }
            ElementsError::NonPositivePeriod => write!(f, "period `P` must be positive"),
            ElementsError::NonPositiveSemiMajorAxis => {
                write!(f, "semi-major axis `a` must be positive")
            }
            ElementsError::InvalidEccentricity(e) => {
                write!(f, "eccentricity `e` must be: 0 <= e < 1, you passed in e={}", e)
            }
            ElementsError::InvalidInclination(deg) => write!(
                f,
                "inclination `i` must be between 0 deg and 180 deg, you passed in i={:.3} deg",
                deg
            ),
            ElementsError::NotAnElement(name) => {
                write!(f, "`{}` is not an element of this variant", name)
            }
            ElementsError::InvalidComponent(selector) => {
                write!(f, "invalid component '{}' - must be '1' or '2'", selector)
            }
            ElementsError::Unit(e) => write!(f, "unit error: {}", e),
        }
    }
}

impl Error for ElementsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ElementsError::Unit(e) => Some(e),
            _ => None,
        }
    }
}

impl From<UnitError> for ElementsError {
    fn from(err: UnitError) -> Self {
        ElementsError::Unit(err)
    }
}
