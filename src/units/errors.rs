use crate::units::dimension::Dimension;
use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    DimensionMismatch { expected: Dimension, found: Dimension },
    MissingUnit(&'static str),
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitError::DimensionMismatch { expected, found } => write!(
                f,
                "dimension mismatch: expected [{}], found [{}]",
                expected, found
            ),
            UnitError::MissingUnit(kind) => {
                write!(f, "no {} unit in the given unit specifications", kind)
            }
        }
    }
}

impl Error for UnitError {}
