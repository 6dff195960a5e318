pub mod angle;
pub mod dimension;
pub mod errors;
pub mod quantity;
pub mod system;

pub use angle::Angle;
pub use dimension::Dimension;
pub use errors::UnitError;
pub use quantity::{Quantity, Unit};
pub use quantity::{
    AU, DAY, DEGREE, DIMENSIONLESS, KILOGRAM, KILOMETER, KM_PER_S, METER, M_PER_S, RADIAN, SECOND,
    SOLAR_MASS, YEAR,
};
pub use system::UnitSystem;
