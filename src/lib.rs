//! Orbital elements for Keplerian two-body (binary star) systems.
//!
//! The crate turns a physically meaningful parameterization of a binary
//! orbit (period, semi-major axis, eccentricity, orientation angles,
//! masses, reference epoch) into a validated, immutable element object,
//! and derives secondary quantities from it: velocity semi-amplitude,
//! binary mass function and per-component orbital elements.
//!
//! ```
//! use twobody::units::{Angle, Quantity, AU, SOLAR_MASS};
//! use twobody::TwoBodyKeplerElements;
//!
//! let binary = TwoBodyKeplerElements::builder()
//!     .primary_mass(Quantity::new(1.0, SOLAR_MASS))
//!     .secondary_mass(Quantity::new(2.0, SOLAR_MASS))
//!     .semi_major_axis(Quantity::new(1.5, AU))
//!     .eccentricity(0.5)
//!     .arg_pericenter(Angle::from_degrees(67.0))
//!     .inclination(Angle::from_degrees(21.0))
//!     .ascending_node(Angle::from_degrees(33.0))
//!     .build()
//!     .unwrap();
//!
//! // Period resolved through Kepler's third law, reported in days
//! assert!(binary.period().value() > 387.0);
//! // The primary's orbit about the barycenter
//! assert!((binary.primary().semi_major_axis().value() - 1.0).abs() < 1e-9);
//! ```

pub mod constants;
pub mod elements;
pub mod physics;
pub mod units;

pub use elements::{
    epoch_from_mjd, j2000, ElementName, ElementsError, KeplerElements, KeplerElementsBuilder,
    OrbitalElements, TwoBodyKeplerElements, TwoBodyKeplerElementsBuilder,
};
pub use units::{Angle, Dimension, Quantity, Unit, UnitError, UnitSystem};
