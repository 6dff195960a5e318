pub mod errors;
pub mod kepler;
pub mod two_body;

pub use errors::ElementsError;
pub use kepler::{
    epoch_from_mjd, j2000, ElementName, KeplerElements, KeplerElementsBuilder, OrbitalElements,
};
pub use two_body::{TwoBodyKeplerElements, TwoBodyKeplerElementsBuilder};
