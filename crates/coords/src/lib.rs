//! Coordinate conversions for catalog objects.
//!
//! Every function here is pure: inputs are plain angles and distances, outputs are value
//! types, and the only shared data are the constant tables in `atlas_core::constants`.
//! Angles are degrees throughout except for [`to_cartesian_from_equatorial`], which is the
//! single entry point taking right ascension in hours.

pub mod batch;
pub mod cartesian;
pub mod equatorial;
pub mod galactic;
pub mod sun;

pub use cartesian::CartesianPosition;
pub use equatorial::{
    EquatorialCoordinate, to_cartesian_from_equatorial, unit_vector_from_equatorial,
};
pub use galactic::{GalacticCoordinate, to_cartesian_from_galactic, to_equatorial, to_galactic};
pub use sun::{
    galactocentric_position, heliocentric_to_galactocentric_axes, sun_galactic_position,
};
