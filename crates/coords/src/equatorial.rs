//! Equatorial (RA/Dec) coordinates and their Cartesian projection.

use atlas_core::angle;
use atlas_core::units::{degrees_to_hours, hours_to_degrees};
use serde::{Deserialize, Serialize};

use crate::cartesian::CartesianPosition;
use crate::galactic::{self, GalacticCoordinate};

/// Direction on the celestial sphere. Right ascension is stored in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialCoordinate {
    pub right_ascension_deg: f64,
    pub declination_deg: f64,
}

impl EquatorialCoordinate {
    #[inline]
    pub const fn from_degrees(right_ascension_deg: f64, declination_deg: f64) -> Self {
        Self {
            right_ascension_deg,
            declination_deg,
        }
    }

    /// Build from right ascension in hours (1 h = 15°).
    #[inline]
    pub fn from_hours(right_ascension_hours: f64, declination_deg: f64) -> Self {
        Self::from_degrees(hours_to_degrees(right_ascension_hours), declination_deg)
    }

    #[inline]
    pub fn right_ascension_hours(&self) -> f64 {
        degrees_to_hours(self.right_ascension_deg)
    }

    /// Cartesian position at `distance` along this direction (x toward RA 0, z toward the
    /// north celestial pole). The result has the same unit as `distance`.
    #[inline]
    pub fn to_cartesian(&self, distance: f64) -> CartesianPosition {
        angle::spherical_to_cartesian(self.right_ascension_deg, self.declination_deg, distance)
            .into()
    }

    #[inline]
    pub fn to_galactic(&self) -> GalacticCoordinate {
        galactic::to_galactic(self.right_ascension_deg, self.declination_deg)
    }
}

/// Project right ascension (hours) and declination (degrees) onto a sphere of radius
/// `distance`.
///
/// Right ascension is not range-checked; it is cyclic. Non-finite inputs propagate.
pub fn to_cartesian_from_equatorial(
    right_ascension_hours: f64,
    declination_deg: f64,
    distance: f64,
) -> CartesianPosition {
    EquatorialCoordinate::from_hours(right_ascension_hours, declination_deg).to_cartesian(distance)
}

/// Unit-sphere form of [`to_cartesian_from_equatorial`].
pub fn unit_vector_from_equatorial(
    right_ascension_hours: f64,
    declination_deg: f64,
) -> CartesianPosition {
    to_cartesian_from_equatorial(right_ascension_hours, declination_deg, 1.0)
}
