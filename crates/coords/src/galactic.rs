//! Galactic (l, b) coordinates and the rotation between the equatorial and galactic frames.
//!
//! The rotation is expressed with spherical trigonometry around the north galactic pole:
//!
//! ```text
//! sin b = sin δ sin δp + cos δ cos δp cos(α − αp)
//! l     = l_ncp − atan2(cos δ sin(α − αp), sin δ cos δp − cos δ sin δp cos(α − αp))
//! ```
//!
//! where `(αp, δp)` is the pole and `l_ncp` the galactic longitude of the north celestial
//! pole. At δ = ±90° both atan2 arguments vanish and the longitude is not meaningful.

use atlas_core::angle;
use atlas_core::constants::GALACTIC_POLE;
use serde::{Deserialize, Serialize};

use crate::cartesian::CartesianPosition;
use crate::equatorial::EquatorialCoordinate;

/// Direction in the galactic frame. Longitude is kept in `[0, 360)`, latitude in `[-90, 90]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GalacticCoordinate {
    pub longitude_deg: f64,
    pub latitude_deg: f64,
}

impl GalacticCoordinate {
    /// Construct from arbitrary degrees, wrapping the longitude.
    #[inline]
    pub fn new(longitude_deg: f64, latitude_deg: f64) -> Self {
        Self {
            longitude_deg: angle::wrap_degrees(longitude_deg),
            latitude_deg,
        }
    }

    /// Cartesian position at `distance_kpc`; see [`to_cartesian_from_galactic`].
    #[inline]
    pub fn to_cartesian(&self, distance_kpc: f64) -> CartesianPosition {
        to_cartesian_from_galactic(self.longitude_deg, self.latitude_deg, distance_kpc)
    }

    #[inline]
    pub fn to_equatorial(&self) -> EquatorialCoordinate {
        to_equatorial(self.longitude_deg, self.latitude_deg)
    }
}

/// Convert right ascension and declination (both degrees) to galactic coordinates.
pub fn to_galactic(right_ascension_deg: f64, declination_deg: f64) -> GalacticCoordinate {
    let ra = right_ascension_deg.to_radians();
    let dec = declination_deg.to_radians();
    let ra_pole = GALACTIC_POLE.ra_deg().to_radians();
    let (sin_dec_pole, cos_dec_pole) = GALACTIC_POLE.dec_deg().to_radians().sin_cos();

    let (sin_dec, cos_dec) = dec.sin_cos();
    let (sin_dra, cos_dra) = (ra - ra_pole).sin_cos();

    let sin_b = sin_dec * sin_dec_pole + cos_dec * cos_dec_pole * cos_dra;
    let b = sin_b.clamp(-1.0, 1.0).asin();

    let theta = (cos_dec * sin_dra).atan2(sin_dec * cos_dec_pole - cos_dec * sin_dec_pole * cos_dra);
    let l = GALACTIC_POLE.ncp_longitude_deg() - theta.to_degrees();

    GalacticCoordinate {
        longitude_deg: angle::wrap_degrees(l),
        latitude_deg: b.to_degrees(),
    }
}

/// Convert galactic longitude and latitude (degrees) back to the equatorial frame.
///
/// Right ascension in the result is wrapped into `[0, 360)`.
pub fn to_equatorial(longitude_deg: f64, latitude_deg: f64) -> EquatorialCoordinate {
    let b = latitude_deg.to_radians();
    let dl = (GALACTIC_POLE.ncp_longitude_deg() - longitude_deg).to_radians();
    let (sin_dec_pole, cos_dec_pole) = GALACTIC_POLE.dec_deg().to_radians().sin_cos();

    let (sin_b, cos_b) = b.sin_cos();
    let (sin_dl, cos_dl) = dl.sin_cos();

    let sin_dec = sin_b * sin_dec_pole + cos_b * cos_dec_pole * cos_dl;
    let dec = sin_dec.clamp(-1.0, 1.0).asin();

    let dra = (cos_b * sin_dl).atan2(sin_b * cos_dec_pole - cos_b * sin_dec_pole * cos_dl);
    let ra = GALACTIC_POLE.ra_deg() + dra.to_degrees();

    EquatorialCoordinate::from_degrees(angle::wrap_degrees(ra), dec.to_degrees())
}

/// Galactic direction and distance (kpc) to Cartesian: x toward the galactic centre,
/// y toward the direction of rotation, z toward the north galactic pole.
pub fn to_cartesian_from_galactic(
    longitude_deg: f64,
    latitude_deg: f64,
    distance_kpc: f64,
) -> CartesianPosition {
    angle::spherical_to_cartesian(longitude_deg, latitude_deg, distance_kpc).into()
}
