//! The Sun's place in the galactocentric frame.
//!
//! Galactocentric axes have the galactic centre at the origin and z toward the north
//! galactic pole, with the Sun on the +y axis. Heliocentric galactic vectors (x toward
//! l = 0) are turned about z so that their +x axis points from the Sun to the centre.

use atlas_core::constants::SUN_GALACTIC;
use atlas_core::units::pc_to_kpc;

use crate::cartesian::CartesianPosition;
use crate::galactic::{GalacticCoordinate, to_cartesian_from_galactic};

/// Position of the Sun in the galactocentric frame (kpc).
///
/// Always `(l = 90°, b = 0°, d = 8.3 kpc)` pushed through [`to_cartesian_from_galactic`].
pub fn sun_galactic_position() -> CartesianPosition {
    to_cartesian_from_galactic(
        SUN_GALACTIC.longitude_deg(),
        SUN_GALACTIC.latitude_deg(),
        SUN_GALACTIC.distance_kpc(),
    )
}

/// Rotate a heliocentric galactic vector into galactocentric axes.
///
/// The heliocentric +x axis must end up pointing opposite the Sun's position vector, so
/// the turn is by the Sun's longitude plus 180°. With the Sun at l = 90° this maps
/// `(x, y, z)` to `(y, -x, z)`.
pub fn heliocentric_to_galactocentric_axes(v: CartesianPosition) -> CartesianPosition {
    let (sin_t, cos_t) = (SUN_GALACTIC.longitude_deg() + 180.0)
        .to_radians()
        .sin_cos();
    CartesianPosition::new(v.x * cos_t - v.y * sin_t, v.x * sin_t + v.y * cos_t, v.z)
}

/// Galactocentric position (kpc) of an object seen from the Sun in direction `direction`
/// at `distance_pc` parsecs.
pub fn galactocentric_position(direction: GalacticCoordinate, distance_pc: f64) -> CartesianPosition {
    heliocentric_to_galactocentric_axes(direction.to_cartesian(pc_to_kpc(distance_pc)))
        .offset_by(sun_galactic_position())
}
