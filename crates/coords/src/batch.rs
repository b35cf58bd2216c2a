//! Data-parallel conversion of many catalog directions at once.
//!
//! Each element is independent, so the batch helpers are a straight `rayon` map; output
//! order always matches input order.

use rayon::prelude::*;

use crate::cartesian::CartesianPosition;
use crate::equatorial::EquatorialCoordinate;
use crate::galactic::GalacticCoordinate;

/// Cartesian positions for `(direction, distance)` pairs.
pub fn equatorial_to_cartesian(items: &[(EquatorialCoordinate, f64)]) -> Vec<CartesianPosition> {
    items
        .par_iter()
        .map(|(coord, distance)| coord.to_cartesian(*distance))
        .collect()
}

/// Galactic coordinates for a slice of equatorial directions.
pub fn equatorial_to_galactic(items: &[EquatorialCoordinate]) -> Vec<GalacticCoordinate> {
    items.par_iter().map(EquatorialCoordinate::to_galactic).collect()
}
