use atlas_core::vector::{self, Vector3};
use serde::{Deserialize, Serialize};

/// Cartesian position; the unit is whatever distance unit produced it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CartesianPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CartesianPosition {
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn to_array(self) -> Vector3 {
        [self.x, self.y, self.z]
    }

    /// Euclidean distance from the origin.
    #[inline]
    pub fn norm(self) -> f64 {
        vector::norm(&self.to_array())
    }

    /// Translate this position by `offset`.
    #[inline]
    pub fn offset_by(self, offset: CartesianPosition) -> Self {
        vector::add(&self.to_array(), &offset.to_array()).into()
    }

    /// Straight-line distance to `other`, in the shared unit.
    #[inline]
    pub fn distance_to(self, other: CartesianPosition) -> f64 {
        vector::norm(&vector::sub(&self.to_array(), &other.to_array()))
    }

    #[inline]
    pub fn scaled(self, s: f64) -> Self {
        vector::scale(&self.to_array(), s).into()
    }

    /// A position is renderable only when all three components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        vector::is_finite(&self.to_array())
    }
}

impl From<Vector3> for CartesianPosition {
    fn from(v: Vector3) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<CartesianPosition> for Vector3 {
    fn from(p: CartesianPosition) -> Self {
        p.to_array()
    }
}
