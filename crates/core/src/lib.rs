//! Core units, constants, and shared primitives for the Exoplanet Atlas workspace.

/// Astronomical constants. Angles are in degrees, distances as named.
pub mod constants {
    /// Degrees of arc swept by one hour of right ascension.
    pub const DEGREES_PER_HOUR: f64 = 15.0;
    /// Parsecs per kiloparsec.
    pub const PARSECS_PER_KILOPARSEC: f64 = 1_000.0;

    /// Orientation of the galactic frame relative to the equatorial frame.
    ///
    /// Values are the IAU 1958 system expressed at J2000.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct GalacticPole {
        ra_deg: f64,
        dec_deg: f64,
        ncp_longitude_deg: f64,
        center_ra_deg: f64,
    }

    impl GalacticPole {
        /// Right ascension of the north galactic pole.
        #[inline]
        pub const fn ra_deg(&self) -> f64 {
            self.ra_deg
        }

        /// Declination of the north galactic pole.
        #[inline]
        pub const fn dec_deg(&self) -> f64 {
            self.dec_deg
        }

        /// Galactic longitude of the north celestial pole.
        #[inline]
        pub const fn ncp_longitude_deg(&self) -> f64 {
            self.ncp_longitude_deg
        }

        /// Right ascension of the galactic centre (l = 0, b = 0).
        #[inline]
        pub const fn center_ra_deg(&self) -> f64 {
            self.center_ra_deg
        }
    }

    /// The galactic pole table used by every frame conversion.
    pub const GALACTIC_POLE: GalacticPole = GalacticPole {
        ra_deg: 192.859_48,
        dec_deg: 27.128_25,
        ncp_longitude_deg: 122.931_92,
        center_ra_deg: 266.404_7,
    };

    /// Canonical position of the Sun in galactic coordinates.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct SunGalacticParameters {
        longitude_deg: f64,
        latitude_deg: f64,
        distance_kpc: f64,
    }

    impl SunGalacticParameters {
        #[inline]
        pub const fn longitude_deg(&self) -> f64 {
            self.longitude_deg
        }

        #[inline]
        pub const fn latitude_deg(&self) -> f64 {
            self.latitude_deg
        }

        /// Distance from the galactic centre in kiloparsecs.
        #[inline]
        pub const fn distance_kpc(&self) -> f64 {
            self.distance_kpc
        }
    }

    pub const SUN_GALACTIC: SunGalacticParameters = SunGalacticParameters {
        longitude_deg: 90.0,
        latitude_deg: 0.0,
        distance_kpc: 8.3,
    };
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::{DEGREES_PER_HOUR, PARSECS_PER_KILOPARSEC};

    /// Convert hours of right ascension to degrees.
    #[inline]
    pub fn hours_to_degrees(hours: f64) -> f64 {
        hours * DEGREES_PER_HOUR
    }

    /// Convert degrees of right ascension to hours.
    #[inline]
    pub fn degrees_to_hours(degrees: f64) -> f64 {
        degrees / DEGREES_PER_HOUR
    }

    /// Convert parsecs to kiloparsecs.
    #[inline]
    pub fn pc_to_kpc(v: f64) -> f64 {
        v / PARSECS_PER_KILOPARSEC
    }
}

/// Angle helpers shared by the frame conversions.
pub mod angle {
    /// Wrap an angle in degrees into `[0, 360)`.
    ///
    /// `rem_euclid` can round a tiny negative input up to exactly 360, which is folded back to 0.
    #[inline]
    pub fn wrap_degrees(deg: f64) -> f64 {
        let wrapped = deg.rem_euclid(360.0);
        if wrapped >= 360.0 { 0.0 } else { wrapped }
    }

    /// Spherical direction `(lon, lat)` in degrees to a Cartesian vector of length `r`.
    #[inline]
    pub fn spherical_to_cartesian(lon_deg: f64, lat_deg: f64, r: f64) -> [f64; 3] {
        let (sin_lon, cos_lon) = lon_deg.to_radians().sin_cos();
        let (sin_lat, cos_lat) = lat_deg.to_radians().sin_cos();
        [r * cos_lat * cos_lon, r * cos_lat * sin_lon, r * sin_lat]
    }
}

/// Minimal vector helpers to avoid ad-hoc `[f64; 3]` math everywhere.
pub mod vector {
    /// Alias for a 3D vector; units depend on context (pc, kpc, or scene units).
    pub type Vector3 = [f64; 3];

    /// Euclidean norm of a vector.
    #[inline]
    pub fn norm(v: &Vector3) -> f64 {
        dot(v, v).sqrt()
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(a: &Vector3, b: &Vector3) -> f64 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    /// Vector addition.
    #[inline]
    pub fn add(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
    }

    /// Vector subtraction.
    #[inline]
    pub fn sub(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }

    /// Scale a vector by a scalar.
    #[inline]
    pub fn scale(v: &Vector3, s: f64) -> Vector3 {
        [v[0] * s, v[1] * s, v[2] * s]
    }

    /// True when every component is finite.
    #[inline]
    pub fn is_finite(v: &Vector3) -> bool {
        v.iter().all(|c| c.is_finite())
    }
}
