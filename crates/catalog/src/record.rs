//! Validated catalog records.

use atlas_coords::{EquatorialCoordinate, GalacticCoordinate};
use serde::Serialize;
use thiserror::Error;

use crate::ExoplanetRow;

/// Reasons a raw row cannot become a [`CatalogRecord`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("field `{0}` is not finite")]
    NonFinite(&'static str),
    #[error("declination {0} lies outside [-90, 90] degrees")]
    DeclinationOutOfRange(f64),
    #[error("distance {0} pc must be positive")]
    NonPositiveDistance(f64),
    #[error("planet name is empty")]
    EmptyName,
}

/// Physical properties of the planet; the archive leaves many of these blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlanetProperties {
    pub orbital_period_days: Option<f64>,
    pub radius_earth: Option<f64>,
    pub mass_earth: Option<f64>,
    pub equilibrium_temperature_k: Option<f64>,
}

/// Properties of the host star.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StellarProperties {
    pub effective_temperature_k: Option<f64>,
    pub radius_solar: Option<f64>,
    pub mass_solar: Option<f64>,
}

/// A catalog entry whose position is guaranteed usable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogRecord {
    pub planet_name: String,
    pub host_name: Option<String>,
    pub position: EquatorialCoordinate,
    pub distance_pc: f64,
    pub planet: PlanetProperties,
    pub star: StellarProperties,
    pub discovery_year: Option<i32>,
}

impl CatalogRecord {
    #[inline]
    pub fn galactic(&self) -> GalacticCoordinate {
        self.position.to_galactic()
    }
}

fn required(value: Option<f64>, field: &'static str) -> Result<f64, RecordError> {
    let value = value.ok_or(RecordError::MissingField(field))?;
    if !value.is_finite() {
        return Err(RecordError::NonFinite(field));
    }
    Ok(value)
}

impl TryFrom<ExoplanetRow> for CatalogRecord {
    type Error = RecordError;

    fn try_from(row: ExoplanetRow) -> Result<Self, Self::Error> {
        let planet_name = row
            .pl_name
            .map(|name| name.trim().to_string())
            .ok_or(RecordError::MissingField("pl_name"))?;
        if planet_name.is_empty() {
            return Err(RecordError::EmptyName);
        }

        let ra = required(row.ra, "ra")?;
        let dec = required(row.dec, "dec")?;
        if !(-90.0..=90.0).contains(&dec) {
            return Err(RecordError::DeclinationOutOfRange(dec));
        }
        let distance_pc = required(row.sy_dist, "sy_dist")?;
        if distance_pc <= 0.0 {
            return Err(RecordError::NonPositiveDistance(distance_pc));
        }

        Ok(Self {
            planet_name,
            host_name: row.hostname.filter(|h| !h.trim().is_empty()),
            position: EquatorialCoordinate::from_degrees(ra, dec),
            distance_pc,
            planet: PlanetProperties {
                orbital_period_days: row.pl_orbper,
                radius_earth: row.pl_rade,
                mass_earth: row.pl_masse,
                equilibrium_temperature_k: row.pl_eqt,
            },
            star: StellarProperties {
                effective_temperature_k: row.st_teff,
                radius_solar: row.st_rad,
                mass_solar: row.st_mass,
            },
            discovery_year: row.disc_year,
        })
    }
}
