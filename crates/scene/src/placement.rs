use atlas_catalog::CatalogRecord;
use atlas_config::{ConfigError, Frame, SceneConfig};
use atlas_coords::{
    CartesianPosition, GalacticCoordinate, galactocentric_position, sun_galactic_position,
};
use log::{debug, info, warn};
use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("no renderable points in catalog")]
    NothingToPlace,
}

/// One catalog object positioned in scene units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedPoint {
    pub planet_name: String,
    pub host_name: Option<String>,
    pub distance_pc: f64,
    pub galactic: GalacticCoordinate,
    pub position: CartesianPosition,
}

/// Aggregate figures for a placed scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneSummary {
    pub count: usize,
    /// Records dropped because their position was not finite.
    pub unrenderable: usize,
    pub nearest_pc: f64,
    pub farthest_pc: f64,
    pub mean_distance_pc: f64,
    /// Where the Sun sits in this scene.
    pub sun_position: CartesianPosition,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub frame: Frame,
    pub scale_divisor: f64,
    pub points: Vec<PlacedPoint>,
    pub summary: SceneSummary,
}

/// Place one record in `frame`.
///
/// Heliocentric scenes divide the distance (pc) by `scale_divisor` before conversion.
/// Galactocentric scenes work in kpc with the Sun offset applied, then divide the
/// resulting position by `scale_divisor`.
pub fn place_record(record: &CatalogRecord, frame: Frame, scale_divisor: f64) -> PlacedPoint {
    let galactic = record.galactic();
    let position = match frame {
        Frame::Heliocentric => record
            .position
            .to_cartesian(record.distance_pc / scale_divisor),
        Frame::Galactocentric => {
            galactocentric_position(galactic, record.distance_pc).scaled(1.0 / scale_divisor)
        }
    };
    PlacedPoint {
        planet_name: record.planet_name.clone(),
        host_name: record.host_name.clone(),
        distance_pc: record.distance_pc,
        galactic,
        position,
    }
}

fn sun_in_scene(frame: Frame, scale_divisor: f64) -> CartesianPosition {
    match frame {
        Frame::Heliocentric => CartesianPosition::ORIGIN,
        Frame::Galactocentric => sun_galactic_position().scaled(1.0 / scale_divisor),
    }
}

/// Indices of the records to place: all of them, or the nearest `limit` in input order.
fn select_indices(records: &[CatalogRecord], limit: Option<usize>) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..records.len()).collect();
    if let Some(limit) = limit.filter(|&limit| limit < records.len()) {
        indices.sort_by(|&a, &b| records[a].distance_pc.total_cmp(&records[b].distance_pc));
        indices.truncate(limit);
        indices.sort_unstable();
    }
    indices
}

/// Place a whole catalog according to `config`.
pub fn place_catalog(records: &[CatalogRecord], config: &SceneConfig) -> Result<Scene, SceneError> {
    config.validate()?;
    let frame = config.frame;
    let divisor = config.scale_divisor;

    let indices = select_indices(records, config.max_planets);
    if indices.len() < records.len() {
        debug!(
            "limiting scene to the nearest {} of {} records",
            indices.len(),
            records.len()
        );
    }

    let placed: Vec<PlacedPoint> = indices
        .par_iter()
        .map(|&i| place_record(&records[i], frame, divisor))
        .collect();

    let selected = placed.len();
    let points: Vec<PlacedPoint> = placed
        .into_iter()
        .filter(|point| point.position.is_finite())
        .collect();
    let unrenderable = selected - points.len();
    if unrenderable > 0 {
        warn!("dropped {unrenderable} unrenderable points");
    }
    if points.is_empty() {
        return Err(SceneError::NothingToPlace);
    }

    let summary = summarize(&points, unrenderable, sun_in_scene(frame, divisor));
    info!(
        "placed {} points in {} frame (divisor {})",
        summary.count,
        frame.label(),
        divisor
    );
    Ok(Scene {
        frame,
        scale_divisor: divisor,
        points,
        summary,
    })
}

fn summarize(
    points: &[PlacedPoint],
    unrenderable: usize,
    sun_position: CartesianPosition,
) -> SceneSummary {
    let (nearest, farthest, total) = points.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY, 0.0),
        |(lo, hi, sum), p| (lo.min(p.distance_pc), hi.max(p.distance_pc), sum + p.distance_pc),
    );
    SceneSummary {
        count: points.len(),
        unrenderable,
        nearest_pc: nearest,
        farthest_pc: farthest,
        mean_distance_pc: total / points.len() as f64,
        sun_position,
    }
}
