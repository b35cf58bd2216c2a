//! Scene placement: turns validated catalog records into render-ready points.
//!
//! The application scale-down factor is applied here, before any coordinate conversion;
//! the conversion functions themselves never scale implicitly.

pub mod placement;

pub use atlas_config::{Frame, SceneConfig};
pub use placement::{PlacedPoint, Scene, SceneError, SceneSummary, place_catalog, place_record};
