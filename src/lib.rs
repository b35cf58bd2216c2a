//! Exoplanet Atlas: catalog coordinates to render-ready positions.
//!
//! The coordinate math lives in `atlas_coords`; the surrounding crates validate catalog
//! rows, load configuration, fetch from the archive, place scenes, and export them.
//! This crate re-exports them so front-ends depend on a single library.

pub use atlas_catalog as catalog;
pub use atlas_config as config;
pub use atlas_coords as coords;
pub use atlas_core as primitives;
pub use atlas_export as export;
pub use atlas_importer as importer;
pub use atlas_scene as scene;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
