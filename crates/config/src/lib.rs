//! Configuration models and loaders for the Exoplanet Atlas.

use std::fs::File;
use std::path::{Path, PathBuf};

use atlas_catalog::ExoplanetRow;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default TAP synchronous endpoint of the NASA Exoplanet Archive.
pub const DEFAULT_TAP_ENDPOINT: &str = "https://exoplanetarchive.ipac.caltech.edu/TAP/sync";
/// Planetary-systems composite parameters table.
pub const DEFAULT_TABLE: &str = "pscomppars";
/// Scene units per parsec divisor used by the visualization.
pub const DEFAULT_SCALE_DIVISOR: f64 = 100.0;

/// Reference frame in which placed points are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frame {
    /// Sun at the origin, equatorial axes.
    #[default]
    Heliocentric,
    /// Galactic centre at the origin, galactic axes, distances in kpc.
    Galactocentric,
}

impl Frame {
    pub fn label(self) -> &'static str {
        match self {
            Self::Heliocentric => "heliocentric",
            Self::Galactocentric => "galactocentric",
        }
    }
}

/// Response format requested from the archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogFormat {
    #[default]
    Json,
    Csv,
}

/// Where catalog data is fetched from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogSource {
    pub endpoint: String,
    pub table: String,
    pub format: CatalogFormat,
}

impl Default for CatalogSource {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_TAP_ENDPOINT.to_string(),
            table: DEFAULT_TABLE.to_string(),
            format: CatalogFormat::default(),
        }
    }
}

/// Scene settings: frame, scale-down factor, and catalog source.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub frame: Frame,
    /// Distances are divided by this before conversion.
    pub scale_divisor: f64,
    /// Keep only the nearest N planets.
    pub max_planets: Option<usize>,
    pub catalog: CatalogSource,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            frame: Frame::default(),
            scale_divisor: DEFAULT_SCALE_DIVISOR,
            max_planets: None,
            catalog: CatalogSource::default(),
        }
    }
}

impl SceneConfig {
    /// Reject settings that would produce an unusable scene.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.scale_divisor.is_finite() || self.scale_divisor <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "scale_divisor must be positive and finite, got {}",
                self.scale_divisor
            )));
        }
        if self.max_planets == Some(0) {
            return Err(ConfigError::Invalid(
                "max_planets must be at least 1 when set".to_string(),
            ));
        }
        if self.catalog.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("catalog endpoint is empty".to_string()));
        }
        Ok(())
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Load and validate a scene configuration from a TOML or YAML file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<SceneConfig, ConfigError> {
    let path = path.as_ref();
    let config: SceneConfig = if is_toml(path) {
        toml::from_str(&std::fs::read_to_string(path)?)?
    } else {
        serde_yaml::from_reader(File::open(path)?)?
    };
    config.validate()?;
    Ok(config)
}

/// Load sample catalog rows: a YAML list, one TOML file, or a directory of TOML files.
pub fn load_samples<P: AsRef<Path>>(path: P) -> Result<Vec<ExoplanetRow>, ConfigError> {
    load_records(path)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}
