//! Exoplanet catalog records: raw archive rows, validation, and file parsing.
//!
//! Rows arrive from the archive with every column nullable. Nothing downstream of this
//! crate sees a raw row: [`CatalogRecord`] can only be built through validation, so
//! coordinate conversions never receive missing or out-of-range data.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod record;

pub use record::{CatalogRecord, PlanetProperties, RecordError, StellarProperties};

/// Columns requested from the planetary-systems composite table, in archive order.
pub const EXOPLANET_COLUMNS: &[&str] = &[
    "pl_name",
    "hostname",
    "ra",
    "dec",
    "sy_dist",
    "pl_orbper",
    "pl_rade",
    "pl_masse",
    "pl_eqt",
    "st_teff",
    "st_rad",
    "st_mass",
    "disc_year",
];

/// One row of the archive's `pscomppars` table as delivered over TAP.
///
/// `ra` and `dec` are degrees, `sy_dist` parsecs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExoplanetRow {
    #[serde(default)]
    pub pl_name: Option<String>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub ra: Option<f64>,
    #[serde(default)]
    pub dec: Option<f64>,
    #[serde(default)]
    pub sy_dist: Option<f64>,
    #[serde(default)]
    pub pl_orbper: Option<f64>,
    #[serde(default)]
    pub pl_rade: Option<f64>,
    #[serde(default)]
    pub pl_masse: Option<f64>,
    #[serde(default)]
    pub pl_eqt: Option<f64>,
    #[serde(default)]
    pub st_teff: Option<f64>,
    #[serde(default)]
    pub st_rad: Option<f64>,
    #[serde(default)]
    pub st_mass: Option<f64>,
    #[serde(default)]
    pub disc_year: Option<i32>,
}

/// Errors raised while reading catalog files.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse JSON catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse CSV catalog: {0}")]
    Csv(#[from] csv::Error),
    #[error("unsupported catalog format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("no valid exoplanets found with coordinate data")]
    NoValidRecords,
}

/// A row that failed validation, kept for reporting.
#[derive(Debug, Clone)]
pub struct Rejected {
    pub index: usize,
    pub name: Option<String>,
    pub reason: RecordError,
}

/// Outcome of validating a batch of rows.
#[derive(Debug, Default)]
pub struct Validated {
    pub records: Vec<CatalogRecord>,
    pub rejected: Vec<Rejected>,
}

/// Validate every row, keeping the ones with usable coordinates.
pub fn validate_rows(rows: Vec<ExoplanetRow>) -> Validated {
    let total = rows.len();
    let mut out = Validated::default();
    for (index, row) in rows.into_iter().enumerate() {
        let name = row.pl_name.clone();
        match CatalogRecord::try_from(row) {
            Ok(record) => out.records.push(record),
            Err(reason) => {
                debug!("rejecting row {index} ({name:?}): {reason}");
                out.rejected.push(Rejected {
                    index,
                    name,
                    reason,
                });
            }
        }
    }
    info!(
        "validated {} of {} catalog rows ({} rejected)",
        out.records.len(),
        total,
        out.rejected.len()
    );
    out
}

/// Parse a TAP JSON response: an array of row objects.
pub fn parse_json<R: Read>(reader: R) -> Result<Vec<ExoplanetRow>, CatalogError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse a TAP CSV response with a header line. Empty cells become `None`.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<ExoplanetRow>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut rows = Vec::new();
    for row in csv_reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

/// Load raw rows from a `.json` or `.csv` file.
pub fn load_rows<P: AsRef<Path>>(path: P) -> Result<Vec<ExoplanetRow>, CatalogError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("json") => parse_json(BufReader::new(File::open(path)?)),
        Some("csv") => parse_csv(BufReader::new(File::open(path)?)),
        _ => Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Load and validate a catalog file, failing when no row survives validation.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Validated, CatalogError> {
    let validated = validate_rows(load_rows(path)?);
    if validated.records.is_empty() {
        return Err(CatalogError::NoValidRecords);
    }
    Ok(validated)
}

#[derive(Deserialize)]
struct HostRow {
    #[serde(default)]
    hostname: Option<String>,
}

/// Parse a host-star listing (`[{"hostname": ...}, ...]`) into sorted, unique names.
pub fn parse_host_stars<R: Read>(reader: R) -> Result<Vec<String>, CatalogError> {
    let rows: Vec<HostRow> = serde_json::from_reader(reader)?;
    let mut names: Vec<String> = rows
        .into_iter()
        .filter_map(|row| row.hostname)
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();
    names.sort();
    names.dedup();
    Ok(names)
}
