//! NASA Exoplanet Archive TAP utilities.
//!
//! Builds the ADQL queries the visualization needs, issues them against the synchronous
//! TAP endpoint, and stores snapshots on disk for offline use.

use std::fs;
use std::io::{Cursor, Read, copy};
use std::path::{Path, PathBuf};

use atlas_catalog::{CatalogError, EXOPLANET_COLUMNS, ExoplanetRow};
use atlas_config::{CatalogFormat, CatalogSource};
use log::{debug, info};
use reqwest::Url;
use reqwest::blocking::Client;
use tempfile::NamedTempFile;
use thiserror::Error;

/// Location where fetched catalog snapshots are stored.
pub const LOCAL_CATALOG_DIR: &str = "data/catalog";

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("invalid TAP endpoint `{endpoint}`: {message}")]
    InvalidEndpoint { endpoint: String, message: String },
    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Output format accepted by the TAP `format` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapFormat {
    Json,
    Csv,
}

impl TapFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    /// File extension used for snapshots in this format.
    pub fn extension(self) -> &'static str {
        self.as_str()
    }

    /// Parse a TAP response body in this format into raw exoplanet rows.
    pub fn parse_rows(self, body: &str) -> Result<Vec<ExoplanetRow>, ImportError> {
        let rows = match self {
            Self::Json => atlas_catalog::parse_json(Cursor::new(body))?,
            Self::Csv => atlas_catalog::parse_csv(Cursor::new(body))?,
        };
        Ok(rows)
    }
}

impl From<CatalogFormat> for TapFormat {
    fn from(format: CatalogFormat) -> Self {
        match format {
            CatalogFormat::Json => Self::Json,
            CatalogFormat::Csv => Self::Csv,
        }
    }
}

/// An ADQL statement plus the response format to request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapQuery {
    pub adql: String,
    pub format: TapFormat,
}

impl TapQuery {
    /// Every exoplanet with the columns the visualization uses.
    pub fn exoplanets(table: &str, format: TapFormat) -> Self {
        Self {
            adql: format!("select {} from {}", EXOPLANET_COLUMNS.join(","), table),
            format,
        }
    }

    /// Alphabetical list of distinct host star names.
    pub fn host_stars() -> Self {
        Self {
            adql: "select distinct hostname from ps order by hostname asc".to_string(),
            format: TapFormat::Json,
        }
    }

    pub fn custom(adql: impl Into<String>, format: TapFormat) -> Self {
        Self {
            adql: adql.into(),
            format,
        }
    }

    /// Full synchronous-query URL with `query` and `format` percent-encoded.
    pub fn sync_url(&self, endpoint: &str) -> Result<Url, ImportError> {
        Url::parse_with_params(
            endpoint,
            &[("query", self.adql.as_str()), ("format", self.format.as_str())],
        )
        .map_err(|err| ImportError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            message: err.to_string(),
        })
    }
}

/// Blocking TAP client bound to one endpoint.
pub struct TapClient {
    client: Client,
    endpoint: String,
}

impl TapClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ImportError> {
        Ok(Self {
            client: Client::builder().build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_source(source: &CatalogSource) -> Result<Self, ImportError> {
        Self::new(source.endpoint.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run a query and return the response body. Non-2xx statuses are errors.
    pub fn fetch_text(&self, query: &TapQuery) -> Result<String, ImportError> {
        let url = query.sync_url(&self.endpoint)?;
        debug!("TAP request: {url}");
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response.text()?)
    }

    /// Fetch the exoplanet table as raw rows.
    pub fn fetch_exoplanets(
        &self,
        table: &str,
        format: TapFormat,
    ) -> Result<Vec<ExoplanetRow>, ImportError> {
        let body = self.fetch_text(&TapQuery::exoplanets(table, format))?;
        let rows = format.parse_rows(&body)?;
        info!("fetched {} exoplanet rows from {}", rows.len(), self.endpoint);
        Ok(rows)
    }

    /// Fetch the sorted list of host star names.
    pub fn fetch_host_stars(&self) -> Result<Vec<String>, ImportError> {
        let body = self.fetch_text(&TapQuery::host_stars())?;
        let hosts = atlas_catalog::parse_host_stars(Cursor::new(body))?;
        info!("fetched {} host stars from {}", hosts.len(), self.endpoint);
        Ok(hosts)
    }
}

/// Outcome of attempting to download a snapshot.
#[derive(Debug)]
pub enum SnapshotStatus {
    Downloaded(PathBuf),
    AlreadyPresent(PathBuf),
}

/// Default on-disk path for a named snapshot.
pub fn snapshot_path(name: &str, format: TapFormat) -> PathBuf {
    Path::new(LOCAL_CATALOG_DIR).join(format!("{name}.{}", format.extension()))
}

/// Download the result of `query` to `dest` unless the file already exists.
pub fn download_snapshot(
    client: &TapClient,
    query: &TapQuery,
    dest: &Path,
) -> Result<SnapshotStatus, ImportError> {
    if dest.exists() {
        return Ok(SnapshotStatus::AlreadyPresent(dest.to_path_buf()));
    }
    let url = query.sync_url(client.endpoint())?;
    let response = client.client.get(url).send()?.error_for_status()?;
    let path = write_snapshot(response, dest)?;
    info!("saved snapshot {}", path.display());
    Ok(SnapshotStatus::Downloaded(path))
}

/// Copy `reader` into `dest` through a temporary file in the same directory.
///
/// `dest` appears only once the whole body is on disk; a failed copy leaves nothing behind.
pub fn write_snapshot<R: Read>(mut reader: R, dest: &Path) -> Result<PathBuf, ImportError> {
    let parent = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;
    let mut partial = NamedTempFile::new_in(parent)?;
    copy(&mut reader, &mut partial)?;
    partial.persist(dest).map_err(|err| err.error)?;
    Ok(dest.to_path_buf())
}
