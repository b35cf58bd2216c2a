use std::fs;
use std::io::{self, Read};

use exoplanet_atlas::config::{CatalogFormat, DEFAULT_TAP_ENDPOINT};
use exoplanet_atlas::importer::{
    self, ImportError, LOCAL_CATALOG_DIR, SnapshotStatus, TapClient, TapFormat, TapQuery,
    snapshot_path, write_snapshot,
};

#[test]
fn exoplanet_query_selects_the_visualization_columns() {
    let query = TapQuery::exoplanets("pscomppars", TapFormat::Json);
    assert_eq!(
        query.adql,
        "select pl_name,hostname,ra,dec,sy_dist,pl_orbper,pl_rade,pl_masse,pl_eqt,st_teff,st_rad,st_mass,disc_year from pscomppars"
    );
    assert_eq!(query.format, TapFormat::Json);
}

#[test]
fn sync_url_encodes_query_and_format() {
    let url = TapQuery::host_stars()
        .sync_url(DEFAULT_TAP_ENDPOINT)
        .expect("url");
    assert_eq!(url.host_str(), Some("exoplanetarchive.ipac.caltech.edu"));
    assert_eq!(url.path(), "/TAP/sync");

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(
        pairs,
        [
            (
                "query".to_string(),
                "select distinct hostname from ps order by hostname asc".to_string()
            ),
            ("format".to_string(), "json".to_string()),
        ]
    );
    assert!(!url.as_str().contains(' '));
}

#[test]
fn custom_queries_keep_their_format() {
    let query = TapQuery::custom("select count(*) from pscomppars where sy_dist < 10", TapFormat::Csv);
    let url = query.sync_url("https://example.org/TAP/sync").expect("url");
    assert!(url.query().unwrap_or_default().ends_with("format=csv"));
    assert!(url.as_str().contains("sy_dist+%3C+10") || url.as_str().contains("sy_dist%20%3C%2010"));
}

#[test]
fn invalid_endpoint_is_reported() {
    let err = TapQuery::host_stars().sync_url("not a url").unwrap_err();
    assert!(matches!(err, ImportError::InvalidEndpoint { .. }));
}

#[test]
fn configured_format_maps_to_tap_format() {
    assert_eq!(TapFormat::from(CatalogFormat::Csv), TapFormat::Csv);
    assert_eq!(TapFormat::from(CatalogFormat::Json).as_str(), "json");
    let path = snapshot_path("pscomppars", TapFormat::Csv);
    assert_eq!(path, std::path::Path::new(LOCAL_CATALOG_DIR).join("pscomppars.csv"));
}

#[test]
fn existing_snapshot_is_not_downloaded_again() {
    let dir = tempfile::tempdir().expect("tempdir");
    let dest = dir.path().join("pscomppars.json");
    fs::write(&dest, "[]").expect("write");

    let client = TapClient::new("http://127.0.0.1:9/TAP/sync").expect("client");
    let query = TapQuery::exoplanets("pscomppars", TapFormat::Json);
    match importer::download_snapshot(&client, &query, &dest).expect("snapshot") {
        SnapshotStatus::AlreadyPresent(path) => assert_eq!(path, dest),
        SnapshotStatus::Downloaded(_) => panic!("snapshot should have been skipped"),
    }
    assert_eq!(fs::read_to_string(&dest).expect("read"), "[]");
}

/// Yields `prefix`, then fails as a dropped connection would.
struct BrokenStream {
    prefix: &'static [u8],
    sent: bool,
}

impl Read for BrokenStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.sent {
            return Err(io::Error::new(io::ErrorKind::ConnectionReset, "connection reset"));
        }
        self.sent = true;
        let n = self.prefix.len().min(buf.len());
        buf[..n].copy_from_slice(&self.prefix[..n]);
        Ok(n)
    }
}

#[test]
fn interrupted_download_leaves_no_snapshot() {
    let dir = tempfile::tempdir().expect("tempdir");
    let dest = dir.path().join("catalog/pscomppars.json");
    let stream = BrokenStream {
        prefix: br#"[{"pl_name": "Trunc"#,
        sent: false,
    };
    let err = write_snapshot(stream, &dest).unwrap_err();
    assert!(matches!(err, ImportError::Io(_)));
    assert!(!dest.exists());
    let leftovers = fs::read_dir(dest.parent().expect("parent"))
        .expect("read dir")
        .count();
    assert_eq!(leftovers, 0, "partial files must be cleaned up");
}

#[test]
fn complete_download_is_persisted() {
    let dir = tempfile::tempdir().expect("tempdir");
    let dest = dir.path().join("hosts.json");
    let body = fs::read("tests/fixtures/host_stars.json").expect("fixture");
    let path = write_snapshot(body.as_slice(), &dest).expect("snapshot");
    assert_eq!(path, dest);
    assert_eq!(fs::read(&dest).expect("read"), body);
    assert_eq!(fs::read_dir(dir.path()).expect("read dir").count(), 1);
}

#[test]
fn response_bodies_parse_in_either_format() {
    let json = fs::read_to_string("tests/fixtures/exoplanets.json").expect("json fixture");
    let rows = TapFormat::Json.parse_rows(&json).expect("json rows");
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0].pl_name.as_deref(), Some("Proxima Cen b"));

    let csv = fs::read_to_string("tests/fixtures/exoplanets.csv").expect("csv fixture");
    let rows = TapFormat::Csv.parse_rows(&csv).expect("csv rows");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2].sy_dist, None);

    assert!(matches!(
        TapFormat::Json.parse_rows("<VOTABLE/>"),
        Err(ImportError::Catalog(_))
    ));
}
