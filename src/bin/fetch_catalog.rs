//! Utility binary to download exoplanet and host-star snapshots into `data/catalog/`.
//!
//! Existing snapshots are kept; delete a file to refresh it.

use clap::Parser;
use exoplanet_atlas::catalog;
use exoplanet_atlas::config::{self, SceneConfig};
use exoplanet_atlas::importer::{
    self, SnapshotStatus, TapClient, TapFormat, TapQuery, snapshot_path,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "NASA Exoplanet Archive snapshot downloader")]
struct Cli {
    /// Scene configuration providing the catalog source
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the host-star listing
    #[arg(long, default_value_t = false)]
    skip_hosts: bool,

    /// Print the archive's host-star names instead of downloading
    #[arg(long, default_value_t = false, conflicts_with = "count")]
    list_hosts: bool,

    /// Query the exoplanet table and report how many rows are usable, without saving
    #[arg(long, default_value_t = false)]
    count: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let scene_config = match &cli.config {
        Some(path) => config::load_scene(path)?,
        None => SceneConfig::default(),
    };
    let source = &scene_config.catalog;
    let client = TapClient::from_source(source)?;

    let format = TapFormat::from(source.format);

    if cli.list_hosts {
        for host in client.fetch_host_stars()? {
            println!("{host}");
        }
        return Ok(());
    }
    if cli.count {
        let validated = catalog::validate_rows(client.fetch_exoplanets(&source.table, format)?);
        println!(
            "{}: {} usable rows, {} rejected",
            source.table,
            validated.records.len(),
            validated.rejected.len()
        );
        return Ok(());
    }

    let mut jobs = vec![(
        TapQuery::exoplanets(&source.table, format),
        snapshot_path(&source.table, format),
    )];
    if !cli.skip_hosts {
        jobs.push((
            TapQuery::host_stars(),
            snapshot_path("host_stars", TapFormat::Json),
        ));
    }

    for (query, dest) in jobs {
        match importer::download_snapshot(&client, &query, &dest)? {
            SnapshotStatus::Downloaded(path) => println!("[downloaded] {}", path.display()),
            SnapshotStatus::AlreadyPresent(path) => println!("[skip] {}", path.display()),
        }
    }

    Ok(())
}
