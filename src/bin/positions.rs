use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use exoplanet_atlas::catalog;
use exoplanet_atlas::config::{self, Frame, SceneConfig};
use exoplanet_atlas::export::positions as export_positions;
use exoplanet_atlas::export::scene as export_scene;
use exoplanet_atlas::scene::place_catalog;

/// Place every valid exoplanet of a catalog snapshot and export the positions.
#[derive(Parser, Debug)]
#[command(author, version, about = "Catalog → scene positions exporter")]
struct Cli {
    /// Catalog snapshot (.json or .csv) as returned by the archive
    #[arg(long)]
    input: PathBuf,

    /// Scene configuration (TOML or YAML); defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured frame
    #[arg(long, value_enum)]
    frame: Option<FrameArg>,

    /// Override the configured scale divisor
    #[arg(long)]
    scale: Option<f64>,

    /// Keep only the nearest N planets
    #[arg(long)]
    limit: Option<usize>,

    /// Output CSV file (use '-' for stdout)
    #[arg(long, default_value = "artifacts/positions.csv")]
    output: PathBuf,

    /// Also write a JSON scene document
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum FrameArg {
    Heliocentric,
    Galactocentric,
}

impl From<FrameArg> for Frame {
    fn from(value: FrameArg) -> Self {
        match value {
            FrameArg::Heliocentric => Frame::Heliocentric,
            FrameArg::Galactocentric => Frame::Galactocentric,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut scene_config = match &cli.config {
        Some(path) => config::load_scene(path)
            .with_context(|| format!("loading scene config {}", path.display()))?,
        None => SceneConfig::default(),
    };
    if let Some(frame) = cli.frame {
        scene_config.frame = frame.into();
    }
    if let Some(scale) = cli.scale {
        scene_config.scale_divisor = scale;
    }
    if cli.limit.is_some() {
        scene_config.max_planets = cli.limit;
    }

    let validated = catalog::load_catalog(&cli.input)
        .with_context(|| format!("loading catalog {}", cli.input.display()))?;
    let scene = place_catalog(&validated.records, &scene_config)?;

    let sink = export_positions::writer_for_path(&cli.output)?;
    let mut writer = export_positions::csv_writer(sink);
    export_positions::write_header(&mut writer)?;
    for point in &scene.points {
        export_positions::Record {
            planet_name: &point.planet_name,
            host_name: point.host_name.as_deref().unwrap_or(""),
            distance_pc: point.distance_pc,
            gal_l_deg: point.galactic.longitude_deg,
            gal_b_deg: point.galactic.latitude_deg,
            position: point.position.to_array(),
        }
        .write_to(&mut writer)?;
    }
    writer.flush()?;

    if let Some(json_path) = &cli.json {
        let generated_utc = chrono::Utc::now().to_rfc3339();
        let source = cli.input.display().to_string();
        export_scene::write_json(
            json_path,
            &export_scene::Metadata {
                source: &source,
                frame: scene.frame.label(),
                scale_divisor: scene.scale_divisor,
                generated_utc: &generated_utc,
                sun_position: scene.summary.sun_position.to_array(),
            },
            &scene.points,
        )?;
    }

    let summary = &scene.summary;
    eprintln!(
        "placed {} planets ({} rejected rows, {} unrenderable) in {} frame",
        summary.count,
        validated.rejected.len(),
        summary.unrenderable,
        scene.frame.label()
    );
    eprintln!(
        "distance pc: nearest {:.1}, farthest {:.1}, mean {:.1}",
        summary.nearest_pc, summary.farthest_pc, summary.mean_distance_pc
    );

    Ok(())
}
