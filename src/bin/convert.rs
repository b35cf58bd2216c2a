use clap::Parser;
use exoplanet_atlas::coords::{
    EquatorialCoordinate, sun_galactic_position, to_cartesian_from_equatorial,
};

/// Convert a single catalog position to Cartesian and galactic coordinates.
#[derive(Parser, Debug)]
#[command(author, version, about = "Equatorial → Cartesian/galactic converter")]
struct Cli {
    /// Right ascension (degrees unless --hours is given)
    #[arg(long, allow_negative_numbers = true, required_unless_present = "sun")]
    ra: Option<f64>,

    /// Declination in degrees
    #[arg(long, allow_negative_numbers = true, required_unless_present = "sun")]
    dec: Option<f64>,

    /// Interpret --ra as hours (1 h = 15°)
    #[arg(long, default_value_t = false)]
    hours: bool,

    /// Distance along the line of sight (any unit; the output uses the same unit)
    #[arg(long, default_value_t = 1.0)]
    distance: f64,

    /// Print the Sun's galactocentric position (kpc) instead
    #[arg(long, default_value_t = false)]
    sun: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.sun {
        let sun = sun_galactic_position();
        println!("=== Sun (galactocentric, kpc) ===");
        println!("x = {:.6}, y = {:.6}, z = {:.6}", sun.x, sun.y, sun.z);
        println!("|r| = {:.6}", sun.norm());
        return Ok(());
    }

    let (Some(ra), Some(dec)) = (cli.ra, cli.dec) else {
        anyhow::bail!("--ra and --dec are required unless --sun is given");
    };

    let (coord, position) = if cli.hours {
        (
            EquatorialCoordinate::from_hours(ra, dec),
            to_cartesian_from_equatorial(ra, dec, cli.distance),
        )
    } else {
        let coord = EquatorialCoordinate::from_degrees(ra, dec);
        (coord, coord.to_cartesian(cli.distance))
    };
    let galactic = coord.to_galactic();

    println!("=== Coordinates ===");
    println!(
        "Equatorial : RA = {:.6}° ({:.6} h), Dec = {:.6}°",
        coord.right_ascension_deg,
        coord.right_ascension_hours(),
        coord.declination_deg
    );
    println!(
        "Galactic   : l = {:.6}°, b = {:.6}°",
        galactic.longitude_deg, galactic.latitude_deg
    );
    println!(
        "Cartesian  : x = {:.6}, y = {:.6}, z = {:.6} (|r| = {:.6})",
        position.x,
        position.y,
        position.z,
        position.norm()
    );
    if dec.abs() >= 90.0 {
        log::warn!("declination at a celestial pole: galactic longitude is not meaningful");
    }

    Ok(())
}
