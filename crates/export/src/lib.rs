//! Export helpers for CSV and JSON artifacts.

pub mod positions {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    const COLUMNS: [&str; 8] = [
        "planet_name",
        "host_name",
        "distance_pc",
        "gal_l_deg",
        "gal_b_deg",
        "x",
        "y",
        "z",
    ];

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// CSV writer over `sink`; quoting is left to the `csv` crate.
    pub fn csv_writer<W: Write>(sink: W) -> csv::Writer<W> {
        csv::WriterBuilder::new().has_headers(false).from_writer(sink)
    }

    /// Write the positions header row.
    pub fn write_header<W: Write>(writer: &mut csv::Writer<W>) -> csv::Result<()> {
        writer.write_record(COLUMNS)
    }

    /// CSV row emitted by the positions exporter.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub planet_name: &'a str,
        pub host_name: &'a str,
        pub distance_pc: f64,
        pub gal_l_deg: f64,
        pub gal_b_deg: f64,
        pub position: [f64; 3],
    }

    impl Record<'_> {
        /// Write one row in header order. Distances keep 3 decimals, angles 6, positions 9.
        pub fn write_to<W: Write>(&self, writer: &mut csv::Writer<W>) -> csv::Result<()> {
            let [x, y, z] = self.position;
            writer.write_record([
                self.planet_name.to_string(),
                self.host_name.to_string(),
                format!("{:.3}", self.distance_pc),
                format!("{:.6}", self.gal_l_deg),
                format!("{:.6}", self.gal_b_deg),
                format!("{x:.9}"),
                format!("{y:.9}"),
                format!("{z:.9}"),
            ])
        }
    }
}

pub mod scene {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::fs::{self, File};
    use std::io;
    use std::path::Path;

    /// Metadata describing how a scene was produced.
    #[derive(Debug)]
    pub struct Metadata<'a> {
        pub source: &'a str,
        pub frame: &'a str,
        pub scale_divisor: f64,
        pub generated_utc: &'a str,
        pub sun_position: [f64; 3],
    }

    #[derive(Serialize)]
    struct SceneDocument<'a, P: Serialize> {
        source: &'a str,
        frame: &'a str,
        scale_divisor: f64,
        generated_utc: &'a str,
        sun_position: [f64; 3],
        count: usize,
        points: &'a [P],
    }

    /// Write a pretty-printed JSON scene document for a rendering front-end.
    pub fn write_json<P: Serialize>(
        output: &Path,
        meta: &Metadata<'_>,
        points: &[P],
    ) -> io::Result<()> {
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let document = SceneDocument {
            source: meta.source,
            frame: meta.frame,
            scale_divisor: meta.scale_divisor,
            generated_utc: meta.generated_utc,
            sun_position: meta.sun_position,
            count: points.len(),
            points,
        };
        to_writer_pretty(File::create(output)?, &document)?;
        Ok(())
    }
}
