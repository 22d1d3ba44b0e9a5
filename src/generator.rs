//! Writes uniformly distributed random points to a text file.

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::point::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// Outcome of a successful [`generate`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationSummary {
    pub count: u64,
    pub path: PathBuf,
}

impl GenerationSummary {
    /// The single confirmation line printed once the file is complete.
    pub fn confirmation(&self) -> String {
        format!("{} 3D points saved to '{}'.", self.count, self.path.display())
    }
}

/// Writes `config.count` points, one per line, in generation order.
/// Returns the number of lines written.
pub fn write_points<W, R>(writer: &mut W, rng: &mut R, config: &GeneratorConfig) -> io::Result<u64>
where
    W: Write + ?Sized,
    R: Rng + ?Sized,
{
    for _ in 0..config.count {
        Point::random(rng, config.min, config.max, config.precision).write_line(writer, config.precision)?;
    }
    Ok(config.count)
}

/// Creates (or truncates) the output file and fills it with random points.
pub fn generate(config: &GeneratorConfig) -> Result<GenerationSummary> {
    config.validate()?;
    debug!(
        count = config.count,
        min = config.min,
        max = config.max,
        precision = config.precision,
        seed = ?config.seed,
        "generator parameters"
    );

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(path = %config.output.display(), count = config.count, "writing points");
    let file = File::create(&config.output)?;
    let mut writer = BufWriter::new(file);
    let count = write_points(&mut writer, &mut rng, config)?;
    writer.flush()?;
    info!(path = %config.output.display(), count, "points written");

    Ok(GenerationSummary {
        count,
        path: config.output.clone(),
    })
}
