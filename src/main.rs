//! Command line entry point: `generate`, `plot` and `metrics`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pointscale::config::{
    DEFAULT_CHART_DIR, DEFAULT_COORD_MAX, DEFAULT_COORD_MIN, DEFAULT_POINT_COUNT, DEFAULT_POINTS_FILE,
    DEFAULT_PRECISION,
};
use pointscale::metrics::MetricsReport;
use pointscale::timings::{self, PROBLEM_SIZES};
use pointscale::{DerivedMetrics, GeneratorConfig, ImageFormat, PlotConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pointscale")]
#[command(about = "Generate random 3D points and chart serial/OpenMP/MPI scaling results", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write uniformly distributed random 3D points to a text file
    Generate {
        /// Number of points
        #[arg(long, default_value_t = DEFAULT_POINT_COUNT)]
        count: u64,

        /// Output file, created or truncated
        #[arg(long, default_value = DEFAULT_POINTS_FILE)]
        output: PathBuf,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Lower coordinate bound (inclusive)
        #[arg(long, default_value_t = DEFAULT_COORD_MIN)]
        min: f64,

        /// Upper coordinate bound (inclusive)
        #[arg(long, default_value_t = DEFAULT_COORD_MAX)]
        max: f64,

        /// Fractional digits per coordinate
        #[arg(long, default_value_t = DEFAULT_PRECISION)]
        precision: usize,
    },

    /// Render execution time, speed-up and efficiency charts
    Plot {
        /// Directory the charts are written to
        #[arg(long, default_value = DEFAULT_CHART_DIR)]
        output_dir: PathBuf,

        /// Image format
        #[arg(long, value_enum, default_value_t = FormatArg::Png)]
        format: FormatArg,
    },

    /// Print derived speed-up and efficiency tables
    Metrics {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Png,
    Svg,
}

impl From<FormatArg> for ImageFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Png => ImageFormat::Png,
            FormatArg::Svg => ImageFormat::Svg,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            count,
            output,
            seed,
            min,
            max,
            precision,
        } => {
            let config = GeneratorConfig {
                count,
                output,
                seed,
                min,
                max,
                precision,
            };
            let summary = pointscale::generate(&config)
                .with_context(|| format!("failed to generate points into {}", config.output.display()))?;
            println!("{}", summary.confirmation());
        }
        Command::Plot { output_dir, format } => {
            let config = PlotConfig {
                output_dir,
                format: format.into(),
            };
            let written = pointscale::render_all(&config)
                .with_context(|| format!("failed to render charts into {}", config.output_dir.display()))?;
            tracing::info!(charts = written.len(), "all charts rendered");
        }
        Command::Metrics { json } => {
            let serial = timings::serial_times();
            let modes = vec![
                DerivedMetrics::derive(&serial, &timings::openmp_table()),
                DerivedMetrics::derive(&serial, &timings::mpi_table()),
            ];
            if json {
                let report = MetricsReport {
                    problem_sizes: PROBLEM_SIZES,
                    serial_times: serial,
                    modes,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for metrics in &modes {
                    print!("{}", metrics.to_text());
                }
            }
        }
    }

    Ok(())
}
