//! Builds and renders the execution time, speed-up and efficiency charts.

use crate::chart::{self, AxisScale, ChartSpec, Series};
use crate::config::{MODE_CHART_SIZE, PlotConfig, SERIAL_CHART_SIZE};
use crate::error::Result;
use crate::metrics::DerivedMetrics;
use crate::timings::{self, ExecutionMode, PROBLEM_SIZES, SIZE_COUNT, TimingTable};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

pub const X_DESC: &str = "Number of Points (log scale)";

/// Quantity on the y axis of a chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    Time,
    Speedup,
    Efficiency,
}

impl Metric {
    fn title(self) -> &'static str {
        match self {
            Metric::Time => "Execution Time",
            Metric::Speedup => "Speed-Up",
            Metric::Efficiency => "Efficiency",
        }
    }

    fn y_desc(self) -> &'static str {
        match self {
            Metric::Time => "Execution Time (log scale)",
            Metric::Speedup => "Speed-Up",
            Metric::Efficiency => "Efficiency",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Metric::Time => "time",
            Metric::Speedup => "speedup",
            Metric::Efficiency => "efficiency",
        }
    }

    fn scale(self) -> AxisScale {
        match self {
            Metric::Time => AxisScale::Log,
            Metric::Speedup | Metric::Efficiency => AxisScale::Linear,
        }
    }
}

fn to_points(values: &[f64; SIZE_COUNT]) -> Vec<(f64, f64)> {
    PROBLEM_SIZES
        .iter()
        .zip(values)
        .map(|(&size, &v)| (size as f64, v))
        .collect()
}

/// One chart for `mode`, one series per row of `rows`.
pub fn mode_chart(mode: ExecutionMode, metric: Metric, rows: &BTreeMap<u32, [f64; SIZE_COUNT]>) -> ChartSpec {
    let size = if mode == ExecutionMode::Serial {
        SERIAL_CHART_SIZE
    } else {
        MODE_CHART_SIZE
    };
    ChartSpec {
        name: format!("{}_{}", mode.slug(), metric.slug()),
        title: format!("{} {} vs Number of Points", mode.name(), metric.title()),
        x_desc: X_DESC.to_string(),
        y_desc: metric.y_desc().to_string(),
        y_scale: metric.scale(),
        size,
        series: rows
            .iter()
            .map(|(&workers, values)| Series::new(mode.series_label(workers), to_points(values)))
            .collect(),
    }
}

fn time_rows(table: &TimingTable) -> BTreeMap<u32, [f64; SIZE_COUNT]> {
    table.rows().map(|(workers, times)| (workers, *times)).collect()
}

/// All charts, in rendering order: raw times for serial, OpenMP and MPI, then
/// speed-up and efficiency for the two parallel modes.
pub fn chart_specs() -> Vec<ChartSpec> {
    let serial = timings::serial_times();
    let openmp = timings::openmp_table();
    let mpi = timings::mpi_table();
    let openmp_metrics = DerivedMetrics::derive(&serial, &openmp);
    let mpi_metrics = DerivedMetrics::derive(&serial, &mpi);

    vec![
        mode_chart(ExecutionMode::Serial, Metric::Time, &time_rows(&timings::serial_table())),
        mode_chart(ExecutionMode::OpenMp, Metric::Time, &time_rows(&openmp)),
        mode_chart(ExecutionMode::Mpi, Metric::Time, &time_rows(&mpi)),
        mode_chart(ExecutionMode::OpenMp, Metric::Speedup, &openmp_metrics.speedup),
        mode_chart(ExecutionMode::Mpi, Metric::Speedup, &mpi_metrics.speedup),
        mode_chart(ExecutionMode::OpenMp, Metric::Efficiency, &openmp_metrics.efficiency),
        mode_chart(ExecutionMode::Mpi, Metric::Efficiency, &mpi_metrics.efficiency),
    ]
}

/// Renders every chart into `config.output_dir` and returns the written paths in order.
pub fn render_all(config: &PlotConfig) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(&config.output_dir)?;
    let specs = chart_specs();
    let mut written = Vec::with_capacity(specs.len());
    for spec in &specs {
        let path = config
            .output_dir
            .join(format!("{}.{}", spec.name, config.format.extension()));
        debug!(title = %spec.title, series = spec.series.len(), "rendering chart");
        chart::render(spec, &path, config.format)?;
        info!(path = %path.display(), "chart written");
        written.push(path);
    }
    Ok(written)
}
