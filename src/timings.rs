//! Measured execution times of the external clustering benchmark.
//!
//! The numbers were collected elsewhere; this crate only visualizes them. Every
//! row holds one elapsed time per entry of [`PROBLEM_SIZES`], in the same order.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Number of problem sizes each timing row covers.
pub const SIZE_COUNT: usize = 4;

/// Problem sizes (number of points), largest first.
pub const PROBLEM_SIZES: [u64; SIZE_COUNT] = [10_000_000, 1_000_000, 100_000, 10_000];

const SERIAL_TIMES: [f64; SIZE_COUNT] = [1674.0, 163.46, 17.14, 1.82];

// Threads 1/2/4/8/10/12/20
const OPENMP_TIMES: [(u32, [f64; SIZE_COUNT]); 7] = [
    (1, [1671.0, 177.36, 18.10, 2.06]),
    (2, [883.20, 98.50, 9.61, 1.24]),
    (4, [563.05, 58.81, 5.78, 0.71]),
    (8, [397.75, 32.60, 3.63, 0.48]),
    (10, [321.01, 32.84, 3.79, 0.56]),
    (12, [322.12, 30.31, 3.44, 0.53]),
    (20, [333.48, 29.77, 3.22, 0.49]),
];

// Processes 1/2/4/8/10/12/20
const MPI_TIMES: [(u32, [f64; SIZE_COUNT]); 7] = [
    (1, [844.0, 84.64, 8.41, 0.87]),
    (2, [471.89, 46.26, 5.24, 0.51]),
    (4, [337.0, 33.88, 3.61, 0.44]),
    (8, [327.14, 32.05, 4.04, 1.03]),
    (10, [326.75, 36.82, 4.87, 1.52]),
    (12, [342.34, 34.46, 6.18, 1.98]),
    (20, [353.23, 35.47, 8.05, 4.22]),
];

/// How a timing row was executed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ExecutionMode {
    Serial,
    OpenMp,
    Mpi,
}

impl ExecutionMode {
    pub fn name(self) -> &'static str {
        match self {
            ExecutionMode::Serial => "Serial",
            ExecutionMode::OpenMp => "OpenMP",
            ExecutionMode::Mpi => "MPI",
        }
    }

    /// Lowercase identifier used in file names and JSON keys.
    pub fn slug(self) -> &'static str {
        match self {
            ExecutionMode::Serial => "serial",
            ExecutionMode::OpenMp => "openmp",
            ExecutionMode::Mpi => "mpi",
        }
    }

    /// Legend label for a row with `workers` threads or processes.
    pub fn series_label(self, workers: u32) -> String {
        match self {
            ExecutionMode::Serial => "Serial Execution".to_string(),
            ExecutionMode::OpenMp => format!("{} Threads", workers),
            ExecutionMode::Mpi => format!("{} Processes", workers),
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Elapsed times keyed by worker count, one value per problem size.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TimingTable {
    pub mode: ExecutionMode,
    rows: BTreeMap<u32, [f64; SIZE_COUNT]>,
}

impl TimingTable {
    pub fn with_rows<I>(mode: ExecutionMode, rows: I) -> Self
    where
        I: IntoIterator<Item = (u32, [f64; SIZE_COUNT])>,
    {
        Self {
            mode,
            rows: rows.into_iter().collect(),
        }
    }

    /// Rows in ascending worker order.
    pub fn rows(&self) -> impl Iterator<Item = (u32, &[f64; SIZE_COUNT])> + '_ {
        self.rows.iter().map(|(&workers, times)| (workers, times))
    }

    pub fn worker_counts(&self) -> Vec<u32> {
        self.rows.keys().copied().collect()
    }
}

/// Serial reference times, stored as a single row with one worker.
pub fn serial_table() -> TimingTable {
    TimingTable::with_rows(ExecutionMode::Serial, [(1, SERIAL_TIMES)])
}

pub fn serial_times() -> [f64; SIZE_COUNT] {
    SERIAL_TIMES
}

pub fn openmp_table() -> TimingTable {
    TimingTable::with_rows(ExecutionMode::OpenMp, OPENMP_TIMES)
}

pub fn mpi_table() -> TimingTable {
    TimingTable::with_rows(ExecutionMode::Mpi, MPI_TIMES)
}
