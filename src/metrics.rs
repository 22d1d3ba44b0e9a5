//! Speed-up and efficiency derived from the timing tables.

use crate::timings::{ExecutionMode, PROBLEM_SIZES, SIZE_COUNT, TimingTable};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Elementwise `serial[i] / times[i]`. A zero time yields an infinite (or NaN) entry.
pub fn speedup(serial: &[f64; SIZE_COUNT], times: &[f64; SIZE_COUNT]) -> [f64; SIZE_COUNT] {
    std::array::from_fn(|i| serial[i] / times[i])
}

/// Elementwise `speedup[i] / workers`.
pub fn efficiency(speedup: &[f64; SIZE_COUNT], workers: u32) -> [f64; SIZE_COUNT] {
    let workers = f64::from(workers);
    std::array::from_fn(|i| speedup[i] / workers)
}

/// Speed-up and efficiency of every row of one execution mode.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub mode: ExecutionMode,
    pub speedup: BTreeMap<u32, [f64; SIZE_COUNT]>,
    pub efficiency: BTreeMap<u32, [f64; SIZE_COUNT]>,
}

impl DerivedMetrics {
    pub fn derive(serial: &[f64; SIZE_COUNT], table: &TimingTable) -> Self {
        let mut speedups = BTreeMap::new();
        let mut efficiencies = BTreeMap::new();
        for (workers, times) in table.rows() {
            let s = speedup(serial, times);
            efficiencies.insert(workers, efficiency(&s, workers));
            speedups.insert(workers, s);
        }
        Self {
            mode: table.mode,
            speedup: speedups,
            efficiency: efficiencies,
        }
    }

    /// Renders both tables as aligned plain text, one row per worker count.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (metric, rows) in [("speed-up", &self.speedup), ("efficiency", &self.efficiency)] {
            let _ = writeln!(out, "{} {}", self.mode, metric);
            let _ = write!(out, "{:>14}", "workers");
            for size in PROBLEM_SIZES {
                let _ = write!(out, "{:>12}", size);
            }
            out.push('\n');
            for (workers, values) in rows {
                let _ = write!(out, "{:>14}", self.mode.series_label(*workers));
                for v in values {
                    let _ = write!(out, "{:>12.3}", v);
                }
                out.push('\n');
            }
            out.push('\n');
        }
        out
    }
}

/// JSON document emitted by `pointscale metrics --json`.
#[derive(Debug, Serialize)]
pub struct MetricsReport {
    pub problem_sizes: [u64; SIZE_COUNT],
    pub serial_times: [f64; SIZE_COUNT],
    pub modes: Vec<DerivedMetrics>,
}
