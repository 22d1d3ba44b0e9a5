//! # pointscale
//!
//! Two small utilities that support a scaling study of a 3D clustering workload:
//!
//! - **Point generation**: writes uniformly distributed random 3D points to a text file,
//!   one `x y z` line per point, with fixed decimal precision.
//! - **Scaling charts**: holds the measured serial, OpenMP and MPI execution times as
//!   constants, derives speed-up and efficiency, and renders log-scale line charts.
//!
//! The two halves share nothing but the error and configuration types.
//!
//! ## Main Interface
//!
//! [`generate`] writes a point file from a [`GeneratorConfig`]; [`render_all`] writes
//! every chart described by a [`PlotConfig`].

pub mod chart;
pub mod config;
mod error;
pub mod generator;
pub mod metrics;
pub mod point;
pub mod timings;
pub mod visualizer;

pub use config::GeneratorConfig;
pub use config::ImageFormat;
pub use config::PlotConfig;
pub use error::Error;
pub use error::Result;
pub use generator::GenerationSummary;
pub use generator::generate;
pub use metrics::DerivedMetrics;
pub use point::Point;
pub use timings::ExecutionMode;
pub use timings::TimingTable;
pub use visualizer::chart_specs;
pub use visualizer::render_all;
