//! Error types shared by the generator and the visualizer.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while generating points or rendering charts.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The plotting backend failed to draw or save a chart.
    #[error("failed to render chart {path:?}: {message}")]
    Chart { path: PathBuf, message: String },

    /// A configuration value was rejected before any work started.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
