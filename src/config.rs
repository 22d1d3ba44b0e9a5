//! Defaults and run-time parameters for both utilities.

use crate::error::{Error, Result};
use std::path::PathBuf;

// Point generation
pub const DEFAULT_POINT_COUNT: u64 = 10_000_000;
pub const DEFAULT_POINTS_FILE: &str = "points.txt";
pub const DEFAULT_COORD_MIN: f64 = 0.0;
pub const DEFAULT_COORD_MAX: f64 = 9.0;
pub const DEFAULT_PRECISION: usize = 6;
/// Beyond this many fractional digits an f64 no longer round-trips reliably.
pub const MAX_PRECISION: usize = 15;

// Charts
pub const DEFAULT_CHART_DIR: &str = "charts";
pub const SERIAL_CHART_SIZE: (u32, u32) = (1000, 600);
pub const MODE_CHART_SIZE: (u32, u32) = (1200, 800);

/// Parameters of one point generation run.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub count: u64,
    pub output: PathBuf,
    /// Fixed seed for reproducible files. `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub min: f64,
    pub max: f64,
    pub precision: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_POINT_COUNT,
            output: PathBuf::from(DEFAULT_POINTS_FILE),
            seed: None,
            min: DEFAULT_COORD_MIN,
            max: DEFAULT_COORD_MAX,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "coordinate bounds must be finite, got [{}, {}]",
                self.min, self.max
            )));
        }
        if !(self.max - self.min).is_finite() {
            return Err(Error::InvalidConfig(format!(
                "coordinate span [{}, {}] overflows",
                self.min, self.max
            )));
        }
        if self.min > self.max {
            return Err(Error::InvalidConfig(format!(
                "min ({}) is greater than max ({})",
                self.min, self.max
            )));
        }
        if self.precision > MAX_PRECISION {
            return Err(Error::InvalidConfig(format!(
                "precision {} exceeds the maximum of {}",
                self.precision, MAX_PRECISION
            )));
        }
        Ok(())
    }
}

/// Image format written by the chart renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageFormat {
    #[default]
    Png,
    Svg,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

/// Where and how the visualizer writes its charts.
#[derive(Clone, Debug)]
pub struct PlotConfig {
    pub output_dir: PathBuf,
    pub format: ImageFormat,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_CHART_DIR),
            format: ImageFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_generator_config_is_valid() {
        let config = GeneratorConfig::default();
        assert_eq!(config.count, 10_000_000);
        assert_eq!(config.output, PathBuf::from("points.txt"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let config = GeneratorConfig { min: 9.0, max: 0.0, ..Default::default() };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_non_finite_bounds() {
        let config = GeneratorConfig { max: f64::INFINITY, ..Default::default() };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_overflowing_span() {
        let config = GeneratorConfig { min: -1e308, max: 1e308, ..Default::default() };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_excessive_precision() {
        let config = GeneratorConfig { precision: 16, ..Default::default() };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_degenerate_interval_is_allowed() {
        let config = GeneratorConfig { min: 4.5, max: 4.5, ..Default::default() };
        assert!(config.validate().is_ok());
    }
}
