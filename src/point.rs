use rand::Rng;
use std::io::{self, Write};

/// A generated 3D point. Coordinates are already rounded to the requested precision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Samples each coordinate independently from the closed interval `[min, max]`
    /// and rounds it to `precision` fractional digits.
    ///
    /// Panics if `min > max` or `max - min` overflows; `GeneratorConfig::validate` rejects both.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64, precision: usize) -> Self {
        let mut sample = || round_to(rng.gen_range(min..=max), precision).clamp(min, max);
        let x = sample();
        let y = sample();
        let z = sample();
        Self { x, y, z }
    }

    pub fn coords(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Writes the point as `"x y z\n"` with exactly `precision` fractional digits.
    pub fn write_line<W: Write + ?Sized>(&self, writer: &mut W, precision: usize) -> io::Result<()> {
        writeln!(
            writer,
            "{:.prec$} {:.prec$} {:.prec$}",
            self.x,
            self.y,
            self.z,
            prec = precision
        )
    }
}

/// Rounds `value` to `digits` fractional digits, halves away from zero.
pub fn round_to(value: f64, digits: usize) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}
