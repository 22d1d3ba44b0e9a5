//! Line charts over a logarithmic problem-size axis.
//!
//! A [`ChartSpec`] is plain data: title, axis descriptions, scale and series. [`render`]
//! turns one spec into one self-contained image (caption, axis labels, legend, dashed
//! grid, a marker at every data point).

use crate::config::ImageFormat;
use crate::error::{Error, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::path::Path;

/// Tableau-10 palette, cycled when a chart has more series than colours.
const SERIES_COLORS: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

const MARKER_SIZE: i32 = 4;
const DASH_LENGTH: i32 = 4;
const DASH_SPACING: i32 = 4;
const LINEAR_GRID_TARGET: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisScale {
    Log,
    Linear,
}

/// One labelled line.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(label: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    /// File stem of the rendered image.
    pub name: String,
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub y_scale: AxisScale,
    pub size: (u32, u32),
    pub series: Vec<Series>,
}

impl ChartSpec {
    /// X extent, padded by half a decade's worth on both ends of the log axis.
    pub fn x_range(&self) -> (f64, f64) {
        let (lo, hi) = finite_extent(self.xs().filter(|x| *x > 0.0)).unwrap_or((1.0, 10.0));
        (lo / 1.5, hi * 1.5)
    }

    pub fn y_range(&self) -> (f64, f64) {
        match self.y_scale {
            AxisScale::Log => {
                let (lo, hi) = finite_extent(self.ys().filter(|y| *y > 0.0)).unwrap_or((1.0, 10.0));
                (lo * 0.8, hi * 1.5)
            }
            AxisScale::Linear => {
                let (lo, hi) = finite_extent(self.ys()).unwrap_or((0.0, 1.0));
                let lo = (lo * 1.1).min(0.0);
                let hi = hi * 1.1;
                if hi > lo { (lo, hi) } else { (lo, lo + 1.0) }
            }
        }
    }

    fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.series.iter().flat_map(|s| s.points.iter().map(|p| p.0))
    }

    fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.series.iter().flat_map(|s| s.points.iter().map(|p| p.1))
    }
}

fn finite_extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Grid positions for a log axis: `(value, is_major)` where majors sit on powers of ten
/// and minors on the 2..9 multiples in between.
pub fn log_grid_lines(lo: f64, hi: f64) -> Vec<(f64, bool)> {
    let mut lines = Vec::new();
    if !(lo > 0.0 && hi > lo && hi.is_finite()) {
        return lines;
    }
    let first = lo.log10().floor() as i32;
    let last = hi.log10().ceil() as i32;
    for exp in first..=last {
        let base = 10f64.powi(exp);
        for m in 1..=9 {
            let v = base * f64::from(m);
            if v >= lo && v <= hi {
                lines.push((v, m == 1));
            }
        }
    }
    lines
}

/// Evenly spaced grid positions using a 1/2/5 step, aiming for about `target` lines.
pub fn linear_grid_lines(lo: f64, hi: f64, target: usize) -> Vec<(f64, bool)> {
    if !(hi > lo && lo.is_finite() && hi.is_finite()) || target == 0 {
        return Vec::new();
    }
    let step = nice_step((hi - lo) / target as f64);
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last).map(|k| (k as f64 * step, true)).collect()
}

fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Problem-size tick label: `10k`, `2.5M`, `500`.
pub fn format_size(v: f64) -> String {
    if v >= 1e6 {
        format!("{}M", trim_float(v / 1e6, 1))
    } else if v >= 1e3 {
        format!("{}k", trim_float(v / 1e3, 1))
    } else {
        trim_float(v, 1)
    }
}

/// Metric tick label with at most two decimals and no trailing zeros.
pub fn format_tick(v: f64) -> String {
    trim_float(v, 2)
}

fn trim_float(v: f64, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, v);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Draws `spec` into a new image at `path`.
pub fn render(spec: &ChartSpec, path: &Path, format: ImageFormat) -> Result<()> {
    let drawn = match format {
        ImageFormat::Png => draw(spec, BitMapBackend::new(path, spec.size).into_drawing_area()),
        ImageFormat::Svg => draw(spec, SVGBackend::new(path, spec.size).into_drawing_area()),
    };
    drawn.map_err(|e| Error::Chart {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn draw<DB>(spec: &ChartSpec, root: DrawingArea<DB, Shift>) -> std::result::Result<(), Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let x_bounds = spec.x_range();
    let y_bounds = spec.y_range();
    let (x0, x1) = x_bounds;
    let (y0, y1) = y_bounds;
    let x_grid = log_grid_lines(x0, x1);

    let mut builder = ChartBuilder::on(&root);
    builder
        .caption(spec.title.as_str(), ("sans-serif", 28).into_font())
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(80);

    match spec.y_scale {
        AxisScale::Log => {
            let mut chart = builder.build_cartesian_2d((x0..x1).log_scale(), (y0..y1).log_scale())?;
            chart
                .configure_mesh()
                .disable_mesh()
                .x_desc(spec.x_desc.as_str())
                .y_desc(spec.y_desc.as_str())
                .x_label_formatter(&|v| format_size(*v))
                .y_label_formatter(&|v| format_tick(*v))
                .draw()?;
            let y_grid = log_grid_lines(y0, y1);
            draw_contents(&mut chart, spec, &x_grid, &y_grid, x_bounds, y_bounds)?;
        }
        AxisScale::Linear => {
            let mut chart = builder.build_cartesian_2d((x0..x1).log_scale(), y0..y1)?;
            chart
                .configure_mesh()
                .disable_mesh()
                .x_desc(spec.x_desc.as_str())
                .y_desc(spec.y_desc.as_str())
                .x_label_formatter(&|v| format_size(*v))
                .y_label_formatter(&|v| format_tick(*v))
                .draw()?;
            let y_grid = linear_grid_lines(y0, y1, LINEAR_GRID_TARGET);
            draw_contents(&mut chart, spec, &x_grid, &y_grid, x_bounds, y_bounds)?;
        }
    }

    root.present()?;
    Ok(())
}

fn grid_style(major: bool) -> ShapeStyle {
    BLACK.mix(if major { 0.35 } else { 0.15 }).stroke_width(1)
}

fn draw_contents<'a, DB, X, Y>(
    chart: &mut ChartContext<'a, DB, Cartesian2d<X, Y>>,
    spec: &ChartSpec,
    x_grid: &[(f64, bool)],
    y_grid: &[(f64, bool)],
    (x0, x1): (f64, f64),
    (y0, y1): (f64, f64),
) -> std::result::Result<(), Box<dyn std::error::Error>>
where
    DB: DrawingBackend + 'a,
    DB::ErrorType: 'static,
    X: Ranged<ValueType = f64>,
    Y: Ranged<ValueType = f64>,
{
    for &(x, major) in x_grid {
        chart.draw_series(DashedLineSeries::new(
            vec![(x, y0), (x, y1)],
            DASH_LENGTH,
            DASH_SPACING,
            grid_style(major),
        ))?;
    }
    for &(y, major) in y_grid {
        chart.draw_series(DashedLineSeries::new(
            vec![(x0, y), (x1, y)],
            DASH_LENGTH,
            DASH_SPACING,
            grid_style(major),
        ))?;
    }

    for (i, series) in spec.series.iter().enumerate() {
        let color = SERIES_COLORS[i % SERIES_COLORS.len()];

        chart
            .draw_series(LineSeries::new(series.points.iter().copied(), color.stroke_width(2)))?
            .label(series.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));

        chart.draw_series(PointSeries::of_element(
            series.points.iter().copied(),
            MARKER_SIZE,
            &color,
            &|c, s, st| EmptyElement::at(c) + Circle::new((0, 0), s, st.filled()),
        ))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}
