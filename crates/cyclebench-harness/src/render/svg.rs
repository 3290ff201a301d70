//! Line chart written as standalone SVG.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use cyclebench_config::OutputFormat;

use super::{write_artifact, Plotted, Renderer};
use crate::error::BenchError;
use crate::series::ResultSeries;
use crate::sweep::SizeSweep;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;
const MARGIN_LEFT: f64 = 90.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;
const TICKS: usize = 5;

const PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Line chart of timing deltas against input size.
///
/// One polyline per plotted series, a dashed zero baseline, axis ticks and a
/// legend in the top-left corner.
///
/// # Example
///
/// ```
/// use cyclebench_core::Operation;
/// use cyclebench_harness::{Renderer, ResultSeries, SizeSweep, SvgChart};
///
/// let sweep = SizeSweep::new(vec![10, 20, 30]).unwrap();
/// let mut chart = SvgChart::new(sweep);
/// chart
///     .plot(ResultSeries::from_deltas(Operation::BuildMapping, vec![1e-6, 2e-6, 4e-6]), "new map")
///     .unwrap();
///
/// let svg = chart.to_svg().unwrap();
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.contains("<polyline"));
/// assert!(svg.contains("new map"));
/// ```
#[derive(Debug, Clone)]
pub struct SvgChart {
    title: String,
    x_label: String,
    y_label: String,
    plotted: Plotted,
}

impl SvgChart {
    /// Creates an empty chart over `sweep`.
    pub fn new(sweep: SizeSweep) -> Self {
        Self {
            title: "How comprehension is faster than cycle".to_string(),
            x_label: "items in collection".to_string(),
            y_label: "seconds".to_string(),
            plotted: Plotted::new(sweep),
        }
    }

    /// Sets the chart title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Renders the chart.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::EmptyChart`] if nothing was plotted.
    pub fn to_svg(&self) -> Result<String, BenchError> {
        if self.plotted.lines.is_empty() {
            return Err(BenchError::EmptyChart);
        }

        let frame = Frame::fit(&self.plotted);
        let mut out = String::new();

        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
            w = WIDTH,
            h = HEIGHT
        );
        let _ = writeln!(out, r#"  <rect width="100%" height="100%" fill="white"/>"#);
        let _ = writeln!(
            out,
            r#"  <text x="{}" y="{}" text-anchor="middle" font-size="18">{}</text>"#,
            WIDTH / 2.0,
            MARGIN_TOP / 2.0 + 6.0,
            escape(&self.title)
        );

        self.write_axes(&mut out, &frame);

        for (index, (label, series)) in self.plotted.lines.iter().enumerate() {
            let color = PALETTE[index % PALETTE.len()];
            write_line(&mut out, &frame, self.plotted.sweep.as_slice(), series, color, label);
        }

        self.write_legend(&mut out);

        let _ = writeln!(out, "</svg>");
        Ok(out)
    }

    fn write_axes(&self, out: &mut String, frame: &Frame) {
        let left = MARGIN_LEFT;
        let right = WIDTH - MARGIN_RIGHT;
        let top = MARGIN_TOP;
        let bottom = HEIGHT - MARGIN_BOTTOM;

        let _ = writeln!(
            out,
            r#"  <rect x="{left}" y="{top}" width="{}" height="{}" fill="none" stroke="black"/>"#,
            right - left,
            bottom - top
        );

        for i in 0..=TICKS {
            let t = i as f64 / TICKS as f64;

            let x_value = frame.x_min + t * (frame.x_max - frame.x_min);
            let x = frame.x(x_value);
            let _ = writeln!(
                out,
                r#"  <line x1="{x:.2}" y1="{bottom}" x2="{x:.2}" y2="{}" stroke="black"/>"#,
                bottom + 5.0
            );
            let _ = writeln!(
                out,
                r#"  <text x="{x:.2}" y="{}" text-anchor="middle" font-size="12">{}</text>"#,
                bottom + 20.0,
                format_size(x_value)
            );

            let y_value = frame.y_min + t * (frame.y_max - frame.y_min);
            let y = frame.y(y_value);
            let _ = writeln!(
                out,
                r#"  <line x1="{}" y1="{y:.2}" x2="{left}" y2="{y:.2}" stroke="black"/>"#,
                left - 5.0
            );
            let _ = writeln!(
                out,
                r#"  <text x="{}" y="{:.2}" text-anchor="end" font-size="12">{}</text>"#,
                left - 8.0,
                y + 4.0,
                format_seconds(y_value)
            );
        }

        if frame.crosses_zero {
            let zero = frame.y(0.0);
            let _ = writeln!(
                out,
                r##"  <line x1="{left}" y1="{zero:.2}" x2="{right}" y2="{zero:.2}" stroke="#999999" stroke-dasharray="4 4"/>"##
            );
        }

        let _ = writeln!(
            out,
            r#"  <text x="{}" y="{}" text-anchor="middle" font-size="14">{}</text>"#,
            (left + right) / 2.0,
            HEIGHT - 15.0,
            escape(&self.x_label)
        );
        let _ = writeln!(
            out,
            r#"  <text x="20" y="{cy}" text-anchor="middle" font-size="14" transform="rotate(-90 20 {cy})">{}</text>"#,
            escape(&self.y_label),
            cy = (top + bottom) / 2.0
        );
    }

    fn write_legend(&self, out: &mut String) {
        let x = MARGIN_LEFT + 12.0;
        let y = MARGIN_TOP + 12.0;
        let row = 20.0;
        let height = row * self.plotted.lines.len() as f64 + 8.0;

        let _ = writeln!(
            out,
            r##"  <rect x="{x}" y="{y}" width="150" height="{height}" fill="white" fill-opacity="0.8" stroke="#cccccc"/>"##
        );
        for (index, (label, _)) in self.plotted.lines.iter().enumerate() {
            let color = PALETTE[index % PALETTE.len()];
            let line_y = y + 14.0 + row * index as f64;
            let _ = writeln!(
                out,
                r#"  <line x1="{}" y1="{line_y}" x2="{}" y2="{line_y}" stroke="{color}" stroke-width="2"/>"#,
                x + 8.0,
                x + 32.0
            );
            let _ = writeln!(
                out,
                r#"  <text x="{}" y="{}" font-size="12">{}</text>"#,
                x + 40.0,
                line_y + 4.0,
                escape(label)
            );
        }
    }
}

impl Renderer for SvgChart {
    fn plot(&mut self, series: ResultSeries, label: &str) -> Result<(), BenchError> {
        self.plotted.push(series, label)
    }

    fn finalize(&mut self, destination: &Path) -> Result<Vec<PathBuf>, BenchError> {
        let svg = self.to_svg()?;
        Ok(vec![write_artifact(destination, OutputFormat::Svg, &svg)?])
    }
}

/// Data bounds mapped onto the plot area.
struct Frame {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    crosses_zero: bool,
}

impl Frame {
    fn fit(plotted: &Plotted) -> Self {
        let mut x_min = plotted.sweep.min() as f64;
        let mut x_max = plotted.sweep.max() as f64;
        if x_max <= x_min {
            x_min -= 1.0;
            x_max += 1.0;
        }

        // The zero line is always in view so the sign of each delta is readable.
        let (mut y_min, mut y_max) = plotted
            .lines
            .iter()
            .flat_map(|(_, series)| series.deltas().iter().copied())
            .filter(|d| d.is_finite())
            .fold((0.0f64, 0.0f64), |(lo, hi), d| (lo.min(d), hi.max(d)));
        let crosses_zero = y_min < 0.0 && y_max > 0.0;
        if y_max <= y_min {
            y_min -= 1e-9;
            y_max += 1e-9;
        }
        let pad = (y_max - y_min) * 0.05;

        Self {
            x_min,
            x_max,
            y_min: y_min - pad,
            y_max: y_max + pad,
            crosses_zero,
        }
    }

    fn x(&self, value: f64) -> f64 {
        let span = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        MARGIN_LEFT + (value - self.x_min) / (self.x_max - self.x_min) * span
    }

    fn y(&self, value: f64) -> f64 {
        let span = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        HEIGHT - MARGIN_BOTTOM - (value - self.y_min) / (self.y_max - self.y_min) * span
    }
}

fn write_line(
    out: &mut String,
    frame: &Frame,
    sizes: &[usize],
    series: &ResultSeries,
    color: &str,
    label: &str,
) {
    let points: Vec<String> = sizes
        .iter()
        .zip(series.deltas())
        .map(|(&size, &delta)| format!("{:.2},{:.2}", frame.x(size as f64), frame.y(delta)))
        .collect();

    let _ = writeln!(
        out,
        r#"  <polyline fill="none" stroke="{color}" stroke-width="2" points="{}"><title>{}</title></polyline>"#,
        points.join(" "),
        escape(label)
    );
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn format_size(value: f64) -> String {
    format!("{}", value.round() as i64)
}

fn format_seconds(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value.abs() < 1e-2 {
        format!("{value:.2e}")
    } else {
        format!("{value:.3}")
    }
}
