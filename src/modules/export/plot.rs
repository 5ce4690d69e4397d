//! SVG line charts of sampled frames
//!
//! Each series is drawn as a line through its frames with a small circle on
//! every frame, so the easing of the schedule is visible as the spacing of the
//! markers. Annotated charts also carry a grid, axis descriptions and a legend.
//!
//! # Example
//!
//! ```rust
//! use bezier_stretch::data::StretchCase;
//! use bezier_stretch::modules::export::plot::{render_svg, PlotOptions, PlotSeries};
//!
//! let case = &StretchCase::default_cases()[0];
//! let frames = case.curve().generate().unwrap();
//!
//! let svg = render_svg(&[PlotSeries::new(case.display_label(), &frames)], &PlotOptions::default()).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::data::FrameSequence;
use crate::error::{BezierError, BezierResult};
use log::debug;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

const SERIES_COLORS: [RGBColor; 6] = [BLUE, RED, GREEN, MAGENTA, CYAN, BLACK];
const MARKER_RADIUS: i32 = 2;

/// Canvas size and decorations of a chart
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    pub width: u32,
    pub height: u32,
    pub title: Option<String>,
    /// Draw axis descriptions, tick labels and the legend
    pub annotate: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            title: Some("Stretched Curve with Directional Offset".to_string()),
            annotate: true,
        }
    }
}

/// One labelled frame sequence of a chart
#[derive(Debug, Clone)]
pub struct PlotSeries<'a> {
    pub label: String,
    pub frames: &'a FrameSequence,
}

impl<'a> PlotSeries<'a> {
    pub fn new(label: impl Into<String>, frames: &'a FrameSequence) -> Self {
        Self {
            label: label.into(),
            frames,
        }
    }
}

/// Render the series to an SVG document string
pub fn render_svg(series: &[PlotSeries<'_>], options: &PlotOptions) -> BezierResult<String> {
    let bounds = plot_bounds(series)?;
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, (options.width, options.height))
            .into_drawing_area();
        draw_chart(&root, series, options, bounds)
            .map_err(|e| BezierError::Plot(e.to_string()))?;
    }
    Ok(buffer)
}

/// Render the series to an SVG file at `path`
pub fn save_svg<P: AsRef<Path>>(
    path: P,
    series: &[PlotSeries<'_>],
    options: &PlotOptions,
) -> BezierResult<()> {
    let bounds = plot_bounds(series)?;
    let root =
        SVGBackend::new(path.as_ref(), (options.width, options.height)).into_drawing_area();
    draw_chart(&root, series, options, bounds).map_err(|e| BezierError::Plot(e.to_string()))?;
    debug!("wrote plot of {} series to {}", series.len(), path.as_ref().display());
    Ok(())
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    series: &[PlotSeries<'_>],
    options: &PlotOptions,
    (x_range, y_range): (Range<f64>, Range<f64>),
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let mut builder = ChartBuilder::on(root);
    builder.margin(10);
    if let Some(title) = &options.title {
        builder.caption(title, ("sans-serif", 20));
    }
    if options.annotate {
        builder.x_label_area_size(30).y_label_area_size(40);
    }
    let mut chart = builder.build_cartesian_2d(x_range, y_range)?;

    {
        let mut mesh = chart.configure_mesh();
        if options.annotate {
            mesh.x_desc("X Position").y_desc("Y Position");
        }
        mesh.draw()?;
    }

    for (idx, entry) in series.iter().enumerate() {
        let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
        let points: Vec<(f64, f64)> = entry.frames.points().map(Into::into).collect();

        chart
            .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(1)))?
            .label(entry.label.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });

        chart.draw_series(
            points
                .iter()
                .map(|&point| Circle::new(point, MARKER_RADIUS, color.filled())),
        )?;
    }

    if options.annotate && !series.is_empty() {
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

/// Axis ranges covering every frame, padded by a tenth of the span on each side
///
/// Fails when a padded span does not fit in an `f64`.
fn plot_bounds(series: &[PlotSeries<'_>]) -> BezierResult<(Range<f64>, Range<f64>)> {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for point in series.iter().flat_map(|entry| entry.frames.points()) {
        if !point.x.is_finite() || !point.y.is_finite() {
            continue;
        }
        x_min = x_min.min(point.x);
        x_max = x_max.max(point.x);
        y_min = y_min.min(point.y);
        y_max = y_max.max(point.y);
    }

    if x_min > x_max {
        return Ok((0.0..1.0, 0.0..1.0));
    }
    Ok((padded(x_min, x_max)?, padded(y_min, y_max)?))
}

fn padded(min: f64, max: f64) -> BezierResult<Range<f64>> {
    // scale before subtracting so the pad stays finite for any finite bounds
    let pad = (max * 0.1 - min * 0.1).max(0.5);
    let range = (min - pad)..(max + pad);
    if !(range.end - range.start).is_finite() {
        return Err(BezierError::Plot(format!(
            "coordinate span {min}..{max} is too wide to plot"
        )));
    }
    Ok(range)
}
