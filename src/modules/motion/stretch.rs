//! Stretched curves: an eased quadratic arc between two points
//!
//! The single control point is derived from the endpoints:
//!
//! - horizontally it sits past the midpoint in the direction of travel, by
//!   `|x1 - x0| * curve_factor`. When the endpoints are vertically aligned that
//!   offset would vanish, so it is replaced by `-|y1 - y0| * curve_factor`,
//!   bulging the curve to the left.
//! - vertically it sits above the higher endpoint, by
//!   `curve_factor * |x1 - x0| + |y1 - y0| / 2`.
//!
//! The polygon `[start, control, end]` is then sampled with the power-1.5
//! schedule, so the motion starts slow and accelerates towards the end.
//!
//! # Example
//!
//! ```rust
//! use bezier_stretch::{generate_stretched_curve, pt, StretchedCurve};
//!
//! let frames = generate_stretched_curve(pt!(0, 0), pt!(5, 5), 60, 0.5).unwrap();
//! assert_eq!(frames.first(), Some(pt!(0, 0)));
//! assert_eq!(frames.last(), Some(pt!(5, 5)));
//!
//! // the builder carries the default curve factor of 0.5
//! let curve = StretchedCurve::new(pt!(0, 0), pt!(5, 5));
//! assert_eq!(curve.control_point(), pt!(5, 10));
//! assert_eq!(curve.generate().unwrap(), frames);
//! ```

use crate::constants::{DEFAULT_CURVE_FACTOR, DEFAULT_NUM_FRAMES};
use crate::data::{ControlPolygon, FrameSequence, Point};
use crate::error::BezierResult;
use crate::modules::sample::bezier::evaluate_bezier_with_schedule;
use crate::modules::sample::schedule::TimeSchedule;
use log::debug;

/// Sample a stretched arc from `start` to `end` into `num_frames` frames
///
/// `curve_factor` is not range checked; negative or large values just bend the
/// curve in unusual ways.
pub fn generate_stretched_curve(
    start: Point,
    end: Point,
    num_frames: usize,
    curve_factor: f64,
) -> BezierResult<FrameSequence> {
    StretchedCurve::new(start, end)
        .curve_factor(curve_factor)
        .num_frames(num_frames)
        .generate()
}

/// Synthetic control point of the stretched arc from `start` to `end`
pub fn stretch_control_point(start: Point, end: Point, curve_factor: f64) -> Point {
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    let offset_x = if start.x == end.x {
        -dy.abs() * curve_factor
    } else {
        sign(dx) * dx.abs() * curve_factor
    };

    let control_x = start.midpoint(&end).x + offset_x;
    let control_y = start.y.max(end.y) + curve_factor * dx.abs() + dy.abs() / 2.0;
    Point::new(control_x, control_y)
}

/// Quadratic polygon `[start, control, end]` of the stretched arc
pub fn stretch_control_polygon(start: Point, end: Point, curve_factor: f64) -> ControlPolygon {
    ControlPolygon::quadratic(start, stretch_control_point(start, end, curve_factor), end)
}

/// Sign of `value` as -1, 0 or 1. Zero and NaN are returned unchanged.
fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        value
    }
}

/// Builder for a stretched arc with default curve factor, frame count and schedule
#[derive(Debug, Clone, PartialEq)]
pub struct StretchedCurve {
    start: Point,
    end: Point,
    curve_factor: f64,
    num_frames: usize,
    schedule: TimeSchedule,
}

impl StretchedCurve {
    /// Arc from `start` to `end` with a curve factor of 0.5 over 60 frames
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            curve_factor: DEFAULT_CURVE_FACTOR,
            num_frames: DEFAULT_NUM_FRAMES,
            schedule: TimeSchedule::default(),
        }
    }

    pub fn curve_factor(mut self, curve_factor: f64) -> Self {
        self.curve_factor = curve_factor;
        self
    }

    pub fn num_frames(mut self, num_frames: usize) -> Self {
        self.num_frames = num_frames;
        self
    }

    /// Replace the default power-1.5 schedule
    pub fn schedule(mut self, schedule: TimeSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn control_point(&self) -> Point {
        stretch_control_point(self.start, self.end, self.curve_factor)
    }

    pub fn control_polygon(&self) -> ControlPolygon {
        stretch_control_polygon(self.start, self.end, self.curve_factor)
    }

    /// Sample the arc
    pub fn generate(&self) -> BezierResult<FrameSequence> {
        let polygon = self.control_polygon();
        debug!(
            "stretched curve ({}, {}) -> ({}, {}): control point ({}, {}), factor {}",
            self.start.x,
            self.start.y,
            self.end.x,
            self.end.y,
            polygon.points()[1].x,
            polygon.points()[1].y,
            self.curve_factor
        );
        evaluate_bezier_with_schedule(&polygon, &self.schedule, self.num_frames)
    }
}
