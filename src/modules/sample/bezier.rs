//! Bezier curve evaluation over an arbitrary-degree control polygon
//!
//! A curve of degree `n` with control points `P_0 ..= P_n` is
//!
//! ```text
//! B(t) = sum_i C(n, i) * (1 - t)^(n - i) * t^i * P_i
//! ```
//!
//! Sampling many parameters at once is a single matrix product: the Bernstein
//! basis matrix (one row of `n + 1` weights per sample) times the `(n + 1) x 2`
//! matrix of control points. Integer powers are taken with `powi`, so `0^0 == 1`
//! and the curve interpolates `P_0` at `t = 0` and `P_n` at `t = 1` exactly.
//!
//! # Example
//!
//! ```rust
//! use bezier_stretch::{evaluate_bezier, quad};
//!
//! let polygon = quad!([(0.0, 0.0), (5.0, 10.0), (5.0, 5.0)]);
//! let frames = evaluate_bezier(&polygon, 60).unwrap();
//!
//! assert_eq!(frames.len(), 60);
//! assert_eq!(frames.x_frames()[0], 0.0);
//! assert_eq!(frames.x_frames()[59], 5.0);
//! ```

use crate::data::{ControlPolygon, FrameSequence, Point};
use crate::error::BezierResult;
use crate::modules::math::binomial::binomial_row;
use crate::modules::sample::schedule::TimeSchedule;
use log::trace;
use nalgebra::DMatrix;

/// Sample `num_frames` frames using the default power-1.5 schedule
///
/// `num_frames == 1` yields just the first control point; `0` is an error.
pub fn evaluate_bezier(polygon: &ControlPolygon, num_frames: usize) -> BezierResult<FrameSequence> {
    evaluate_bezier_with_schedule(polygon, &TimeSchedule::default(), num_frames)
}

/// Sample `num_frames` frames with the parameters produced by `schedule`
pub fn evaluate_bezier_with_schedule(
    polygon: &ControlPolygon,
    schedule: &TimeSchedule,
    num_frames: usize,
) -> BezierResult<FrameSequence> {
    let t_values = schedule.parameters(num_frames)?;
    trace!(
        "sampling degree {} curve at {} frames ({:?})",
        polygon.degree(),
        num_frames,
        schedule
    );
    Ok(evaluate_bezier_at(polygon, &t_values))
}

/// Evaluate the curve at each of the given parameters
pub fn evaluate_bezier_at(polygon: &ControlPolygon, t_values: &[f64]) -> FrameSequence {
    let basis = bernstein_basis_matrix(polygon.degree(), t_values);
    let frames = basis * control_point_matrix(polygon);

    let x_frames = frames.column(0).iter().copied().collect();
    let y_frames = frames.column(1).iter().copied().collect();
    FrameSequence::from_aligned(x_frames, y_frames)
}

/// Evaluate the curve at a single parameter `t`
pub fn point_at(polygon: &ControlPolygon, t: f64) -> Point {
    let degree = polygon.degree();
    let coefficients = binomial_row(degree);

    let mut x = 0.0;
    let mut y = 0.0;
    for (i, point) in polygon.points().iter().enumerate() {
        let basis = bernstein_weight(coefficients[i], degree, i, t);
        x += basis * point.x;
        y += basis * point.y;
    }
    Point::new(x, y)
}

/// Bernstein weights of a degree `degree` curve, one row per parameter
///
/// Entry `(j, i)` is `C(degree, i) * (1 - t_j)^(degree - i) * t_j^i`. For `t`
/// within `[0, 1]` every row is non-negative and sums to 1.
pub fn bernstein_basis_matrix(degree: usize, t_values: &[f64]) -> DMatrix<f64> {
    let coefficients = binomial_row(degree);
    DMatrix::from_fn(t_values.len(), degree + 1, |j, i| {
        bernstein_weight(coefficients[i], degree, i, t_values[j])
    })
}

#[inline]
fn bernstein_weight(coefficient: f64, degree: usize, i: usize, t: f64) -> f64 {
    coefficient * (1.0 - t).powi((degree - i) as i32) * t.powi(i as i32)
}

/// Control points as an `(n + 1) x 2` matrix, x in column 0 and y in column 1
fn control_point_matrix(polygon: &ControlPolygon) -> DMatrix<f64> {
    let points = polygon.points();
    DMatrix::from_fn(points.len(), 2, |i, axis| match axis {
        0 => points[i].x,
        _ => points[i].y,
    })
}
