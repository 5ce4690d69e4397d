//! Control polygon: the ordered control points of a single Bezier curve.

use crate::data::point::Point;
use crate::error::{BezierError, BezierResult};

/// Ordered, non-empty list of control points defining a Bezier curve of degree
/// `len - 1`.
///
/// Point `i` is weighted by the `i`-th Bernstein basis polynomial, so order matters.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPolygon {
    points: Vec<Point>,
}

impl ControlPolygon {
    /// Create a control polygon, rejecting an empty point list
    pub fn new(points: Vec<Point>) -> BezierResult<Self> {
        if points.is_empty() {
            return Err(BezierError::EmptyControlPolygon);
        }
        Ok(Self { points })
    }

    /// Quadratic polygon `[start, control, end]`
    pub fn quadratic(start: Point, control: Point, end: Point) -> Self {
        Self {
            points: vec![start, control, end],
        }
    }

    /// Cubic polygon `[start, control1, control2, end]`
    pub fn cubic(start: Point, control1: Point, control2: Point, end: Point) -> Self {
        Self {
            points: vec![start, control1, control2, end],
        }
    }

    /// Degree of the curve, one less than the number of points
    pub fn degree(&self) -> usize {
        self.points.len() - 1
    }

    /// Number of control points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the polygon has no points. `new` rejects empty lists, so this is false
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// First control point, interpolated by the curve at `t = 0`
    pub fn start(&self) -> Point {
        self.points[0]
    }

    /// Last control point, interpolated by the curve at `t = 1`
    pub fn end(&self) -> Point {
        self.points[self.points.len() - 1]
    }
}

impl TryFrom<Vec<Point>> for ControlPolygon {
    type Error = BezierError;

    fn try_from(points: Vec<Point>) -> BezierResult<Self> {
        Self::new(points)
    }
}
