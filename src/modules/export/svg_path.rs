//! SVG path data for control polygons and frame sequences
//!
//! - A control polygon becomes the curve it defines: `Q` for quadratic and `C`
//!   for cubic polygons. Other degrees have no SVG curve command, so their
//!   control points are emitted as a polyline.
//! - A frame sequence becomes a polyline through every frame.
//!
//! # Examples
//!
//! ```rust
//! use bezier_stretch::{quad, generate_stretched_curve, pt};
//! use bezier_stretch::modules::export::svg_path::ToSvgPath;
//!
//! let polygon = quad!([(0, 0), (5, 10), (5, 5)]);
//! assert_eq!(polygon.to_svg_path(), "M0,0 Q5,10,5,5");
//!
//! let frames = generate_stretched_curve(pt!(0, 0), pt!(5, 5), 3, 0.5).unwrap();
//! assert!(frames.to_svg_path().starts_with("M0,0 L"));
//! ```

use crate::data::{ControlPolygon, FrameSequence, Point};

/// Trait for types that can be converted to SVG path data
pub trait ToSvgPath {
    /// Convert to SVG path data string
    fn to_svg_path(&self) -> String;
}

impl ToSvgPath for ControlPolygon {
    fn to_svg_path(&self) -> String {
        match self.points() {
            [p0, p1, p2] => format!("M{},{} Q{},{},{},{}", p0.x, p0.y, p1.x, p1.y, p2.x, p2.y),
            [p0, p1, p2, p3] => format!(
                "M{},{} C{},{},{},{},{},{}",
                p0.x, p0.y, p1.x, p1.y, p2.x, p2.y, p3.x, p3.y
            ),
            points => polyline(points.iter().copied()),
        }
    }
}

impl ToSvgPath for FrameSequence {
    fn to_svg_path(&self) -> String {
        polyline(self.points())
    }
}

fn polyline<I: Iterator<Item = Point>>(points: I) -> String {
    let mut result = String::new();

    for (i, point) in points.enumerate() {
        if i == 0 {
            result.push_str(&format!("M{},{}", point.x, point.y));
        } else {
            result.push_str(&format!(" L{},{}", point.x, point.y));
        }
    }

    result
}
