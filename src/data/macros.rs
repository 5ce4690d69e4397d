//! This module provides convenient macros for creating points and control polygons.

/// Macro for creating a Point
#[macro_export]
macro_rules! pt {
    ($x:expr, $y:expr) => {
        $crate::data::Point::new($x as f64, $y as f64)
    };
}

/// Macro for creating a control polygon of any degree
///
/// All coordinates in one invocation must share a numeric type.
#[macro_export]
macro_rules! polygon {
    ([$($point:expr),* $(,)?]) => {{
        let points = [$($point),*];
        $crate::data::ControlPolygon::new(
            points.iter().map(|p| $crate::pt!(p.0, p.1)).collect(),
        )
        .expect("polygon! requires at least one point")
    }};
}

/// Macro for creating a quadratic control polygon
#[macro_export]
macro_rules! quad {
    ([$($point:expr),*]) => {{
        let points = [$($point),*];
        assert_eq!(points.len(), 3, "Quadratic bezier requires exactly 3 points");
        $crate::data::ControlPolygon::quadratic(
            $crate::pt!(points[0].0, points[0].1),
            $crate::pt!(points[1].0, points[1].1),
            $crate::pt!(points[2].0, points[2].1),
        )
    }};
}

/// Macro for creating a cubic control polygon
#[macro_export]
macro_rules! cubic {
    ([$($point:expr),*]) => {{
        let points = [$($point),*];
        assert_eq!(points.len(), 4, "Cubic bezier requires exactly 4 points");
        $crate::data::ControlPolygon::cubic(
            $crate::pt!(points[0].0, points[0].1),
            $crate::pt!(points[1].0, points[1].1),
            $crate::pt!(points[2].0, points[2].1),
            $crate::pt!(points[3].0, points[3].1),
        )
    }};
}
