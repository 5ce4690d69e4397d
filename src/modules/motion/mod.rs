//! Motion paths between two points
//!
//! - [`stretch`] arcs from start to end along a quadratic Bezier curve
//! - [`trajectory`] follows a constant-acceleration path from start to end

pub mod stretch;
pub mod trajectory;
