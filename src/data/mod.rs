//! Core data structures: points, control polygons, sampled frames and curve requests.

pub mod case;
pub mod frames;
pub mod macros;
pub mod point;
pub mod polygon;

pub use case::StretchCase;
pub use frames::FrameSequence;
pub use point::Point;
pub use polygon::ControlPolygon;
