// Module definitions
pub mod constants;
pub mod data;
pub mod error;
pub mod modules;

// export the core data structure at crate level
pub use data::frames::FrameSequence;
pub use data::point::Point;
pub use data::polygon::ControlPolygon;
pub use error::{BezierError, BezierResult};

// export the core operations at crate level
pub use modules::math::binomial::binomial_coefficient;
pub use modules::motion::stretch::{generate_stretched_curve, StretchedCurve};
pub use modules::motion::trajectory::{generate_accelerated_trajectory, Trajectory};
pub use modules::sample::bezier::evaluate_bezier;
pub use modules::sample::schedule::TimeSchedule;
