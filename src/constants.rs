//! Numeric constants shared across the crate.

/// Exponent applied to the linear frame fraction when sampling a curve.
///
/// Values above 1 front-load samples near `t = 0`: slow start, accelerating finish.
pub const DEFAULT_TIME_EXPONENT: f64 = 1.5;

/// Curvature factor used by the stretched curve generator when none is given.
pub const DEFAULT_CURVE_FACTOR: f64 = 0.5;

/// Frame count used by the builders when none is given.
pub const DEFAULT_NUM_FRAMES: usize = 60;

/// Exponent applied to the flight times of an accelerated trajectory.
pub const TRAJECTORY_TIME_EXPONENT: f64 = 1.2;

/// Velocity scale used by the trajectory generator when none is given.
pub const DEFAULT_VELOCITY_FACTOR: f64 = 1.0;

/// Frame count used by the trajectory builder when none is given.
pub const DEFAULT_TRAJECTORY_FRAMES: usize = 50;

/// Added to a zero vertical acceleration so the flight time stays finite.
pub const ZERO_ACCELERATION_EPSILON: f64 = 1e-5;
