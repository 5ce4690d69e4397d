//! Constant-acceleration trajectories between two points
//!
//! The path is the kinematic curve `p(t) = p0 + v0 * t + a * t^2 / 2`. The
//! flight time `T` is the non-zero root of `a_y * T^2 / 2 + (y0 - y1) * T = 0`
//! taken as a magnitude, and the initial velocity is the one that reaches `end`
//! after `T`, scaled by a velocity factor.
//!
//! Frame times are `linspace(0, T, num_frames)` raised to the power 1.2, so
//! like the stretched curve the motion accelerates towards the end. The eased
//! times overshoot `T` whenever `T > 1` and fall short of it when `T < 1`, so
//! the last frame only lands on `end` when `T == 1` and the factor is 1.
//!
//! # Example
//!
//! ```rust
//! use bezier_stretch::{pt, Trajectory};
//!
//! let frames = Trajectory::new(pt!(0, 0), pt!(5, 5), pt!(-2, -5))
//!     .velocity_factor(1.2)
//!     .generate()
//!     .unwrap();
//!
//! assert_eq!(frames.len(), 50);
//! assert_eq!(frames.first(), Some(pt!(0, 0)));
//! ```

use crate::constants::{
    DEFAULT_TRAJECTORY_FRAMES, DEFAULT_VELOCITY_FACTOR, TRAJECTORY_TIME_EXPONENT,
    ZERO_ACCELERATION_EPSILON,
};
use crate::data::{FrameSequence, Point};
use crate::error::{BezierError, BezierResult};
use crate::modules::sample::schedule::linspace;
use log::debug;

/// Sample a constant-acceleration trajectory from `start` towards `end`
///
/// `acceleration` holds the `(a_x, a_y)` components.
pub fn generate_accelerated_trajectory(
    start: Point,
    end: Point,
    num_frames: usize,
    acceleration: Point,
    velocity_factor: f64,
) -> BezierResult<FrameSequence> {
    if num_frames == 0 {
        return Err(BezierError::InvalidFrameCount(num_frames));
    }

    let total_time = flight_time(start, end, acceleration.y)?;
    let velocity = initial_velocity(start, end, acceleration, total_time) * velocity_factor;
    debug!(
        "trajectory ({}, {}) -> ({}, {}): flight time {}, initial velocity ({}, {})",
        start.x, start.y, end.x, end.y, total_time, velocity.x, velocity.y
    );

    let frames = linspace(0.0, total_time, num_frames)
        .into_iter()
        .map(|t| t.powf(TRAJECTORY_TIME_EXPONENT))
        .map(|t| start + velocity * t + acceleration * (0.5 * t * t));
    Ok(FrameSequence::from_points(frames))
}

/// Flight time from `start.y` to `end.y` under the vertical acceleration
///
/// Fails when the endpoints share a height under non-zero acceleration, since
/// the only root is then `T = 0`.
pub fn flight_time(start: Point, end: Point, vertical_acceleration: f64) -> BezierResult<f64> {
    let a = 0.5 * vertical_acceleration;
    let b = start.y - end.y;

    let root = if a != 0.0 {
        -b / a
    } else {
        -b / (a + ZERO_ACCELERATION_EPSILON)
    };
    let total_time = root.abs();

    if !total_time.is_finite() || total_time == 0.0 {
        return Err(BezierError::InvalidArgument(format!(
            "degenerate flight time {total_time} from y = {} to y = {}",
            start.y, end.y
        )));
    }
    Ok(total_time)
}

/// Velocity reaching `end` from `start` after `total_time` under `acceleration`
fn initial_velocity(start: Point, end: Point, acceleration: Point, total_time: f64) -> Point {
    let drift = acceleration * (0.5 * total_time * total_time);
    (end - start - drift) * (1.0 / total_time)
}

/// Builder for an accelerated trajectory with default velocity factor and frame count
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    start: Point,
    end: Point,
    acceleration: Point,
    velocity_factor: f64,
    num_frames: usize,
}

impl Trajectory {
    /// Trajectory with a velocity factor of 1.0 over 50 frames
    pub fn new(start: Point, end: Point, acceleration: Point) -> Self {
        Self {
            start,
            end,
            acceleration,
            velocity_factor: DEFAULT_VELOCITY_FACTOR,
            num_frames: DEFAULT_TRAJECTORY_FRAMES,
        }
    }

    pub fn velocity_factor(mut self, velocity_factor: f64) -> Self {
        self.velocity_factor = velocity_factor;
        self
    }

    pub fn num_frames(mut self, num_frames: usize) -> Self {
        self.num_frames = num_frames;
        self
    }

    pub fn generate(&self) -> BezierResult<FrameSequence> {
        generate_accelerated_trajectory(
            self.start,
            self.end,
            self.num_frames,
            self.acceleration,
            self.velocity_factor,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pt;
    use approx::assert_relative_eq;

    #[test]
    fn test_flight_time() {
        assert_eq!(flight_time(pt!(0, 0), pt!(5, 5), -5.0).unwrap(), 2.0);
        assert_eq!(flight_time(pt!(0, 5), pt!(0, 0), -5.0).unwrap(), 2.0);
        assert_eq!(flight_time(pt!(0, 0), pt!(0, 5), -10.0).unwrap(), 1.0);

        // zero acceleration falls back to a tiny denominator
        assert_relative_eq!(
            flight_time(pt!(0, 0), pt!(0, 1), 0.0).unwrap(),
            1e5,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_flat_flight_rejected() {
        let result = flight_time(pt!(0, 2), pt!(5, 2), -9.81);
        assert!(matches!(result, Err(BezierError::InvalidArgument(_))));
    }

    #[test]
    fn test_unit_flight_time_lands_on_target() {
        // T == 1 so the eased times end at exactly 1
        let frames = generate_accelerated_trajectory(pt!(0, 0), pt!(3, 5), 20, pt!(0, -10), 1.0)
            .unwrap();
        let last = frames.last().unwrap();
        assert_eq!(frames.first(), Some(pt!(0, 0)));
        assert_relative_eq!(last.x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(last.y, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_horizontal_acceleration_is_linear_in_time() {
        let frames = generate_accelerated_trajectory(pt!(0, 0), pt!(4, 5), 9, pt!(0, -10), 1.0)
            .unwrap();
        let times: Vec<f64> = linspace(0.0, 1.0, 9)
            .into_iter()
            .map(|t| t.powf(TRAJECTORY_TIME_EXPONENT))
            .collect();
        for (x, t) in frames.x_frames().iter().zip(times) {
            assert_relative_eq!(*x, 4.0 * t, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_velocity_factor_scales_initial_velocity() {
        let start = pt!(0, 0);
        let end = pt!(5, 5);
        let acceleration = pt!(-2, -5);

        let velocity = initial_velocity(start, end, acceleration, 2.0);
        assert_eq!(velocity, pt!(4.5, 7.5));

        let frames = Trajectory::new(start, end, acceleration)
            .velocity_factor(1.2)
            .num_frames(50)
            .generate()
            .unwrap();
        let t = 2.0_f64.powf(TRAJECTORY_TIME_EXPONENT);
        let last = frames.last().unwrap();
        assert_relative_eq!(last.x, 5.4 * t - t * t, epsilon = 1e-9);
        assert_relative_eq!(last.y, 9.0 * t - 2.5 * t * t, epsilon = 1e-9);
    }

    #[test]
    fn test_frame_counts() {
        let trajectory = Trajectory::new(pt!(0, 0), pt!(5, 5), pt!(-2, -5));
        assert_eq!(trajectory.generate().unwrap().len(), 50);

        let single = trajectory.clone().num_frames(1).generate().unwrap();
        assert_eq!(single.first(), Some(pt!(0, 0)));

        assert!(matches!(
            trajectory.num_frames(0).generate(),
            Err(BezierError::InvalidFrameCount(0))
        ));
    }
}
