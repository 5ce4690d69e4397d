//! Time schedules: how frame indices map to curve parameters
//!
//! Frame `j` of `num_frames` has the linear fraction `j / (num_frames - 1)`.
//! A schedule reshapes that fraction into the parameter `t` handed to the curve.
//! The default is a power schedule with exponent 1.5, which front-loads samples
//! near `t = 0` so the motion starts slow and finishes fast.
//!
//! # Example
//!
//! ```rust
//! use bezier_stretch::TimeSchedule;
//!
//! let t = TimeSchedule::default().parameters(5).unwrap();
//! assert_eq!(t.len(), 5);
//! assert_eq!(t[0], 0.0);
//! assert_eq!(t[2], 0.5_f64.powf(1.5));
//! assert_eq!(t[4], 1.0);
//! ```

use crate::constants::DEFAULT_TIME_EXPONENT;
use crate::error::{BezierError, BezierResult};
use serde::{Deserialize, Serialize};

/// Mapping from the linear frame fraction to the curve parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSchedule {
    /// `t = fraction`
    Linear,
    /// `t = fraction ^ exponent`
    Power(f64),
}

impl Default for TimeSchedule {
    fn default() -> Self {
        TimeSchedule::Power(DEFAULT_TIME_EXPONENT)
    }
}

impl TimeSchedule {
    /// Map a single fraction in `[0, 1]` to a curve parameter
    pub fn apply(&self, fraction: f64) -> f64 {
        match *self {
            TimeSchedule::Linear => fraction,
            TimeSchedule::Power(exponent) => fraction.powf(exponent),
        }
    }

    /// Curve parameters for `num_frames` evenly indexed frames
    ///
    /// A single frame is sampled at `t = 0`; zero frames is an error.
    pub fn parameters(&self, num_frames: usize) -> BezierResult<Vec<f64>> {
        match num_frames {
            0 => Err(BezierError::InvalidFrameCount(num_frames)),
            1 => Ok(vec![0.0]),
            _ => Ok(linspace(0.0, 1.0, num_frames)
                .into_iter()
                .map(|fraction| self.apply(fraction))
                .collect()),
        }
    }
}

/// `num` evenly spaced values from `start` to `stop`, both ends included
///
/// The last value is exactly `stop`, and `num == 1` yields `[start]`.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = num - 1;
            (0..num)
                .map(|i| {
                    if i == last {
                        stop
                    } else {
                        start + (stop - start) * (i as f64 / last as f64)
                    }
                })
                .collect()
        }
    }
}
