//! Error types for curve sampling and its import/export helpers.

use thiserror::Error;

/// Errors produced by this crate
#[derive(Debug, Error)]
pub enum BezierError {
    /// A control polygon needs at least one point (degree >= 0)
    #[error("control polygon must contain at least one point")]
    EmptyControlPolygon,

    /// Sampling needs at least one frame
    #[error("invalid frame count {0}: at least one frame is required")]
    InvalidFrameCount(usize),

    /// X and Y frame sequences must be index-aligned
    #[error("frame sequences differ in length: {x} x frames, {y} y frames")]
    FrameLengthMismatch {
        /// Number of x frames
        x: usize,
        /// Number of y frames
        y: usize,
    },

    /// Any other argument outside the accepted domain
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed JSON input
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Reading or writing a file failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The plotting backend failed to draw
    #[error("plot error: {0}")]
    Plot(String),
}

/// Result type used throughout the crate
pub type BezierResult<T> = Result<T, BezierError>;
