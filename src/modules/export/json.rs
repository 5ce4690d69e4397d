//! JSON export of frame sequences
//!
//! The output is a pretty printed object:
//!
//! ```text
//! {
//!   "x_frames": [0.0, ...],
//!   "y_frames": [0.0, ...]
//! }
//! ```

use crate::data::FrameSequence;
use crate::error::BezierResult;

/// Serialize frames to a pretty printed JSON string
pub fn frames_to_json(frames: &FrameSequence) -> BezierResult<String> {
    Ok(serde_json::to_string_pretty(frames)?)
}
