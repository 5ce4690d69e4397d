//! Frame sequence: a sampled curve as two index-aligned coordinate lists.

use crate::data::point::Point;
use crate::error::{BezierError, BezierResult};
use serde::{Deserialize, Serialize};

/// X and Y positions of a curve at each sampled frame.
///
/// Both lists always have the same length.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawFrames")]
pub struct FrameSequence {
    x_frames: Vec<f64>,
    y_frames: Vec<f64>,
}

#[derive(Deserialize)]
struct RawFrames {
    x_frames: Vec<f64>,
    y_frames: Vec<f64>,
}

impl TryFrom<RawFrames> for FrameSequence {
    type Error = BezierError;

    fn try_from(raw: RawFrames) -> BezierResult<Self> {
        Self::new(raw.x_frames, raw.y_frames)
    }
}

impl FrameSequence {
    /// Create a frame sequence from two lists of equal length
    pub fn new(x_frames: Vec<f64>, y_frames: Vec<f64>) -> BezierResult<Self> {
        if x_frames.len() != y_frames.len() {
            return Err(BezierError::FrameLengthMismatch {
                x: x_frames.len(),
                y: y_frames.len(),
            });
        }
        Ok(Self { x_frames, y_frames })
    }

    /// Frames from two lists already known to have equal length
    pub(crate) fn from_aligned(x_frames: Vec<f64>, y_frames: Vec<f64>) -> Self {
        debug_assert_eq!(x_frames.len(), y_frames.len());
        Self { x_frames, y_frames }
    }

    /// Collect a frame sequence from sampled points
    pub fn from_points<I: IntoIterator<Item = Point>>(points: I) -> Self {
        let (x_frames, y_frames) = points.into_iter().map(|p| (p.x, p.y)).unzip();
        Self { x_frames, y_frames }
    }

    pub fn len(&self) -> usize {
        self.x_frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x_frames.is_empty()
    }

    pub fn x_frames(&self) -> &[f64] {
        &self.x_frames
    }

    pub fn y_frames(&self) -> &[f64] {
        &self.y_frames
    }

    /// Position at frame `index`, if in range
    pub fn point(&self, index: usize) -> Option<Point> {
        Some(Point::new(
            *self.x_frames.get(index)?,
            *self.y_frames.get(index)?,
        ))
    }

    pub fn first(&self) -> Option<Point> {
        self.point(0)
    }

    pub fn last(&self) -> Option<Point> {
        self.len().checked_sub(1).and_then(|index| self.point(index))
    }

    /// Iterate over frames as points
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.x_frames
            .iter()
            .zip(&self.y_frames)
            .map(|(&x, &y)| Point::new(x, y))
    }

    /// Split into the `(x_frames, y_frames)` pair
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.x_frames, self.y_frames)
    }
}
