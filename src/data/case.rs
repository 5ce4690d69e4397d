//! A named stretched-curve request, as read from case files.

use crate::constants::DEFAULT_CURVE_FACTOR;
use crate::data::point::Point;
use crate::modules::motion::stretch::StretchedCurve;
use serde::{Deserialize, Serialize};

/// Start, end, frame count and curve factor of one stretched curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StretchCase {
    pub start: Point,
    pub end: Point,
    pub frames: usize,
    #[serde(default = "default_factor")]
    pub factor: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

fn default_factor() -> f64 {
    DEFAULT_CURVE_FACTOR
}

impl StretchCase {
    pub fn new(start: Point, end: Point, frames: usize, factor: f64) -> Self {
        Self {
            start,
            end,
            frames,
            factor,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The explicit label, or `Start: (x0, y0) -> End: (x1, y1)`
    pub fn display_label(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!(
                "Start: ({}, {}) -> End: ({}, {})",
                self.start.x, self.start.y, self.end.x, self.end.y
            ),
        }
    }

    pub fn curve(&self) -> StretchedCurve {
        StretchedCurve::new(self.start, self.end)
            .curve_factor(self.factor)
            .num_frames(self.frames)
    }

    /// Rightward, leftward and vertical travel over 60 frames with factor 0.5
    pub fn default_cases() -> Vec<StretchCase> {
        vec![
            StretchCase::new(Point::new(0.0, 0.0), Point::new(5.0, 5.0), 60, 0.5),
            StretchCase::new(Point::new(5.0, 0.0), Point::new(0.0, 5.0), 60, 0.5),
            StretchCase::new(Point::new(2.0, 0.0), Point::new(2.0, 5.0), 60, 0.5),
        ]
    }
}
