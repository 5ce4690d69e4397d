//! Read stretched curve cases from JSON
//!
//! A case file is a JSON array of objects with the fields
//!
//! - `start`, `end`: points, either `[x, y]` or `{"x": .., "y": ..}`
//! - `frames`: number of frames to sample
//! - `factor`: curvature factor, optional, defaults to 0.5
//! - `label`: legend/console label, optional
//!
//! # Example
//!
//! ```rust
//! use bezier_stretch::modules::parse::json::cases_from_json;
//!
//! let cases = cases_from_json(r#"[
//!     {"start": [0, 0], "end": [5, 5], "frames": 60},
//!     {"start": {"x": 2, "y": 0}, "end": [2, 5], "frames": 30, "factor": 0.8}
//! ]"#).unwrap();
//!
//! assert_eq!(cases.len(), 2);
//! assert_eq!(cases[0].factor, 0.5);
//! assert_eq!(cases[1].frames, 30);
//! ```

use crate::data::StretchCase;
use crate::error::BezierResult;
use log::debug;
use std::fs;
use std::path::Path;

/// Parse a JSON array of cases
pub fn cases_from_json(data: &str) -> BezierResult<Vec<StretchCase>> {
    let cases: Vec<StretchCase> = serde_json::from_str(data)?;
    debug!("parsed {} stretch cases", cases.len());
    Ok(cases)
}

/// Read and parse a JSON case file
pub fn cases_from_file<P: AsRef<Path>>(path: P) -> BezierResult<Vec<StretchCase>> {
    let data = fs::read_to_string(path.as_ref())?;
    cases_from_json(&data)
}
