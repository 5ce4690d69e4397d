//! Export control polygons and sampled frames to various formats
//!
//! This module provides functionality to export curves and their frames to
//! different formats for visualization, sharing, or further processing.
//!
//! # Available Export Formats
//!
//! - [SVG path data](svg_path/index.html) - `d` attribute strings for polygons and frames
//! - [JSON](json/index.html) - frame sequences as `x_frames` / `y_frames` arrays
//! - [Plot](plot/index.html) - SVG line charts of one or more frame sequences

pub mod json;
pub mod plot;
pub mod svg_path;
