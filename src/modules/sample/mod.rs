//! Sampling curves into frames
//!
//! - [`schedule`] maps frame indices to curve parameters
//! - [`bezier`] evaluates a control polygon at those parameters

pub mod bezier;
pub mod schedule;
