//! Algorithms and import/export built on top of the core data structures.

pub mod export;
pub mod math;
pub mod motion;
pub mod parse;
pub mod sample;
