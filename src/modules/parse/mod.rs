//! Parsing module for stretched curve requests
//!
//! Now supported format:
//! - JSON:
//!     a list of cases in the form of
//!     `[{"start": [0, 0], "end": [5, 5], "frames": 60, "factor": 0.5}]`.
//!     See the `json` module for more detailed information on the JSON format.

pub mod json;
