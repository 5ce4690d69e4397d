//! Small numeric helpers used by the curve evaluator.

pub mod binomial;
