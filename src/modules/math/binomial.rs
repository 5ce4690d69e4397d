//! Binomial coefficients as floating point numbers
//!
//! The coefficient is built up as a running product of fractions
//! `(n - i) / (i + 1)`, so it never forms a factorial and stays usable for
//! degrees far beyond what `u64` factorials could hold. The result is an `f64`
//! because it is only ever used as a factor of a Bernstein weight.
//!
//! The product runs over the shorter side, `min(k, n - k)` factors, which makes
//! `C(n, k) == C(n, n - k)` and `C(n, n) == 1` hold exactly in floating point.
//!
//! # Example
//!
//! ```rust
//! use bezier_stretch::binomial_coefficient;
//!
//! assert_eq!(binomial_coefficient(4, 2), 6.0);
//! assert_eq!(binomial_coefficient(2, 3), 0.0);
//! ```

/// "n choose k" as an `f64`, or `0.0` when `k > n`
pub fn binomial_coefficient(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }

    let k = k.min(n - k);
    let mut result = 1.0;
    for i in 0..k {
        result *= (n - i) as f64 / (i + 1) as f64;
    }
    result
}

/// All coefficients `C(n, 0) ..= C(n, n)` of row `n` of Pascal's triangle
pub fn binomial_row(n: usize) -> Vec<f64> {
    (0..=n).map(|k| binomial_coefficient(n, k)).collect()
}
