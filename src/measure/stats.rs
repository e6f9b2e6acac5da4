// src/measure/stats.rs

//! Aggregate per-run measurements.
//!
//! All functions require a non-empty sequence. The driver guarantees at least
//! one run so an empty sequence is a programming error.

use ::more_asserts::debug_assert_gt;

/// Arithmetic mean of `values`.
pub fn mean(values: &[f64]) -> f64 {
    debug_assert_gt!(values.len(), 0, "mean of an empty sequence");
    let sum: f64 = values.iter().sum();

    sum / values.len() as f64
}

/// Smallest of `values`.
pub fn min(values: &[f64]) -> f64 {
    debug_assert_gt!(values.len(), 0, "min of an empty sequence");

    values
        .iter()
        .copied()
        .fold(f64::MAX, f64::min)
}

/// Largest of `values`.
pub fn max(values: &[f64]) -> f64 {
    debug_assert_gt!(values.len(), 0, "max of an empty sequence");

    values
        .iter()
        .copied()
        .fold(f64::MIN, f64::max)
}
