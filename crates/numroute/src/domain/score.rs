//! Performance score formula
//!
//! score = (max * count) / (sum + 1), rounded to `SCORE_DECIMALS` places.

use crate::constants::SCORE_DECIMALS;
use crate::domain::rounding::round_to;

/// Compute the performance score of a sequence
///
/// Returns 0 for an empty sequence. For non-negative inputs the
/// denominator is at least 1. Other inputs follow IEEE-754 division,
/// so a sum of exactly -1 yields an infinite or NaN score.
pub fn performance_score(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let sum: f64 = values.iter().sum();
    let count = values.len() as f64;

    round_to((max * count) / (sum + 1.0), SCORE_DECIMALS)
}
