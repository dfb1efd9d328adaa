//! Engine - sequence processing, timing and scoring
//!
//! All operations run synchronously on the caller's thread and never
//! mutate their input.

use crate::constants::TIMING_DECIMALS;
use crate::domain::rounding::round_to;
use std::time::Instant;
use tracing::trace;

pub use crate::domain::score::performance_score;

/// Result of a timed call
#[derive(Debug, Clone, PartialEq)]
pub struct Timed<R> {
    /// Value returned by the timed function
    pub result: R,
    /// Wall-clock duration in milliseconds, rounded to `TIMING_DECIMALS` places
    pub elapsed_ms: f64,
}

/// Apply `function` to each element of `values` in order
///
/// Returns a new sequence with the same length as `values`.
pub fn process<F>(mut function: F, values: &[f64]) -> Vec<f64>
where
    F: FnMut(f64) -> f64,
{
    values.iter().map(|&value| function(value)).collect()
}

/// Invoke `function` and measure how long it takes
///
/// Arguments are passed by capturing them in the closure.
pub fn timed<F, R>(function: F) -> Timed<R>
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = function();
    let elapsed_ms = round_to(start.elapsed().as_secs_f64() * 1000.0, TIMING_DECIMALS);

    trace!(elapsed_ms, "timed call finished");

    Timed { result, elapsed_ms }
}
