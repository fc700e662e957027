//! # Coordinate Sequences
//!
//! Inclusive arithmetic sequences used for grid axes.
//!
//! The element count is `round((stop - start) / step) + 1`. When the span is
//! not an exact multiple of `step` the count is rounded, so the last element
//! may land slightly beyond `stop` (e.g. `0..1` by `0.6` yields `[0, 0.6, 1.2]`).
//! Downstream grids depend on this count, so the arithmetic is kept as is.

use super::{GridError, MAX_POINTS};

/// Decimal places each element is rounded to.
pub const DEFAULT_DIGITS: usize = 8;

/// Sequence from `start` towards `stop` (inclusive) by `step`, each element
/// rounded to `digits` decimal places.
///
/// Returns an empty sequence when `stop` lies far enough below `start` that
/// the count drops to zero.
pub fn from_to_by(start: f64, stop: f64, step: f64, digits: usize) -> Result<Vec<f64>, GridError> {
    let len = sequence_len(start, stop, step)?;
    Ok((0..len)
        .map(|idx| round_to(start + step * idx as f64, digits))
        .collect())
}

/// Number of elements [`from_to_by`] returns, computed without allocating.
///
/// Fails with [`GridError::TooManyPoints`] above [`MAX_POINTS`].
pub fn sequence_len(start: f64, stop: f64, step: f64) -> Result<usize, GridError> {
    if !(step > 0.0 && step.is_finite()) {
        return Err(GridError::InvalidStep(step));
    }
    if !start.is_finite() || !stop.is_finite() {
        return Err(GridError::NonFiniteBounds { start, stop });
    }

    let steps = ((stop - start) / step).round_ties_even();
    if steps < 0.0 {
        return Ok(0);
    }
    if steps >= MAX_POINTS as f64 {
        // saturating cast
        let count = (steps as u64).saturating_add(1);
        return Err(GridError::TooManyPoints { count });
    }
    Ok(steps as usize + 1)
}

/// Rounds the exact decimal value of `value` to `digits` decimal places.
///
/// Works on the decimal expansion rather than on `value * 10^digits`, which
/// would itself round before the digit is decided.
pub fn round_to(value: f64, digits: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.digits$}").parse().unwrap_or(value)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
