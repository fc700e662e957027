//! # Geographic Primitives
//!
//! Longitude/latitude points, rectangular grids and the coordinate sequences
//! used to place points on grid vertices.

use thiserror::Error;

pub mod grid;
pub mod point;
pub mod sequence;

pub use grid::{Grid, GridSpec};
pub use point::Point;
pub use sequence::{DEFAULT_DIGITS, from_to_by, sequence_len};

/// Upper bound on the points a single sequence or grid may expand to.
pub const MAX_POINTS: usize = 10_000_000;

/// Raised when a grid cannot be expanded into points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("step must be a finite number greater than 0, got {0}")]
    InvalidStep(f64),
    #[error("sequence bounds must be finite, got {start} to {stop}")]
    NonFiniteBounds { start: f64, stop: f64 },
    #[error("grid vertex ({x}, {y}) falls outside the valid coordinate range")]
    VertexOutOfRange { x: f64, y: f64 },
    #[error("grid expands to {count} points, more than the limit of {}", MAX_POINTS)]
    TooManyPoints { count: u64 },
}
