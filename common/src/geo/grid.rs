//! # Grid Model
//!
//! A bounded rectangle with per-axis resolution, expanded into points placed
//! on its vertices.

use serde::{Deserialize, Serialize};

use super::sequence::{DEFAULT_DIGITS, from_to_by, sequence_len};
use super::{GridError, MAX_POINTS, Point};
use crate::validate::{ValidationError, Validator};

/// Grid bounds as written in a configuration file, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GridSpec {
    pub xmin: f64,
    pub xmax: f64,
    pub xres: f64,
    pub ymin: f64,
    pub ymax: f64,
    pub yres: f64,
}

/// A validated rectangular grid.
///
/// Bounds obey the [`Point`] coordinate ranges and both resolutions are
/// strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridSpec")]
pub struct Grid {
    xmin: f64,
    xmax: f64,
    xres: f64,
    ymin: f64,
    ymax: f64,
    yres: f64,
}

impl Grid {
    pub fn new(spec: GridSpec) -> Result<Self, ValidationError> {
        let mut v = Validator::new();
        let grid = Self::check(spec, &mut v);
        v.finish(grid)
    }

    /// Validates every field of `spec` into `v`.
    ///
    /// The returned grid must not escape unless `v` finishes cleanly.
    pub(crate) fn check(spec: GridSpec, v: &mut Validator) -> Self {
        Self {
            xmin: v.longitude("xmin", spec.xmin),
            xmax: v.longitude("xmax", spec.xmax),
            xres: v.positive("xres", spec.xres),
            ymin: v.latitude("ymin", spec.ymin),
            ymax: v.latitude("ymax", spec.ymax),
            yres: v.positive("yres", spec.yres),
        }
    }

    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    pub fn xres(&self) -> f64 {
        self.xres
    }

    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    pub fn yres(&self) -> f64 {
        self.yres
    }

    /// Longitudes of the grid columns.
    pub fn x_values(&self) -> Result<Vec<f64>, GridError> {
        from_to_by(self.xmin, self.xmax, self.xres, DEFAULT_DIGITS)
    }

    /// Latitudes of the grid rows.
    pub fn y_values(&self) -> Result<Vec<f64>, GridError> {
        from_to_by(self.ymin, self.ymax, self.yres, DEFAULT_DIGITS)
    }

    /// Number of points [`Grid::to_points`] would return.
    ///
    /// Computed from the axis lengths alone; fails with
    /// [`GridError::TooManyPoints`] above [`MAX_POINTS`].
    pub fn point_count(&self) -> Result<usize, GridError> {
        let columns = sequence_len(self.xmin, self.xmax, self.xres)?;
        let rows = sequence_len(self.ymin, self.ymax, self.yres)?;

        match columns.checked_mul(rows) {
            Some(count) if count <= MAX_POINTS => Ok(count),
            Some(count) => Err(GridError::TooManyPoints { count: count as u64 }),
            None => Err(GridError::TooManyPoints { count: u64::MAX }),
        }
    }

    /// Returns points placed on grid vertices.
    ///
    /// Longitude varies slowest: all latitudes of the first column come
    /// first, then the next column. A vertex pushed out of the coordinate
    /// range by sequence rounding fails with [`GridError::VertexOutOfRange`].
    pub fn to_points(&self) -> Result<Vec<Point>, GridError> {
        let count = self.point_count()?;
        let xs = self.x_values()?;
        let ys = self.y_values()?;

        let mut points = Vec::with_capacity(count);
        for &x in &xs {
            for &y in &ys {
                let point = Point::new(x, y).map_err(|_| GridError::VertexOutOfRange { x, y })?;
                points.push(point);
            }
        }
        Ok(points)
    }
}

impl TryFrom<GridSpec> for Grid {
    type Error = ValidationError;

    fn try_from(spec: GridSpec) -> Result<Self, Self::Error> {
        Grid::new(spec)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
