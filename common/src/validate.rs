//! # Field Validation
//!
//! Geographic and physical constraints shared by the configuration models.
//!
//! Models are validated in a single pass: a [`Validator`] walks every field,
//! records each [`Violation`] it finds and only hands back the finished value
//! when nothing was recorded. A configuration is therefore either fully valid
//! or rejected with the complete list of problems.

use std::fmt;
use std::ops::Range;

use thiserror::Error;

/// Valid longitudes, half-open: `-180 <= x < 180`.
pub const LONGITUDE_RANGE: Range<f64> = -180.0..180.0;
/// Exclusive latitude bounds: `-90 < y < 90`.
pub const LATITUDE_BOUNDS: (f64, f64) = (-90.0, 90.0);
/// Smallest resolution accepted for simulation footprints.
pub const MIN_RESOLUTION: f64 = 0.001;

/// A constraint a field can violate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    Longitude,
    Latitude,
    Resolution,
    Positive,
    MeteorologyModel,
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Longitude => write!(f, "must be a longitude in [-180, 180)"),
            Constraint::Latitude => write!(f, "must be a latitude in (-90, 90)"),
            Constraint::Resolution => write!(f, "must be a resolution of at least {MIN_RESOLUTION}"),
            Constraint::Positive => write!(f, "must be a finite number greater than 0"),
            Constraint::MeteorologyModel => write!(f, "must be one of: hrrr, hrrr_forecast"),
        }
    }
}

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// Dotted path of the field, e.g. `pixel_grid.xmin`.
    pub field: String,
    pub constraint: Constraint,
    /// The rejected value, as written.
    pub value: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {} {}", self.field, self.value, self.constraint)
    }
}

/// Every violation found while validating one configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Returns `true` if the field at `path` was rejected.
    pub fn has_field(&self, path: &str) -> bool {
        self.violations.iter().any(|v| v.field == path)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.violations.len();
        let unit = if count == 1 { "field" } else { "fields" };
        write!(f, "{count} invalid {unit}: ")?;

        for (idx, violation) in self.violations.iter().enumerate() {
            if idx > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

/// Collects violations while a model is being built.
#[derive(Debug, Default)]
pub struct Validator {
    scope: Vec<&'static str>,
    violations: Vec<Violation>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` with every recorded field prefixed by `name`.
    pub fn scope<T>(&mut self, name: &'static str, f: impl FnOnce(&mut Self) -> T) -> T {
        self.scope.push(name);
        let out = f(self);
        self.scope.pop();
        out
    }

    pub fn longitude(&mut self, field: &'static str, value: f64) -> f64 {
        if !LONGITUDE_RANGE.contains(&value) {
            self.reject(field, Constraint::Longitude, value);
        }
        value
    }

    pub fn latitude(&mut self, field: &'static str, value: f64) -> f64 {
        let (min, max) = LATITUDE_BOUNDS;
        if !(value > min && value < max) {
            self.reject(field, Constraint::Latitude, value);
        }
        value
    }

    pub fn resolution(&mut self, field: &'static str, value: f64) -> f64 {
        if !(value >= MIN_RESOLUTION && value.is_finite()) {
            self.reject(field, Constraint::Resolution, value);
        }
        value
    }

    pub fn positive(&mut self, field: &'static str, value: f64) -> f64 {
        if !(value > 0.0 && value.is_finite()) {
            self.reject(field, Constraint::Positive, value);
        }
        value
    }

    pub fn reject(&mut self, field: &'static str, constraint: Constraint, value: impl fmt::Display) {
        let field = match self.scope.is_empty() {
            true => field.to_string(),
            false => format!("{}.{field}", self.scope.join(".")),
        };

        self.violations.push(Violation {
            field,
            constraint,
            value: value.to_string(),
        });
    }

    /// Releases `value` only if no violation was recorded.
    pub fn finish<T>(self, value: T) -> Result<T, ValidationError> {
        if self.violations.is_empty() {
            Ok(value)
        } else {
            Err(ValidationError {
                violations: self.violations,
            })
        }
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
