use serde::{Deserialize, Serialize};

use crate::validate::{ValidationError, Validator};

/// A longitude/latitude pair. Always within the valid coordinate range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PointSpec")]
pub struct Point {
    x: f64,
    y: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct PointSpec {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Result<Self, ValidationError> {
        let mut v = Validator::new();
        let point = Self {
            x: v.longitude("x", x),
            y: v.latitude("y", y),
        };
        v.finish(point)
    }

    /// Longitude.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Latitude.
    pub fn y(&self) -> f64 {
        self.y
    }
}

impl TryFrom<PointSpec> for Point {
    type Error = ValidationError;

    fn try_from(spec: PointSpec) -> Result<Self, Self::Error> {
        Point::new(spec.x, spec.y)
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
