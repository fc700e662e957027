//! # Simulation Configuration
//!
//! Footprint bounds and engine parameters forwarded to STILT/HYSPLIT.

use std::collections::BTreeMap;

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::parameters::SimulationParameters;
use crate::validate::{ValidationError, Validator};

/// Seconds the scene service may spend on one request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_time_integrate() -> bool {
    true
}

fn is_default_timeout(timeout: &u64) -> bool {
    *timeout == DEFAULT_TIMEOUT_SECS
}

fn is_default_time_integrate(time_integrate: &bool) -> bool {
    *time_integrate
}

/// Simulation settings as written in a configuration file, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationSpec {
    pub n_hours: i64,
    pub xmn: f64,
    pub xmx: f64,
    pub xres: f64,
    pub ymn: f64,
    pub ymx: f64,
    pub yres: f64,
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    #[serde(default = "default_time_integrate")]
    pub time_integrate: bool,
    #[serde(flatten)]
    pub parameters: SimulationParameters,
    /// Keys that match no known setting. Never forwarded.
    #[serde(flatten)]
    pub unrecognized: BTreeMap<String, IgnoredAny>,
}

/// Validated simulation settings.
///
/// Serializes with every value left at its default omitted, so the engine
/// applies its own defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SimulationSpec")]
pub struct SimulationConfig {
    n_hours: i64,
    xmn: f64,
    xmx: f64,
    xres: f64,
    ymn: f64,
    ymx: f64,
    yres: f64,
    #[serde(skip_serializing_if = "is_default_timeout")]
    timeout: u64,
    #[serde(skip_serializing_if = "is_default_time_integrate")]
    time_integrate: bool,
    #[serde(flatten)]
    parameters: SimulationParameters,
}

impl SimulationConfig {
    pub fn new(spec: SimulationSpec) -> Result<Self, ValidationError> {
        let mut v = Validator::new();
        let config = Self::check(spec, &mut v);
        v.finish(config)
    }

    pub(crate) fn check(spec: SimulationSpec, v: &mut Validator) -> Self {
        for key in spec.unrecognized.keys() {
            warn!(parameter = %key, "ignoring unrecognized simulation parameter");
        }

        Self {
            n_hours: spec.n_hours,
            xmn: v.longitude("xmn", spec.xmn),
            xmx: v.longitude("xmx", spec.xmx),
            xres: v.resolution("xres", spec.xres),
            ymn: v.latitude("ymn", spec.ymn),
            ymx: v.latitude("ymx", spec.ymx),
            yres: v.resolution("yres", spec.yres),
            timeout: spec.timeout,
            time_integrate: spec.time_integrate,
            parameters: spec.parameters,
        }
    }

    /// Simulation duration in hours. Negative runs backward in time.
    pub fn n_hours(&self) -> i64 {
        self.n_hours
    }

    /// Footprint longitude bounds.
    pub fn x_bounds(&self) -> (f64, f64) {
        (self.xmn, self.xmx)
    }

    /// Footprint latitude bounds.
    pub fn y_bounds(&self) -> (f64, f64) {
        (self.ymn, self.ymx)
    }

    /// Footprint resolution as `(xres, yres)`.
    pub fn resolution(&self) -> (f64, f64) {
        (self.xres, self.yres)
    }

    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    pub fn time_integrate(&self) -> bool {
        self.time_integrate
    }

    pub fn parameters(&self) -> &SimulationParameters {
        &self.parameters
    }
}

impl TryFrom<SimulationSpec> for SimulationConfig {
    type Error = ValidationError;

    fn try_from(spec: SimulationSpec) -> Result<Self, Self::Error> {
        SimulationConfig::new(spec)
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
