use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Source of the meteorological fields driving a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeteorologyModel {
    /// High-Resolution Rapid Refresh analysis.
    #[serde(rename = "hrrr", alias = "HRRR")]
    Hrrr,
    /// High-Resolution Rapid Refresh forecast.
    #[serde(rename = "hrrr_forecast", alias = "HRRR_FORECAST")]
    HrrrForecast,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown meteorology model: {0}")]
pub struct UnknownMeteorologyModel(pub String);

impl MeteorologyModel {
    pub const ALL: [MeteorologyModel; 2] = [MeteorologyModel::Hrrr, MeteorologyModel::HrrrForecast];

    /// Wire encoding understood by the scene service.
    pub fn as_str(&self) -> &'static str {
        match self {
            MeteorologyModel::Hrrr => "hrrr",
            MeteorologyModel::HrrrForecast => "hrrr_forecast",
        }
    }
}

impl fmt::Display for MeteorologyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeteorologyModel {
    type Err = UnknownMeteorologyModel;

    /// Accepts the wire value (`hrrr`) or the variant name (`HRRR`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hrrr" | "HRRR" => Ok(MeteorologyModel::Hrrr),
            "hrrr_forecast" | "HRRR_FORECAST" => Ok(MeteorologyModel::HrrrForecast),
            _ => Err(UnknownMeteorologyModel(s.to_string())),
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
