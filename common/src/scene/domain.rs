//! # Domain Configuration
//!
//! A named region's grid, simulation settings and meteorology source.

use serde::{Deserialize, Serialize};

use super::meteorology::MeteorologyModel;
use super::simulation::{SimulationConfig, SimulationSpec};
use crate::geo::{Grid, GridSpec};
use crate::validate::{Constraint, ValidationError, Validator};

fn enabled_by_default() -> bool {
    true
}

/// One domain entry as written in a configuration file, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct DomainSpec {
    #[serde(default = "enabled_by_default")]
    pub is_enabled: bool,
    pub pixel_grid: GridSpec,
    pub simulation_config: SimulationSpec,
    pub meteorology_model: String,
}

/// A grid plus everything needed to simulate it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GriddedScene {
    pub pixel_grid: Grid,
    pub simulation_config: SimulationConfig,
    pub meteorology_model: MeteorologyModel,
}

/// A validated domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DomainSpec")]
pub struct DomainConfig {
    #[serde(flatten)]
    pub scene: GriddedScene,
    pub is_enabled: bool,
}

impl DomainConfig {
    /// Validates every field of `spec` in one pass.
    ///
    /// On failure the error lists all rejected fields, not just the first.
    pub fn new(spec: DomainSpec) -> Result<Self, ValidationError> {
        let mut v = Validator::new();

        let pixel_grid = v.scope("pixel_grid", |v| Grid::check(spec.pixel_grid, v));
        let simulation_config =
            v.scope("simulation_config", |v| SimulationConfig::check(spec.simulation_config, v));

        // Placeholder never escapes: finish() fails once a violation is recorded
        let meteorology_model = spec.meteorology_model.parse().unwrap_or_else(|_| {
            v.reject(
                "meteorology_model",
                Constraint::MeteorologyModel,
                &spec.meteorology_model,
            );
            MeteorologyModel::Hrrr
        });

        v.finish(Self {
            scene: GriddedScene {
                pixel_grid,
                simulation_config,
                meteorology_model,
            },
            is_enabled: spec.is_enabled,
        })
    }
}

impl TryFrom<DomainSpec> for DomainConfig {
    type Error = ValidationError;

    fn try_from(spec: DomainSpec) -> Result<Self, Self::Error> {
        DomainConfig::new(spec)
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

#[cfg(test)]
mod tests {
    use super::*;

    const DOMAIN: &str = "
pixel_grid:
  xmin: -112.0
  xmax: -111.8
  xres: 0.1
  ymin: 40.6
  ymax: 40.8
  yres: 0.1
simulation_config:
  n_hours: -24
  xmn: -113.0
  xmx: -111.0
  xres: 0.01
  ymn: 40.0
  ymx: 41.5
  yres: 0.01
meteorology_model: hrrr
";

    fn spec(yaml: &str) -> DomainSpec {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_valid_domain() {
        let domain = DomainConfig::new(spec(DOMAIN)).unwrap();
        assert!(domain.is_enabled);
        assert_eq!(domain.scene.meteorology_model, MeteorologyModel::Hrrr);
        assert_eq!(domain.scene.pixel_grid.point_count().unwrap(), 9);
    }

    #[test]
    fn test_disabled_domain() {
        let domain = DomainConfig::new(spec(&format!("is_enabled: false{DOMAIN}"))).unwrap();
        assert!(!domain.is_enabled);
    }

    #[test]
    fn test_out_of_range_grid_rejected() {
        let err = DomainConfig::new(spec(&DOMAIN.replace("xmin: -112.0", "xmin: -181.0"))).unwrap_err();
        assert_eq!(err.violations().len(), 1);
        assert!(err.has_field("pixel_grid.xmin"));
    }

    #[test]
    fn test_every_violation_reported() {
        let yaml = DOMAIN
            .replace("ymax: 40.8", "ymax: 90.0")
            .replace("yres: 0.01", "yres: 0.00001")
            .replace("meteorology_model: hrrr", "meteorology_model: gfs");

        let err = DomainConfig::new(spec(&yaml)).unwrap_err();
        assert!(err.has_field("pixel_grid.ymax"));
        assert!(err.has_field("simulation_config.yres"));
        assert!(err.has_field("meteorology_model"));
        assert_eq!(err.violations().len(), 3);
    }

    #[test]
    fn test_deserialize_through_validation() {
        let domain: DomainConfig = serde_yaml::from_str(DOMAIN).unwrap();
        assert_eq!(domain.scene.simulation_config.n_hours(), -24);

        let bad = DOMAIN.replace("meteorology_model: hrrr", "meteorology_model: nam");
        assert!(serde_yaml::from_str::<DomainConfig>(&bad).is_err());
    }
}
