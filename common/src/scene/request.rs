use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::domain::GriddedScene;
use super::meteorology::MeteorologyModel;
use super::simulation::SimulationConfig;
use crate::geo::{GridError, Point};

/// Body of a scene-creation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateSceneRequest {
    pub pixel_points: Vec<Point>,
    pub simulation_config: SimulationConfig,
    pub meteorology_model: MeteorologyModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene_id: Option<Uuid>,
    #[serde(rename = "time", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl CreateSceneRequest {
    /// Expands the scene's pixel grid and copies its settings verbatim.
    pub fn from_scene(scene: &GriddedScene) -> Result<Self, GridError> {
        Ok(Self {
            pixel_points: scene.pixel_grid.to_points()?,
            simulation_config: scene.simulation_config.clone(),
            meteorology_model: scene.meteorology_model,
            scene_id: None,
            timestamp: None,
        })
    }

    pub fn with_scene_id(mut self, scene_id: Uuid) -> Self {
        self.scene_id = Some(scene_id);
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
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
    use crate::scene::DomainConfig;
    use chrono::TimeZone;
    use serde_json::{Value, json};

    fn scene(extra_simulation: &str) -> GriddedScene {
        let yaml = format!(
            "
pixel_grid: {{xmin: 0.0, xmax: 1.0, xres: 0.5, ymin: 0.0, ymax: 1.0, yres: 1.0}}
simulation_config:
  n_hours: -24
  xmn: -1.0
  xmx: 2.0
  xres: 0.01
  ymn: -1.0
  ymx: 2.0
  yres: 0.01
{extra_simulation}
meteorology_model: hrrr_forecast
"
        );
        serde_yaml::from_str::<DomainConfig>(&yaml).unwrap().scene
    }

    #[test]
    fn test_payload_shape() {
        let request = CreateSceneRequest::from_scene(&scene("")).unwrap();
        let json: Value = serde_json::from_str(&request.to_json().unwrap()).unwrap();

        assert_eq!(
            json,
            json!({
                "pixel_points": [
                    {"x": 0.0, "y": 0.0}, {"x": 0.0, "y": 1.0},
                    {"x": 0.5, "y": 0.0}, {"x": 0.5, "y": 1.0},
                    {"x": 1.0, "y": 0.0}, {"x": 1.0, "y": 1.0},
                ],
                "simulation_config": {
                    "n_hours": -24,
                    "xmn": -1.0, "xmx": 2.0, "xres": 0.01,
                    "ymn": -1.0, "ymx": 2.0, "yres": 0.01,
                },
                "meteorology_model": "hrrr_forecast",
            })
        );
    }

    #[test]
    fn test_explicit_optional_fields_are_kept() {
        let request = CreateSceneRequest::from_scene(&scene("  timeout: 120\n  kmix0: 150\n  wvert: true")).unwrap();
        let json = serde_json::to_value(&request).unwrap();

        let simulation = &json["simulation_config"];
        assert_eq!(simulation["timeout"], json!(120));
        assert_eq!(simulation["kmix0"], json!(150.0));
        assert_eq!(simulation["wvert"], json!(true));
        assert!(simulation.get("time_integrate").is_none());
    }

    #[test]
    fn test_scene_id_and_timestamp() {
        let id = Uuid::nil();
        let time = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();
        let request = CreateSceneRequest::from_scene(&scene(""))
            .unwrap()
            .with_scene_id(id)
            .with_timestamp(time);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["scene_id"], json!("00000000-0000-0000-0000-000000000000"));
        assert_eq!(json["time"], json!("2024-07-01T12:00:00Z"));
    }
}
