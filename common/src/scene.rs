//! # Scene Models
//!
//! Everything a domain configuration carries besides its grid, and the
//! request sent to the scene-creation service.

pub mod domain;
pub mod meteorology;
pub mod parameters;
pub mod request;
pub mod simulation;

pub use domain::{DomainConfig, DomainSpec, GriddedScene};
pub use meteorology::{MeteorologyModel, UnknownMeteorologyModel};
pub use parameters::{PARAMETER_NAMES, SimulationParameters};
pub use request::CreateSceneRequest;
pub use simulation::{DEFAULT_TIMEOUT_SECS, SimulationConfig, SimulationSpec};
