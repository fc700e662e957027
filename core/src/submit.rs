//! # Scene Submission Service
//!
//! Implements the "submit every domain" use case.
//!
//! Domains are processed one at a time, in declaration order:
//! 1. disabled domains are logged and skipped,
//! 2. the pixel grid is expanded and wrapped into a [`CreateSceneRequest`],
//! 3. the request goes to the [`SceneSink`].
//!
//! A rejected submission only fails its own domain. A grid that cannot be
//! expanded aborts the run.

use scenegen_common::config::Config;
use scenegen_common::geo::GridError;
use scenegen_common::scene::{CreateSceneRequest, DomainConfig};
use thiserror::Error;
use tracing::{error, info};
use uuid::Uuid;

use crate::client::SceneSink;
use crate::loader::Domains;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("failed to expand the pixel grid of domain `{domain}`")]
    Grid {
        domain: String,
        #[source]
        source: GridError,
    },
}

/// Outcome of one run, by domain name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionReport {
    pub submitted: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<String>,
}

impl SubmissionReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Number of domains a submission was attempted for.
    pub fn attempted(&self) -> usize {
        self.submitted.len() + self.failed.len()
    }
}

pub struct SubmissionService {
    sink: Box<dyn SceneSink>,
}

impl SubmissionService {
    pub fn new(sink: Box<dyn SceneSink>) -> Self {
        Self { sink }
    }

    /// Submits every enabled domain in `domains`.
    pub async fn submit_all(
        &self,
        domains: &Domains,
        cfg: &Config,
    ) -> Result<SubmissionReport, DriverError> {
        let mut report = SubmissionReport::default();

        for (name, domain) in domains.iter() {
            if !domain.is_enabled {
                info!(domain = name, "skipping disabled domain");
                report.skipped.push(name.to_string());
                continue;
            }

            info!(
                domain = name,
                model = %domain.scene.meteorology_model,
                "creating scene"
            );
            let request = build_request(name, domain, cfg)?;

            match self.sink.create_scene(&request).await {
                Ok(()) => {
                    info!(domain = name, points = request.pixel_points.len(), "scene created");
                    report.submitted.push(name.to_string());
                }
                Err(e) => {
                    error!(domain = name, error = %e, "failed to create scene");
                    report.failed.push(name.to_string());
                }
            }
        }

        Ok(report)
    }
}

fn build_request(
    name: &str,
    domain: &DomainConfig,
    cfg: &Config,
) -> Result<CreateSceneRequest, DriverError> {
    let mut request =
        CreateSceneRequest::from_scene(&domain.scene).map_err(|source| DriverError::Grid {
            domain: name.to_string(),
            source,
        })?;

    if cfg.assign_ids {
        request = request.with_scene_id(Uuid::new_v4());
    }
    if let Some(timestamp) = cfg.timestamp {
        request = request.with_timestamp(timestamp);
    }
    Ok(request)
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
    use crate::client::SubmitError;
    use crate::loader::parse_domains;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::sync::{Arc, Mutex};

    /// Records every request and rejects those for `reject_id`.
    #[derive(Clone, Default)]
    struct RecordingSink {
        requests: Arc<Mutex<Vec<CreateSceneRequest>>>,
        reject_id: Option<&'static str>,
    }

    #[async_trait]
    impl SceneSink for RecordingSink {
        async fn create_scene(&self, request: &CreateSceneRequest) -> Result<(), SubmitError> {
            self.requests.lock().unwrap().push(request.clone());

            let id = request.simulation_config.parameters().simulation_id.as_deref();
            if id.is_some() && id == self.reject_id {
                return Err(SubmitError::Status {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: "boom".into(),
                });
            }
            Ok(())
        }
    }

    fn domain(name: &str, enabled: bool, xmax: f64) -> String {
        format!(
            "
{name}:
  is_enabled: {enabled}
  pixel_grid: {{xmin: 178.0, xmax: {xmax}, xres: 1.0, ymin: 0.0, ymax: 1.0, yres: 1.0}}
  simulation_config: {{n_hours: 24, xmn: 170.0, xmx: 179.0, xres: 0.1, ymn: 0.0, ymx: 1.0, yres: 0.1, simulation_id: {name}}}
  meteorology_model: hrrr
"
        )
    }

    #[tokio::test]
    async fn test_disabled_domains_are_skipped() {
        let domains = parse_domains(&[domain("a", true, 179.0), domain("b", false, 179.0)].concat()).unwrap();
        let sink = RecordingSink::default();
        let service = SubmissionService::new(Box::new(sink.clone()));

        let report = service.submit_all(&domains, &Config::default()).await.unwrap();

        assert_eq!(report.submitted, ["a"]);
        assert_eq!(report.skipped, ["b"]);
        assert!(report.is_success());

        let requests = sink.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].pixel_points.len(), 4);
        assert_eq!(requests[0].scene_id, None);
    }

    #[tokio::test]
    async fn test_failure_is_isolated_to_its_domain() {
        let text = [domain("a", true, 179.0), domain("b", true, 179.0), domain("c", true, 179.0)].concat();
        let domains = parse_domains(&text).unwrap();
        let sink = RecordingSink {
            reject_id: Some("b"),
            ..Default::default()
        };
        let service = SubmissionService::new(Box::new(sink.clone()));

        let report = service.submit_all(&domains, &Config::default()).await.unwrap();

        assert_eq!(report.submitted, ["a", "c"]);
        assert_eq!(report.failed, ["b"]);
        assert_eq!(report.attempted(), 3);
        assert!(!report.is_success());
        assert_eq!(sink.requests.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_grid_error_aborts_run() {
        // 1.9 rounds to 2 steps, the last column lands on longitude 180
        let text = [domain("a", true, 179.0), domain("bad", true, 179.9), domain("c", true, 179.0)].concat();
        let domains = parse_domains(&text).unwrap();
        let sink = RecordingSink::default();
        let service = SubmissionService::new(Box::new(sink.clone()));

        let err = service.submit_all(&domains, &Config::default()).await.unwrap_err();

        assert!(matches!(err, DriverError::Grid { ref domain, .. } if domain == "bad"));
        assert_eq!(sink.requests.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_requests_are_stamped_from_config() {
        let domains = parse_domains(&[domain("a", true, 179.0), domain("b", true, 179.0)].concat()).unwrap();
        let sink = RecordingSink::default();
        let service = SubmissionService::new(Box::new(sink.clone()));
        let timestamp = "2024-07-01T00:00:00Z".parse().unwrap();
        let cfg = Config {
            assign_ids: true,
            timestamp: Some(timestamp),
        };

        service.submit_all(&domains, &cfg).await.unwrap();

        let requests = sink.requests.lock().unwrap();
        let (first, second) = (&requests[0], &requests[1]);
        assert!(first.scene_id.is_some());
        assert_ne!(first.scene_id, second.scene_id);
        assert_eq!(first.timestamp, Some(timestamp));
    }
}
