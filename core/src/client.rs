//! # Scene Service Client
//!
//! The outbound boundary of the submission driver. Everything that can
//! receive a [`CreateSceneRequest`] implements [`SceneSink`]; the driver only
//! ever talks to the trait.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use scenegen_common::scene::CreateSceneRequest;
use thiserror::Error;
use tracing::{debug, info};

/// Name of the environment variable holding the scene service endpoint.
pub const SCENES_API_URL_ENV: &str = "SCENES_API_URL";

/// A failed submission of a single scene.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("scene service responded with {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("failed to reach scene service: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to encode scene request: {0}")]
    Encode(#[from] serde_json::Error),
}

#[async_trait]
pub trait SceneSink: Send + Sync {
    async fn create_scene(&self, request: &CreateSceneRequest) -> Result<(), SubmitError>;
}

/// Posts requests as JSON to the scene service.
pub struct HttpSceneClient {
    client: reqwest::Client,
    url: String,
}

impl HttpSceneClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SceneSink for HttpSceneClient {
    /// Any non-2xx response is an error carrying the full response body.
    ///
    /// The request is bounded by the scene's `simulation_config.timeout`;
    /// a timeout of 0 leaves the request unbounded.
    async fn create_scene(&self, request: &CreateSceneRequest) -> Result<(), SubmitError> {
        let body = request.to_json()?;

        let mut builder = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);

        let timeout = request.simulation_config.timeout();
        if timeout > 0 {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        let response = builder.send().await?;
        let status = response.status();
        debug!(%status, url = %self.url, "scene service responded");

        if status.is_success() {
            return Ok(());
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<unreadable response body: {e}>"));
        Err(SubmitError::Status { status, body })
    }
}

/// Logs each payload instead of sending it.
pub struct DryRunSink;

#[async_trait]
impl SceneSink for DryRunSink {
    async fn create_scene(&self, request: &CreateSceneRequest) -> Result<(), SubmitError> {
        let payload = request.to_json()?;
        info!(points = request.pixel_points.len(), %payload, "dry run, request not sent");
        Ok(())
    }
}
