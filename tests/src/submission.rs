use scenegen_common::config::Config;
use scenegen_core::client::HttpSceneClient;
use scenegen_core::submit::SubmissionService;
use serde_json::json;

use crate::util::{fixture_domains, for_domain};

fn service(url: String) -> SubmissionService {
    SubmissionService::new(Box::new(HttpSceneClient::new(url)))
}

#[tokio::test]
async fn submits_every_enabled_domain() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/scenes")
        .match_header("content-type", "application/json")
        .with_status(201)
        .expect(2)
        .create_async()
        .await;

    let report = service(format!("{}/scenes", server.url()))
        .submit_all(&fixture_domains(), &Config::default())
        .await
        .unwrap();

    assert_eq!(report.submitted, ["salt_lake_city", "provo"]);
    assert_eq!(report.skipped, ["uinta_basin"]);
    assert!(report.is_success());
    mock.assert_async().await;
}

#[tokio::test]
async fn payload_carries_points_and_explicit_settings() {
    let mut server = mockito::Server::new_async().await;
    let provo = server
        .mock("POST", "/scenes")
        .match_body(mockito::Matcher::PartialJson(json!({
            "pixel_points": [
                {"x": -111.7, "y": 40.2},
                {"x": -111.7, "y": 40.3},
                {"x": -111.6, "y": 40.2},
                {"x": -111.6, "y": 40.3},
            ],
            "simulation_config": {"n_hours": 6, "timeout": 5, "simulation_id": "provo"},
            "meteorology_model": "hrrr_forecast",
        })))
        .with_status(200)
        .expect(1)
        .create_async()
        .await;
    let others = server
        .mock("POST", "/scenes")
        .match_body(for_domain("salt_lake_city"))
        .with_status(200)
        .expect(1)
        .create_async()
        .await;

    let report = service(format!("{}/scenes", server.url()))
        .submit_all(&fixture_domains(), &Config::default())
        .await
        .unwrap();

    assert!(report.is_success());
    provo.assert_async().await;
    others.assert_async().await;
}

#[tokio::test]
async fn rejected_domain_does_not_stop_the_run() {
    let mut server = mockito::Server::new_async().await;
    let rejected = server
        .mock("POST", "/scenes")
        .match_body(for_domain("salt_lake_city"))
        .with_status(500)
        .with_body("meteorology unavailable")
        .expect(1)
        .create_async()
        .await;
    let accepted = server
        .mock("POST", "/scenes")
        .match_body(for_domain("provo"))
        .with_status(201)
        .expect(1)
        .create_async()
        .await;

    let report = service(format!("{}/scenes", server.url()))
        .submit_all(&fixture_domains(), &Config::default())
        .await
        .unwrap();

    assert_eq!(report.failed, ["salt_lake_city"]);
    assert_eq!(report.submitted, ["provo"]);
    assert!(!report.is_success());
    rejected.assert_async().await;
    accepted.assert_async().await;
}

#[tokio::test]
async fn unreachable_service_fails_each_domain() {
    // Nothing listens on the discard port
    let report = service("http://127.0.0.1:9/scenes".to_string())
        .submit_all(&fixture_domains(), &Config::default())
        .await
        .unwrap();

    assert_eq!(report.failed, ["salt_lake_city", "provo"]);
    assert!(report.submitted.is_empty());
}
