use processor_probe::app::{InvocationPayload, handle_invocation};
use processor_probe::config::RunConfiguration;
use processor_probe::runtime::{DeploymentMode, RunId};
use wiremock::MockServer;

use super::probe_harness::{Workspace, offline_settings, online_settings, runner};

fn payload(ws: &Workspace, input_dir: &str) -> InvocationPayload {
    InvocationPayload::parse(
        &serde_json::json!({
            "inputDir": input_dir,
            "outputDir": ws.output.display().to_string(),
            "integrationId": "int-lambda-7",
        })
        .to_string(),
    )
    .unwrap()
}

fn base(mode: DeploymentMode) -> RunConfiguration {
    RunConfiguration {
        environment: "test".into(),
        region: "us-east-1".into(),
        deployment_mode: mode,
        ..RunConfiguration::default()
    }
}

#[tokio::test]
async fn successful_invocation_echoes_integration_id() {
    let ws = Workspace::with_files(&["one.bin", "two.bin"]);
    let run_id = RunId::new("feedbeef").unwrap();

    let response = handle_invocation(
        &runner(offline_settings()),
        payload(&ws, &ws.input.display().to_string()),
        base(DeploymentMode::Compliant),
        &run_id,
    )
    .await;

    assert!(response.is_success(), "response: {response:?}");
    assert_eq!(response.integration_id, "int-lambda-7");
    assert!(response.failures.is_empty());
    assert!(ws.output.join("feedbeef_one.bin").exists());
    assert!(ws.output.join("feedbeef_two.bin").exists());
}

#[tokio::test]
async fn missing_input_directory_reports_failure() {
    let ws = Workspace::with_files(&[]);
    let missing = ws.input.join("does-not-exist").display().to_string();

    let response = handle_invocation(
        &runner(offline_settings()),
        payload(&ws, &missing),
        base(DeploymentMode::Compliant),
        &RunId::new("deadbeef").unwrap(),
    )
    .await;

    assert!(!response.is_success());
    assert_eq!(response.status, "failure");
    assert_eq!(response.integration_id, "int-lambda-7");
    assert_eq!(response.failures, ["directory_access"]);
}

#[tokio::test]
async fn basic_mode_with_network_fails_under_serverless() {
    let server = MockServer::start().await;
    let ws = Workspace::with_files(&["a.txt"]);

    let response = handle_invocation(
        &runner(online_settings(&server).await),
        payload(&ws, &ws.input.display().to_string()),
        base(DeploymentMode::Basic),
        &RunId::new("cafecafe").unwrap(),
    )
    .await;

    assert_eq!(response.failures, ["network_policy"]);
    let rendered = serde_json::to_value(&response).unwrap();
    assert_eq!(rendered["status"], "failure");
    assert_eq!(rendered["integrationId"], "int-lambda-7");
}
