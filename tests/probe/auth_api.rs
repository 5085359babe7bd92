use processor_probe::config::{ApiSettings, RunConfiguration};
use processor_probe::diagnostics::{ApiCheck, check_authenticated_api};
use processor_probe::security::Secret;
use processor_probe::transport::build_probe_client;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::probe_harness::closed_port_url;

fn config(host: &str, session: &str, refresh: &str) -> RunConfiguration {
    RunConfiguration {
        api_host: host.to_string(),
        session_token: Secret::new(session),
        refresh_token: Secret::new(refresh),
        ..RunConfiguration::default()
    }
}

fn settings(server: &MockServer) -> ApiSettings {
    ApiSettings {
        identity_endpoint: Some(format!("{}/oauth2/token", server.uri())),
        timeout_secs: 5,
        identity_timeout_secs: 5,
        ..ApiSettings::default()
    }
}

fn user_body() -> serde_json::Value {
    serde_json::json!({
        "id": "N:user:42",
        "email": "probe@example.org",
        "firstName": "Probe",
        "lastName": "User"
    })
}

async fn mount_user(server: &MockServer, token: &str, status: u16) {
    let template = if status == 200 {
        ResponseTemplate::new(200).set_body_json(user_body())
    } else {
        ResponseTemplate::new(status)
    };
    Mock::given(method("GET"))
        .and(path("/user"))
        .and(header("Authorization", format!("Bearer {token}").as_str()))
        .respond_with(template)
        .mount(server)
        .await;
}

async fn mount_refresh(server: &MockServer, new_token: &str) {
    Mock::given(method("GET"))
        .and(path("/authentication/cognito-config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "region": "us-east-1",
            "userPool": { "region": "us-east-1", "appClientId": "client-1" }
        })))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "AuthenticationResult": { "AccessToken": new_token }
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn ok_response_passes() {
    let server = MockServer::start().await;
    mount_user(&server, "good", 200).await;

    let outcome = check_authenticated_api(
        &config(&server.uri(), "good", ""),
        &settings(&server),
        &build_probe_client(),
    )
    .await;
    assert_eq!(outcome, ApiCheck::Passed);
}

#[tokio::test]
async fn unauthorized_without_refresh_token_fails() {
    let server = MockServer::start().await;
    mount_user(&server, "stale", 401).await;

    let outcome = check_authenticated_api(
        &config(&server.uri(), "stale", ""),
        &settings(&server),
        &build_probe_client(),
    )
    .await;
    assert_eq!(outcome, ApiCheck::Failed);
}

#[tokio::test]
async fn unauthorized_then_refresh_then_ok_passes() {
    let server = MockServer::start().await;
    mount_user(&server, "stale", 401).await;
    mount_user(&server, "fresh", 200).await;
    mount_refresh(&server, "fresh").await;

    let outcome = check_authenticated_api(
        &config(&server.uri(), "stale", "refresh-1"),
        &settings(&server),
        &build_probe_client(),
    )
    .await;
    assert_eq!(outcome, ApiCheck::Passed);
}

#[tokio::test]
async fn refreshed_token_still_rejected_fails() {
    let server = MockServer::start().await;
    mount_user(&server, "stale", 401).await;
    mount_user(&server, "fresh", 401).await;
    mount_refresh(&server, "fresh").await;

    let outcome = check_authenticated_api(
        &config(&server.uri(), "stale", "refresh-1"),
        &settings(&server),
        &build_probe_client(),
    )
    .await;
    assert_eq!(outcome, ApiCheck::Failed);
}

#[tokio::test]
async fn failed_refresh_fails() {
    let server = MockServer::start().await;
    mount_user(&server, "stale", 401).await;
    Mock::given(method("GET"))
        .and(path("/authentication/cognito-config"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let outcome = check_authenticated_api(
        &config(&server.uri(), "stale", "refresh-1"),
        &settings(&server),
        &build_probe_client(),
    )
    .await;
    assert_eq!(outcome, ApiCheck::Failed);
}

#[tokio::test]
async fn other_status_fails_without_refresh_attempt() {
    let server = MockServer::start().await;
    mount_user(&server, "tok", 403).await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let outcome = check_authenticated_api(
        &config(&server.uri(), "tok", "refresh-1"),
        &settings(&server),
        &build_probe_client(),
    )
    .await;
    assert_eq!(outcome, ApiCheck::Failed);
}

#[tokio::test]
async fn connection_failure_is_skip_not_failure() {
    let host = closed_port_url("");
    let outcome = check_authenticated_api(
        &config(&host, "tok", "refresh-1"),
        &ApiSettings::default(),
        &build_probe_client(),
    )
    .await;
    assert_eq!(outcome, ApiCheck::NotRun);
    assert!(!outcome.is_failure());
}

#[tokio::test]
async fn stalled_response_after_connect_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(user_body())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;
    let api = ApiSettings {
        timeout_secs: 1,
        ..settings(&server)
    };

    let outcome = check_authenticated_api(
        &config(&server.uri(), "slow", ""),
        &api,
        &build_probe_client(),
    )
    .await;
    assert_eq!(outcome, ApiCheck::Failed);
}
