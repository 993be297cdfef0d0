//! Integration tests for the dogbreeds binary
//!
//! Runs the compiled CLI against a mock dog.ceo server.

use std::process::Output;

use tokio::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to run the CLI with given args and capture output
async fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dogbreeds"))
        .args(args)
        .env_remove("DOG_API_BASE_URL")
        .env_remove("RUST_LOG")
        .output()
        .await
        .expect("Failed to execute dogbreeds")
}

/// Mock server knowing `retriever` (two sub-breeds), `pug` (none) and
/// rejecting everything else as an unknown breed
async fn start_mock_api() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/breed/retriever/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": ["golden", "labrador"],
            "status": "success"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/breed/pug/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": [],
            "status": "success"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "status": "error",
            "message": "Breed not found (master breed does not exist)",
            "code": 404
        })))
        .mount(&server)
        .await;

    server
}

#[tokio::test]
async fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]).await;
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("dogbreeds"), "Help should mention dogbreeds");
    assert!(stdout.contains("--base-url"), "Help should mention --base-url");
    assert!(stdout.contains("--stats"), "Help should mention --stats");
}

#[tokio::test]
async fn test_missing_breed_is_a_usage_error() {
    let output = run_cli(&[]).await;
    assert_eq!(output.status.code(), Some(2));
}

#[tokio::test]
async fn test_invalid_base_url_prints_error_and_exits() {
    let output = run_cli(&["--base-url", "ftp://dog.ceo", "hound"]).await;
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid base URL"),
        "Should print error message about the base URL: {}",
        stderr
    );
}

#[tokio::test]
async fn test_text_output_lists_sub_breeds() {
    let server = start_mock_api().await;
    let uri = server.uri();

    let output = run_cli(&["--base-url", &uri, "Retriever", "pug"]).await;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec!["Retriever: golden, labrador", "pug: (no sub-breeds)"]
    );
}

#[tokio::test]
async fn test_repeated_breed_is_served_from_cache() {
    let server = start_mock_api().await;
    let uri = server.uri();

    let output = run_cli(&[
        "--base-url",
        &uri,
        "--stats",
        "retriever",
        " RETRIEVER ",
        "Retriever",
    ])
    .await;

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("calls made: 1"), "stderr was: {}", stderr);
    assert!(stderr.contains("cached breeds: 1"), "stderr was: {}", stderr);

    let requests = server.received_requests().await.expect("Recording enabled");
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_unknown_breed_fails_and_is_retried() {
    let server = start_mock_api().await;
    let uri = server.uri();

    let output = run_cli(&["--base-url", &uri, "--stats", "dragon", "retriever", "dragon"]).await;

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "retriever: golden, labrador");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("error: Breed not found").count(), 2);
    assert!(stderr.contains("calls made: 3"), "stderr was: {}", stderr);
}

#[tokio::test]
async fn test_blank_breed_does_not_reach_api() {
    let server = start_mock_api().await;
    let uri = server.uri();

    let output = run_cli(&["--base-url", &uri, "--stats", "   "]).await;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("calls made: 0"), "stderr was: {}", stderr);

    let requests = server.received_requests().await.expect("Recording enabled");
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_json_output_keeps_argument_order() {
    let server = start_mock_api().await;
    let uri = server.uri();

    let output = run_cli(&["--base-url", &uri, "--json", "pug", "dragon", "Retriever"]).await;

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(
        value,
        serde_json::json!([
            { "breed": "pug", "sub_breeds": [] },
            { "breed": "Retriever", "sub_breeds": ["golden", "labrador"] }
        ])
    );
}
