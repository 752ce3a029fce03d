//! Integration tests for the blocking client.
//!
//! The mock server is async, so each test runs on a multi-thread runtime
//! and drives the blocking client from `spawn_blocking`.

use toolgate_client::blocking::BlockingToolgateClient;
use toolgate_client::{ToolgateConfig, TransportError};
use toolgate_core::{tool_args, DecisionRequest, METHOD_TOOLS_CALL};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn run_blocking<T, F>(f: F) -> T
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    tokio::task::spawn_blocking(f).await.expect("join failed")
}

#[tokio::test(flavor = "multi_thread")]
async fn check_allow() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/check"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "verdict": "allow",
            "rule": "allow-read-file",
        })))
        .mount(&mock_server)
        .await;

    let url = mock_server.uri();
    let result = run_blocking(move || {
        let client = BlockingToolgateClient::new(ToolgateConfig::default().with_url(url))
            .expect("failed to create client");
        client.check(&DecisionRequest::new(METHOD_TOOLS_CALL).with_tool("read_file"))
    })
    .await
    .expect("check failed");

    assert!(result.allowed());
    assert_eq!(result.rule, "allow-read-file");
}

#[tokio::test(flavor = "multi_thread")]
async fn check_deny_preserves_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/check"))
        .and(body_json(serde_json::json!({
            "method": "tools/call",
            "tool": "read_file",
            "arguments": {"path": "/home/user/.ssh/id_rsa"},
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "verdict": "deny",
            "rule": "block-ssh-keys",
            "message": "SSH key access blocked",
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = mock_server.uri();
    let result = run_blocking(move || {
        let client = BlockingToolgateClient::new(ToolgateConfig::default().with_url(url))
            .expect("failed to create client");
        client.check(
            &DecisionRequest::new(METHOD_TOOLS_CALL)
                .with_tool("read_file")
                .with_arguments(tool_args! { path: "/home/user/.ssh/id_rsa" }),
        )
    })
    .await
    .expect("check failed");

    assert!(result.denied());
    assert_eq!(result.message, "SSH key access blocked");
}

#[tokio::test(flavor = "multi_thread")]
async fn check_minimal_omits_tool_and_arguments() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/check"))
        .and(body_json(serde_json::json!({"method": "initialize"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"verdict": "allow"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = mock_server.uri();
    let result = run_blocking(move || {
        let client = BlockingToolgateClient::new(ToolgateConfig::default().with_url(url))
            .expect("failed to create client");
        client.check(&DecisionRequest::new("initialize"))
    })
    .await
    .expect("check failed");

    assert!(result.allowed());
}

#[tokio::test(flavor = "multi_thread")]
async fn non_2xx_is_a_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/check"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&mock_server)
        .await;

    let url = mock_server.uri();
    let err = run_blocking(move || {
        let client = BlockingToolgateClient::new(ToolgateConfig::default().with_url(url))
            .expect("failed to create client");
        client.check(&DecisionRequest::new(METHOD_TOOLS_CALL).with_tool("bad"))
    })
    .await
    .unwrap_err();

    match err {
        TransportError::Status { status, body } => {
            assert_eq!(status, 403);
            assert_eq!(body, "forbidden");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn stats_round_trip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total_requests": 42,
            "allow_count": 42,
        })))
        .mount(&mock_server)
        .await;

    let url = mock_server.uri();
    let stats = run_blocking(move || {
        let client = BlockingToolgateClient::new(ToolgateConfig::default().with_url(url))
            .expect("failed to create client");
        client.stats()
    })
    .await
    .expect("stats failed");

    assert_eq!(stats.total_requests, 42);
    assert_eq!(stats.allow_count, 42);
    assert!(stats.by_method.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn trailing_slash_yields_identical_paths() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/check"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"verdict": "allow"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = format!("{}/", mock_server.uri());
    let result = run_blocking(move || {
        let client = BlockingToolgateClient::new(ToolgateConfig::default().with_url(url))
            .expect("failed to create client");
        client.check(&DecisionRequest::new("initialize"))
    })
    .await
    .expect("check failed");

    assert!(result.allowed());
}
