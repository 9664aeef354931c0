//! Integration tests for the single-call transport.

mod support;

use fundlink::api::{build_request, execute};
use fundlink::Error;
use support::RecordingLogger;

const UA: &str = "fundlink tests";
const CT: &str = "application/json";

#[tokio::test]
async fn successful_call_logs_exactly_once_with_both_bodies() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/echo")
        .with_status(200)
        .with_body("pong")
        .create_async()
        .await;

    let http = reqwest::Client::new();
    let logger = RecordingLogger::new();
    let request = build_request(
        UA,
        CT,
        "POST",
        &format!("{}/echo", server.url()),
        Some("ping".to_string()),
    )
    .unwrap();

    let outcome = execute(&http, "tests", "Echo", request, "ping", Some(&logger)).await;

    assert!(outcome.error.is_none());
    assert_eq!(outcome.body, "pong");
    let parts = outcome.response.expect("response parts");
    assert_eq!(parts.status().as_u16(), 200);

    let calls = logger.calls();
    assert_eq!(calls.len(), 1);
    let call = &calls[0];
    assert_eq!(call.origin_id, "tests");
    assert_eq!(call.callee_id, "Echo");
    assert!(!call.req.is_empty());
    assert!(!call.res.is_empty());
    assert_eq!(call.req_body, "ping");
    assert_eq!(call.res_body, "pong");
    assert!(call.err.is_empty());
    // time_taken is elapsed milliseconds with two decimals
    assert!(call.time_taken.parse::<f64>().is_ok());

    mock.assert_async().await;
}

#[tokio::test]
async fn refused_connection_yields_error_and_one_log_record() {
    let http = reqwest::Client::new();
    let logger = RecordingLogger::new();
    // Port 1 refuses connections
    let request = build_request(UA, CT, "GET", "http://127.0.0.1:1/", None).unwrap();

    let outcome = execute(&http, "tests", "Refused", request, "", Some(&logger)).await;

    assert!(outcome.response.is_none());
    assert_eq!(outcome.body, "");
    assert!(matches!(outcome.error, Some(Error::Transport(_))));

    let calls = logger.calls();
    assert_eq!(calls.len(), 1);
    assert!(!calls[0].err.is_empty());
    assert!(calls[0].res.is_empty());
}

#[tokio::test]
async fn missing_logger_is_a_no_op_not_an_error() {
    let http = reqwest::Client::new();
    let request = build_request(UA, CT, "GET", "http://127.0.0.1:1/", None).unwrap();
    let outcome = execute(&http, "tests", "Refused", request, "", None).await;
    assert!(outcome.error.is_some());
}

#[tokio::test]
async fn response_headers_are_captured_before_draining() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/headers")
        .with_status(200)
        .with_header("x-fundlink-operation", "AccountApi:AccountAvailabilityCheck")
        .with_body("{}")
        .create_async()
        .await;

    let http = reqwest::Client::new();
    let request = build_request(UA, CT, "GET", &format!("{}/headers", server.url()), None).unwrap();
    let outcome = execute(&http, "tests", "Headers", request, "", None).await;

    let parts = outcome.response.expect("response parts");
    assert_eq!(
        parts.header("x-fundlink-operation"),
        Some("AccountApi:AccountAvailabilityCheck")
    );
    assert_eq!(outcome.body, "{}");
}
