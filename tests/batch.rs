//! Integration tests for the concurrent batch dispatcher.

mod support;

use std::sync::Arc;
use std::time::{Duration, Instant};

use fundlink::api::{build_request, execute_batch, CallLogger};
use support::{EchoServer, RecordingLogger};

const UA: &str = "fundlink tests";
const CT: &str = "application/json";

fn get(url: &str) -> reqwest::Request {
    build_request(UA, CT, "GET", url, None).unwrap()
}

#[tokio::test]
async fn results_come_back_in_input_order_whatever_the_completion_order() {
    let server = EchoServer::start().await;
    let n = 6;

    // Later slots answer sooner, so completion order is the reverse of
    // input order.
    let requests: Vec<_> = (0..n)
        .map(|i| {
            let delay = Duration::from_millis(((n - 1 - i) * 40) as u64);
            get(&server.url(delay, &format!("payload-{i}")))
        })
        .collect();

    let http = reqwest::Client::new();
    let result = execute_batch(&http, "tests", "Ordered", requests, Vec::new(), None).await;

    assert_eq!(result.len(), n);
    for i in 0..n {
        assert_eq!(result.bodies[i], format!("payload-{i}"), "slot {i}");
        assert!(result.errors[i].is_none(), "slot {i}");
        assert!(result.responses[i].is_some(), "slot {i}");
    }
}

#[tokio::test]
async fn one_failing_request_does_not_affect_its_siblings() {
    let server = EchoServer::start().await;
    let requests = vec![
        get(&server.url(Duration::ZERO, "first")),
        get("http://127.0.0.1:1/"), // refuses connections
        get(&server.url(Duration::ZERO, "third")),
    ];

    let http = reqwest::Client::new();
    let result = execute_batch(&http, "tests", "Isolated", requests, Vec::new(), None).await;

    assert_eq!(result.len(), 3);
    assert!(result.errors[0].is_none());
    assert!(result.errors[1].is_some());
    assert!(result.errors[2].is_none());
    assert_eq!(result.bodies[0], "first");
    assert_eq!(result.bodies[1], "");
    assert_eq!(result.bodies[2], "third");
    assert!(result.responses[1].is_none());
    assert!(!result.all_succeeded());
}

#[tokio::test]
async fn empty_batch_returns_immediately_with_empty_sequences() {
    let http = reqwest::Client::new();
    let started = Instant::now();
    let result = execute_batch(&http, "tests", "Empty", Vec::new(), Vec::new(), None).await;
    assert!(result.is_empty());
    assert_eq!(result.bodies.len(), 0);
    assert_eq!(result.errors.len(), 0);
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[tokio::test(flavor = "multi_thread")]
async fn dispatch_blocks_until_the_slowest_unit_finishes() {
    let server = EchoServer::start().await;
    let delays = [0u64, 120, 40, 200, 80];
    let requests: Vec<_> = delays
        .iter()
        .enumerate()
        .map(|(i, ms)| get(&server.url(Duration::from_millis(*ms), &format!("p{i}"))))
        .collect();

    let http = reqwest::Client::new();
    let started = Instant::now();
    let result = execute_batch(&http, "tests", "Completion", requests, Vec::new(), None).await;
    let elapsed = started.elapsed();

    assert!(result.all_succeeded());
    // Returns only after every unit has finished...
    assert!(elapsed >= Duration::from_millis(200), "returned early: {elapsed:?}");
    // ...but the units ran concurrently, not back to back.
    assert!(elapsed < Duration::from_millis(440), "looks sequential: {elapsed:?}");
}

#[tokio::test]
async fn every_unit_logs_through_the_shared_logger() {
    let server = EchoServer::start().await;
    let n = 5;
    let requests: Vec<_> = (0..n)
        .map(|i| get(&server.url(Duration::from_millis(10), &format!("p{i}"))))
        .collect();
    let bodies: Vec<_> = (0..n).map(|i| format!("req-{i}")).collect();

    let logger = RecordingLogger::new();
    let shared: Arc<dyn CallLogger> = Arc::new(logger.clone());

    let http = reqwest::Client::new();
    let result = execute_batch(&http, "tests", "Logged", requests, bodies, Some(shared)).await;

    assert!(result.all_succeeded());
    let calls = logger.calls();
    assert_eq!(calls.len(), n);
    // Records may interleave in any order; every request body shows up once.
    let mut seen: Vec<_> = calls.iter().map(|c| c.req_body.clone()).collect();
    seen.sort();
    let mut expected: Vec<_> = (0..n).map(|i| format!("req-{i}")).collect();
    expected.sort();
    assert_eq!(seen, expected);
}
