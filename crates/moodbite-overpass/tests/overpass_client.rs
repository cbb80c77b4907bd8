//! Integration tests for `OverpassClient` retry/failover using wiremock.

use std::time::{Duration, Instant};

use moodbite_overpass::{OverpassClient, OverpassError, RetryPolicy};
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_string_contains, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

const QUERY: &str = "[out:json][timeout:25];\n(\n  node[\"amenity\"=\"cafe\"](around:500,40,-73);\n);\nout body;\n";

fn elements_body(count: usize) -> serde_json::Value {
    let elements: Vec<_> = (0..count)
        .map(|i| {
            serde_json::json!({
                "id": i,
                "lat": 40.0,
                "lon": -73.0,
                "tags": { "name": format!("Cafe {i}"), "amenity": "cafe" }
            })
        })
        .collect();
    serde_json::json!({ "elements": elements })
}

fn fast_policy(max_attempts: u32) -> RetryPolicy {
    RetryPolicy {
        max_attempts,
        request_timeout: Duration::from_secs(5),
        initial_backoff: Duration::from_millis(1),
    }
}

fn client(endpoints: Vec<String>, policy: RetryPolicy) -> OverpassClient {
    OverpassClient::new(endpoints, policy, "moodbite-test/0.1")
        .expect("client construction should not fail")
}

#[tokio::test]
async fn first_success_returns_immediately() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("cafe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(elements_body(2)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(vec![server.uri()], fast_policy(3));
    let elements = client.fetch(QUERY, &CancellationToken::new()).await.unwrap();
    assert_eq!(elements.len(), 2);
}

#[tokio::test]
async fn failing_endpoint_rotates_to_the_next() {
    let bad = MockServer::start().await;
    let good = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&bad)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(elements_body(1)))
        .expect(1)
        .mount(&good)
        .await;

    let client = client(vec![bad.uri(), good.uri()], fast_policy(3));
    let elements = client.fetch(QUERY, &CancellationToken::new()).await.unwrap();
    assert_eq!(elements.len(), 1);
}

#[tokio::test]
async fn exhaustion_surfaces_last_error_after_exactly_max_attempts() {
    let a = MockServer::start().await;
    let b = MockServer::start().await;
    let c = MockServer::start().await;

    for server in [&a, &b, &c] {
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502))
            .expect(1)
            .mount(server)
            .await;
    }

    let client = client(vec![a.uri(), b.uri(), c.uri()], fast_policy(3));
    let err = client
        .fetch(QUERY, &CancellationToken::new())
        .await
        .unwrap_err();

    match err {
        OverpassError::AllProvidersExhausted { attempts, source } => {
            assert_eq!(attempts, 3);
            assert!(matches!(
                *source,
                OverpassError::UnexpectedStatus { status: 502, .. }
            ));
        }
        other => panic!("expected AllProvidersExhausted, got: {other:?}"),
    }
}

#[tokio::test]
async fn single_endpoint_absorbs_all_attempts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;

    let client = client(vec![server.uri()], fast_policy(3));
    let err = client
        .fetch(QUERY, &CancellationToken::new())
        .await
        .unwrap_err();
    assert!(matches!(err, OverpassError::AllProvidersExhausted { .. }));
}

#[tokio::test]
async fn backoff_delays_are_observed_between_fast_failures() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&server)
        .await;

    let policy = RetryPolicy {
        max_attempts: 3,
        request_timeout: Duration::from_secs(5),
        initial_backoff: Duration::from_millis(40),
    };
    let client = client(vec![server.uri()], policy);

    let started = Instant::now();
    let _ = client.fetch(QUERY, &CancellationToken::new()).await;
    // Two backoff sleeps: 40 ms + 80 ms.
    assert!(started.elapsed() >= Duration::from_millis(120));
}

#[tokio::test]
async fn timed_out_attempt_skips_the_backoff_sleep() {
    let slow = MockServer::start().await;
    let good = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(elements_body(1))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&slow)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(elements_body(1)))
        .expect(1)
        .mount(&good)
        .await;

    // A wrongly applied backoff would add 10 s here and blow the bound.
    let policy = RetryPolicy {
        max_attempts: 2,
        request_timeout: Duration::from_millis(100),
        initial_backoff: Duration::from_secs(10),
    };
    let client = client(vec![slow.uri(), good.uri()], policy);

    let started = Instant::now();
    let elements = client.fetch(QUERY, &CancellationToken::new()).await.unwrap();
    assert_eq!(elements.len(), 1);
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn malformed_payload_is_retried_on_the_next_endpoint() {
    let garbled = MockServer::start().await;
    let good = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>rate limited</html>"))
        .expect(1)
        .mount(&garbled)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(elements_body(1)))
        .expect(1)
        .mount(&good)
        .await;

    let client = client(vec![garbled.uri(), good.uri()], fast_policy(3));
    let elements = client.fetch(QUERY, &CancellationToken::new()).await.unwrap();
    assert_eq!(elements.len(), 1);
}

#[tokio::test]
async fn cancelled_token_prevents_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(elements_body(1)))
        .expect(0)
        .mount(&server)
        .await;

    let cancel = CancellationToken::new();
    cancel.cancel();

    let client = client(vec![server.uri()], fast_policy(3));
    let err = client.fetch(QUERY, &cancel).await.unwrap_err();
    assert!(matches!(err, OverpassError::Cancelled));
}

#[tokio::test]
async fn cancellation_during_backoff_aborts_the_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let policy = RetryPolicy {
        max_attempts: 3,
        request_timeout: Duration::from_secs(5),
        initial_backoff: Duration::from_secs(30),
    };
    let client = client(vec![server.uri()], policy);

    let cancel = CancellationToken::new();
    let canceller = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        canceller.cancel();
    });

    let started = Instant::now();
    let err = client.fetch(QUERY, &cancel).await.unwrap_err();
    assert!(matches!(err, OverpassError::Cancelled));
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn empty_endpoint_pool_is_rejected_at_construction() {
    let result = OverpassClient::new(Vec::new(), RetryPolicy::default(), "moodbite-test/0.1");
    assert!(matches!(result, Err(OverpassError::NoEndpoints)));
}
