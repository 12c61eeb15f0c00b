//! End-to-end relay tests against mock WakaTime and GitHub endpoints.
//!
//! Retry-budget properties (exact attempt counts, publish-failure retries)
//! are asserted through wiremock call-count expectations, which are
//! verified when each mock server drops.

use waka_relay::publish::{snapshot_filename, GistPublisher};
use waka_relay::{relay_once, DailySummary, GrandTotal, RelayConfig, RelayOutcome, UsageItem};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SUMMARIES_PATH: &str = "/users/current/summaries";
const GIST_PATH: &str = "/gists/test-gist";

fn sample_body() -> serde_json::Value {
    serde_json::json!({
        "data": [{
            "grand_total": {"text": "5 hrs 30 mins"},
            "projects": [{"name": "Foo", "text": "2 hrs"}],
            "languages": [{"name": "Rust", "text": "4 hrs"}],
            "editors": [{"name": "Zed", "text": "5 hrs 30 mins"}],
            "categories": [{"name": "Coding", "text": "5 hrs 30 mins"}]
        }]
    })
}

fn relay_config(wakatime: &MockServer, github: &MockServer) -> RelayConfig {
    RelayConfig::new("test-key", "test-token", "test-gist")
        .with_wakatime_base_url(wakatime.uri())
        .with_github_base_url(github.uri())
}

#[tokio::test]
async fn exhaustion_stops_after_exactly_three_fetches() {
    let wakatime = MockServer::start().await;
    let github = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SUMMARIES_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&wakatime)
        .await;

    // No publish may happen when every fetch fails.
    Mock::given(method("PATCH"))
        .and(path(GIST_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&github)
        .await;

    let outcome = relay_once(&relay_config(&wakatime, &github))
        .await
        .expect("config is valid");
    assert_eq!(outcome, RelayOutcome::Exhausted { attempts: 3 });
}

#[tokio::test]
async fn single_fetch_failure_retries_then_publishes_once() {
    let wakatime = MockServer::start().await;
    let github = MockServer::start().await;

    // First fetch fails, second succeeds: exactly two fetch attempts.
    Mock::given(method("GET"))
        .and(path(SUMMARIES_PATH))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&wakatime)
        .await;
    Mock::given(method("GET"))
        .and(path(SUMMARIES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_body()))
        .expect(1)
        .mount(&wakatime)
        .await;

    Mock::given(method("PATCH"))
        .and(path(GIST_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&github)
        .await;

    let outcome = relay_once(&relay_config(&wakatime, &github))
        .await
        .expect("config is valid");
    assert!(matches!(outcome, RelayOutcome::Published { .. }));
}

#[tokio::test]
async fn publish_failure_consumes_the_same_retry_budget() {
    let wakatime = MockServer::start().await;
    let github = MockServer::start().await;

    // Fetch always succeeds; the first gist write fails, so the whole
    // sequence re-runs: two fetches, two publish attempts.
    Mock::given(method("GET"))
        .and(path(SUMMARIES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_body()))
        .expect(2)
        .mount(&wakatime)
        .await;

    Mock::given(method("PATCH"))
        .and(path(GIST_PATH))
        .respond_with(
            ResponseTemplate::new(502).set_body_json(serde_json::json!({"message": "bad gateway"})),
        )
        .up_to_n_times(1)
        .expect(1)
        .mount(&github)
        .await;
    Mock::given(method("PATCH"))
        .and(path(GIST_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&github)
        .await;

    let outcome = relay_once(&relay_config(&wakatime, &github))
        .await
        .expect("config is valid");
    assert!(matches!(outcome, RelayOutcome::Published { .. }));
}

fn sample_days() -> Vec<DailySummary> {
    vec![DailySummary {
        grand_total: GrandTotal {
            text: "5 hrs 30 mins".into(),
        },
        projects: vec![UsageItem {
            name: "Foo".into(),
            text: "2 hrs".into(),
        }],
        languages: vec![],
        editors: vec![],
        categories: vec![],
    }]
}

#[tokio::test]
async fn snapshot_is_pretty_json_in_the_dated_slot() {
    let github = MockServer::start().await;
    let days = sample_days();
    let expected_content = serde_json::to_string_pretty(&days).expect("encode");

    Mock::given(method("PATCH"))
        .and(path(GIST_PATH))
        .and(header("Authorization", "token test-token"))
        .and(header("Accept", "application/vnd.github+json"))
        .and(body_partial_json(serde_json::json!({
            "files": {
                "summaries_2024-05-01.json": {"content": expected_content}
            }
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&github)
        .await;

    let config =
        RelayConfig::new("test-key", "test-token", "test-gist").with_github_base_url(github.uri());
    let publisher = GistPublisher::new(&config).expect("publisher construction");
    publisher
        .publish("2024-05-01", &days)
        .await
        .expect("publish should succeed");

    assert_eq!(snapshot_filename("2024-05-01"), "summaries_2024-05-01.json");
}

#[tokio::test]
async fn republishing_identical_data_writes_identical_bytes() {
    let github = MockServer::start().await;
    let days = sample_days();
    let expected_content = serde_json::to_string_pretty(&days).expect("encode");

    // Both writes must match the same exact content, or the second request
    // falls through to no mock and the call-count expectation fails.
    Mock::given(method("PATCH"))
        .and(path(GIST_PATH))
        .and(body_partial_json(serde_json::json!({
            "files": {
                "summaries_2024-05-01.json": {"content": expected_content}
            }
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&github)
        .await;

    let config =
        RelayConfig::new("test-key", "test-token", "test-gist").with_github_base_url(github.uri());
    let publisher = GistPublisher::new(&config).expect("publisher construction");
    for _ in 0..2 {
        publisher
            .publish("2024-05-01", &days)
            .await
            .expect("publish should succeed");
    }
}

#[tokio::test]
async fn publish_failures_alone_exhaust_the_budget() {
    let wakatime = MockServer::start().await;
    let github = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SUMMARIES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_body()))
        .expect(3)
        .mount(&wakatime)
        .await;

    Mock::given(method("PATCH"))
        .and(path(GIST_PATH))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({"message": "Not Found"})),
        )
        .expect(3)
        .mount(&github)
        .await;

    let outcome = relay_once(&relay_config(&wakatime, &github))
        .await
        .expect("config is valid");
    assert_eq!(outcome, RelayOutcome::Exhausted { attempts: 3 });
}
