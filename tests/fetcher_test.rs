//! サイト取得の統合テスト（wiremock）

mod common;

use common::{mount_delayed, mount_page, mount_status, refused_url, ACME_HTML};
use prospect_report::fetcher::{FetchError, SiteFetcher};
use prospect_report_common::registry::DEFAULT_USER_AGENT;
use prospect_report_common::ScrapeOutcome;
use std::time::Duration;
use wiremock::MockServer;

fn fetcher(timeout: u64) -> SiteFetcher {
    SiteFetcher::new(timeout, DEFAULT_USER_AGENT).expect("client build failed")
}

#[tokio::test]
async fn test_fetch_success_returns_lowercase_text() {
    let server = MockServer::start().await;
    mount_page(&server, "/acme", ACME_HTML).await;

    let outcome = fetcher(5).fetch(&format!("{}/acme", server.uri())).await;

    match outcome {
        ScrapeOutcome::Success(text) => {
            assert!(text.contains("our probiotic range"));
            assert!(text.contains("gut health"));
            assert!(!text.contains("<h1>"));
            assert_eq!(text, text.to_lowercase());
        }
        ScrapeOutcome::Failure(reason) => panic!("取得に失敗: {}", reason),
    }
}

#[tokio::test]
async fn test_fetch_sends_browser_user_agent() {
    let server = MockServer::start().await;
    mount_page(&server, "/", "<p>ok</p>").await;

    let outcome = fetcher(5).fetch(&format!("{}/", server.uri())).await;
    assert_eq!(outcome, ScrapeOutcome::Success("ok".to_string()));

    let requests = server.received_requests().await.expect("recording disabled");
    assert_eq!(requests.len(), 1);
    let user_agent = requests[0]
        .headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert_eq!(user_agent, DEFAULT_USER_AGENT);
}

#[tokio::test]
async fn test_fetch_non_success_status_is_failure() {
    let server = MockServer::start().await;
    mount_status(&server, "/missing", 404).await;
    mount_status(&server, "/down", 503).await;

    let f = fetcher(5);
    let err = f.fetch_text(&format!("{}/missing", server.uri())).await.unwrap_err();
    assert!(matches!(err, FetchError::Status(404)));

    let outcome = f.fetch(&format!("{}/down", server.uri())).await;
    assert_eq!(outcome, ScrapeOutcome::Failure("HTTPステータス 503".to_string()));
}

#[tokio::test]
async fn test_fetch_timeout_is_failure() {
    let server = MockServer::start().await;
    mount_delayed(&server, "/slow", Duration::from_secs(3)).await;

    let err = fetcher(1)
        .fetch_text(&format!("{}/slow", server.uri()))
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Timeout(1)), "unexpected: {:?}", err);
}

#[tokio::test]
async fn test_fetch_connection_refused_is_failure() {
    let url = refused_url();

    let err = fetcher(5).fetch_text(&url).await.unwrap_err();
    assert!(matches!(err, FetchError::Connect(_)), "unexpected: {:?}", err);

    let outcome = fetcher(5).fetch(&url).await;
    assert!(!outcome.is_success());
}

#[tokio::test]
async fn test_fetch_invalid_url_is_failure() {
    let outcome = fetcher(5).fetch("not a url").await;
    assert!(matches!(outcome, ScrapeOutcome::Failure(_)));
}
