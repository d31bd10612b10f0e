// Page download tests against a local mock server.

use std::time::Duration;

use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::config::Config;
use crate::error_handling::{ImportError, ImportOutcome};
use crate::initialization::init_client;

fn listing_url(server: &MockServer, route: &str) -> Url {
    Url::parse(&format!("{}{}", server.uri(), route)).expect("mock server URL")
}

#[tokio::test]
async fn test_fetch_page_returns_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/listing/1"))
        .and(header("cache-control", "no-cache"))
        .and(header("pragma", "no-cache"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html")
                .set_body_string("<html><title>Listing</title></html>"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = init_client(&Config::default()).expect("client");
    let html = fetch_page(&client, &listing_url(&server, "/listing/1"), 1024)
        .await
        .expect("page fetched");
    assert_eq!(html, "<html><title>Listing</title></html>");
}

#[tokio::test]
async fn test_fetch_page_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("gone"))
        .mount(&server)
        .await;

    let client = init_client(&Config::default()).expect("client");
    let err = fetch_page(&client, &listing_url(&server, "/missing"), 1024)
        .await
        .expect_err("404 should fail");
    assert!(matches!(err, ImportError::UpstreamStatus(404)));
    assert_eq!(err.to_string(), "Could not fetch page (404)");
}

#[tokio::test]
async fn test_fetch_page_truncates_large_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("x".repeat(10_000)))
        .mount(&server)
        .await;

    let client = init_client(&Config::default()).expect("client");
    let html = fetch_page(&client, &listing_url(&server, "/big"), 100)
        .await
        .expect("truncated page still returned");
    assert_eq!(html.len(), 100);
}

#[tokio::test]
async fn test_fetch_page_replaces_invalid_utf8() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"R 1 000 \xff\xfe000".to_vec()))
        .mount(&server)
        .await;

    let client = init_client(&Config::default()).expect("client");
    let html = fetch_page(&client, &listing_url(&server, "/latin1"), 1024)
        .await
        .expect("lossy decode");
    assert!(html.starts_with("R 1 000 "));
    assert!(html.contains('\u{FFFD}'));
}

#[tokio::test]
async fn test_fetch_page_timeout_is_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let config = Config {
        timeout_seconds: 1,
        ..Default::default()
    };
    let client = init_client(&config).expect("client");
    let err = fetch_page(&client, &listing_url(&server, "/slow"), 1024)
        .await
        .expect_err("slow upstream should time out");
    assert_eq!(err.outcome(), ImportOutcome::Timeout);
    assert_eq!(err.status_code(), 500);
    assert_eq!(err.to_string(), "Failed to import property from URL");
}

#[tokio::test]
async fn test_fetch_page_connection_refused() {
    // Bind then drop to get a port with nothing listening
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let client = init_client(&Config::default()).expect("client");
    let url = Url::parse(&format!("http://{addr}/")).expect("url");
    let err = fetch_page(&client, &url, 1024)
        .await
        .expect_err("nothing listening");
    assert_eq!(err.outcome(), ImportOutcome::FetchFailed);
}
