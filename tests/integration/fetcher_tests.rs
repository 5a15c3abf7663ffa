//! Integration tests for PageFetcher using wiremock
//!
//! Each failure mode must surface as its own `FetchError` kind.

use page_gleaner::crawler::PageFetcher;
use page_gleaner::{CrawlerSettings, FetchError};
use std::time::Duration;
use tracing::Span;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher(timeout_secs: u64) -> PageFetcher {
    let settings = CrawlerSettings {
        timeout_secs,
        ..Default::default()
    };
    PageFetcher::new(&settings, Span::none()).expect("Failed to build fetcher")
}

fn url_of(server: &MockServer, route: &str) -> Url {
    Url::parse(&format!("{}{}", server.uri(), route)).unwrap()
}

/// Test successful fetch extracts title, text and links
#[tokio::test]
async fn test_fetch_success() {
    let mock_server = MockServer::start().await;
    let html = r#"<html>
<head><title> Test  Page </title><style>p { color: red; }</style></head>
<body><h1>Hello</h1><script>var x = 1;</script><p>World <a href="/next#part">next</a></p></body>
</html>"#;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(html, "text/html; charset=utf-8"))
        .mount(&mock_server)
        .await;

    let page = fetcher(5)
        .fetch(&url_of(&mock_server, "/"))
        .await
        .expect("Fetch should succeed");

    assert_eq!(page.title, "Test Page");
    assert_eq!(page.text, "Hello World next");
    assert_eq!(page.links, vec![url_of(&mock_server, "/next")]);
}

/// Test a declared legacy charset is decoded
#[tokio::test]
async fn test_fetch_decodes_declared_charset() {
    let mock_server = MockServer::start().await;
    let mut body = b"<html><body><p>caf".to_vec();
    body.push(0xE9);
    body.extend_from_slice(b"</p></body></html>");

    Mock::given(method("GET"))
        .and(path("/latin"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/html; charset=iso-8859-1"))
        .mount(&mock_server)
        .await;

    let page = fetcher(5)
        .fetch(&url_of(&mock_server, "/latin"))
        .await
        .expect("Fetch should succeed");

    assert_eq!(page.text, "café");
}

/// Test links resolve against the URL reached after redirects
#[tokio::test]
async fn test_fetch_follows_redirect() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/old/page"))
        .respond_with(ResponseTemplate::new(301).insert_header("Location", "/new/page"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/new/page"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"<a href="sibling">s</a>"#, "text/html"),
        )
        .mount(&mock_server)
        .await;

    let page = fetcher(5)
        .fetch(&url_of(&mock_server, "/old/page"))
        .await
        .expect("Fetch should succeed");

    assert_eq!(page.final_url, url_of(&mock_server, "/new/page"));
    assert_eq!(page.links, vec![url_of(&mock_server, "/new/sibling")]);
}

/// Test 404 is reported as an HTTP status error, once
#[tokio::test]
async fn test_404_is_http_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/notfound"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1) // Should only be called once (no retry)
        .mount(&mock_server)
        .await;

    let result = fetcher(5).fetch(&url_of(&mock_server, "/notfound")).await;

    assert!(matches!(
        result.unwrap_err(),
        FetchError::HttpStatus { status: 404, .. }
    ));
}

/// Test server errors are not retried
#[tokio::test]
async fn test_500_is_http_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = fetcher(5).fetch(&url_of(&mock_server, "/broken")).await;

    assert!(matches!(
        result.unwrap_err(),
        FetchError::HttpStatus { status: 500, .. }
    ));
}

/// Test non-HTML content is rejected with its content type
#[tokio::test]
async fn test_non_html_is_not_html() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
        .mount(&mock_server)
        .await;

    let result = fetcher(5).fetch(&url_of(&mock_server, "/data.json")).await;

    match result.unwrap_err() {
        FetchError::NotHtml { content_type, .. } => assert_eq!(content_type, "application/json"),
        other => panic!("Expected NotHtml, got {:?}", other),
    }
}

/// Test a binary body served as HTML is a parse error
#[tokio::test]
async fn test_binary_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/blob"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(b"<html>\0\x01\x02</html>".to_vec(), "text/html"),
        )
        .mount(&mock_server)
        .await;

    let result = fetcher(5).fetch(&url_of(&mock_server, "/blob")).await;

    assert!(matches!(result.unwrap_err(), FetchError::Parse { .. }));
}

/// Test a slow response hits the per-request timeout
#[tokio::test]
async fn test_slow_response_is_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<p>late</p>", "text/html")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let result = fetcher(1).fetch(&url_of(&mock_server, "/slow")).await;

    assert!(matches!(result.unwrap_err(), FetchError::Timeout { .. }));
}

/// Test an unreachable server is a network error
#[tokio::test]
async fn test_connection_refused_is_network() {
    // Bind then release a port so nothing is listening on it
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let url = Url::parse(&format!("http://127.0.0.1:{}/", port)).unwrap();

    let result = fetcher(5).fetch(&url).await;

    assert!(matches!(result.unwrap_err(), FetchError::Network { .. }));
}
