//! End-to-end tests for the `page-gleaner` binary
//!
//! Checks argument handling and exit codes against a wiremock server.

use std::fs;
use tempfile::TempDir;
use tokio::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn page_gleaner() -> Command {
    Command::new(env!("CARGO_BIN_EXE_page-gleaner"))
}

#[tokio::test]
async fn test_crawl_with_failures_exits_zero() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"<html><head><title>Home</title></head><body><a href="/gone">x</a></body></html>"#,
            "text/html",
        ))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let output_path = dir.path().join("out/results.json");

    let output = page_gleaner()
        .arg(format!("{}/", mock_server.uri()))
        .arg("--max_depth")
        .arg("1")
        .arg("--output")
        .arg(&output_path)
        .arg("--timeout")
        .arg("5")
        .output()
        .await
        .expect("Failed to run page-gleaner");

    assert!(output.status.success(), "{:?}", output);
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(json.as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn test_settings_file_and_flag_precedence() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"<html><body><a href="/a">a</a></body></html>"#,
            "text/html",
        ))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<p>a</p>", "text/html"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("gleaner.toml");
    let output_path = dir.path().join("from_file.json");
    fs::write(
        &config_path,
        format!(
            "[crawler]\nmax-depth = 3\n\n[output]\npath = {:?}\n",
            output_path.display().to_string()
        ),
    )
    .unwrap();

    // --max-depth 0 on the command line overrides max-depth = 3 in the file
    let output = page_gleaner()
        .arg(format!("{}/", mock_server.uri()))
        .arg("--config")
        .arg(&config_path)
        .arg("--max-depth")
        .arg("0")
        .output()
        .await
        .expect("Failed to run page-gleaner");

    assert!(output.status.success(), "{:?}", output);
    assert!(output_path.exists());
}

#[tokio::test]
async fn test_invalid_base_url_exits_one() {
    let output = page_gleaner()
        .arg("not-a-url")
        .output()
        .await
        .expect("Failed to run page-gleaner");

    assert_eq!(output.status.code(), Some(1));
}

#[tokio::test]
async fn test_zero_timeout_exits_one() {
    let output = page_gleaner()
        .arg("https://example.com/")
        .arg("--timeout")
        .arg("0")
        .output()
        .await
        .expect("Failed to run page-gleaner");

    assert_eq!(output.status.code(), Some(1));
}

#[tokio::test]
async fn test_negative_depth_is_usage_error() {
    let output = page_gleaner()
        .arg("https://example.com/")
        .arg("--max_depth")
        .arg("-1")
        .output()
        .await
        .expect("Failed to run page-gleaner");

    assert_eq!(output.status.code(), Some(2));
}
