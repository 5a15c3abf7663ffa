//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building the HTTP client with the configured timeout and user agent
//! - GET requests to fetch page content
//! - Content-Type checking and charset decoding
//! - Error classification into `FetchError` kinds
//!
//! One request per call, no retry. A failed URL is skipped for the rest of
//! the crawl.

use crate::config::CrawlerSettings;
use crate::crawler::parser::parse_html;
use crate::{FetchError, GleanError};
use encoding_rs::{Encoding, UTF_8};
use reqwest::header::CONTENT_TYPE;
use reqwest::{redirect::Policy, Client};
use std::time::Duration;
use tracing::Span;
use url::Url;

/// Maximum number of redirects followed per request
const MAX_REDIRECTS: usize = 10;

/// MIME types accepted as HTML
const HTML_TYPES: &[&str] = &["text/html", "application/xhtml+xml"];

/// A successfully fetched and parsed page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL the content was served from, after redirects
    pub final_url: Url,

    /// Page title, empty if the page has none
    pub title: String,

    /// Visible text, whitespace-normalized
    pub text: String,

    /// Absolute HTTP(S) links in document order
    pub links: Vec<Url>,
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - Value of the User-Agent header
/// * `timeout` - Hard bound on each request, including reading the body
///
/// # Example
///
/// ```no_run
/// use page_gleaner::crawler::build_http_client;
/// use std::time::Duration;
///
/// let client = build_http_client("page-gleaner/0.1", Duration::from_secs(10)).unwrap();
/// ```
pub fn build_http_client(user_agent: &str, timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .redirect(Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches pages and extracts their content
///
/// Events are emitted under the span handed in at construction, so callers
/// decide where fetch logs are attributed.
pub struct PageFetcher {
    client: Client,
    span: Span,
}

impl PageFetcher {
    /// Creates a fetcher from crawl settings
    pub fn new(settings: &CrawlerSettings, span: Span) -> Result<Self, GleanError> {
        if settings.timeout_secs == 0 {
            return Err(crate::ConfigError::Validation(
                "timeout must be > 0 seconds".to_string(),
            )
            .into());
        }

        let client = build_http_client(&settings.user_agent, settings.timeout())?;
        Ok(Self { client, span })
    }

    /// Fetches a URL and extracts its title, text and links
    ///
    /// # Request Flow
    ///
    /// 1. Send GET request (redirects followed, at most 10 hops)
    /// 2. Non-2xx status → `HttpStatus`
    /// 3. Content-Type not HTML → `NotHtml`
    /// 4. Decode body using the declared charset (UTF-8 otherwise)
    /// 5. Parse HTML → `Parse` on failure
    ///
    /// | Condition | Error |
    /// |-----------|-------|
    /// | Timeout | `Timeout` |
    /// | Connection refused, DNS, TLS, body read | `Network` |
    /// | HTTP 4xx/5xx | `HttpStatus` |
    /// | Non-HTML Content-Type | `NotHtml` |
    /// | Binary body | `Parse` |
    pub async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        tracing::debug!(parent: &self.span, "GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| classify_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // Check Content-Type
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        if !is_html(&content_type) {
            return Err(FetchError::NotHtml {
                url: url.to_string(),
                content_type,
            });
        }

        let final_url = response.url().clone();
        if &final_url != url {
            tracing::debug!(parent: &self.span, "{} redirected to {}", url, final_url);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| classify_error(url, e))?;
        let body = decode_body(&bytes, &content_type);

        let parsed = parse_html(&body, &final_url).map_err(|message| FetchError::Parse {
            url: url.to_string(),
            message,
        })?;

        tracing::debug!(
            parent: &self.span,
            "Fetched {} ({} bytes, {} links)",
            url,
            bytes.len(),
            parsed.links.len()
        );

        Ok(FetchedPage {
            final_url,
            title: parsed.title,
            text: parsed.text,
            links: parsed.links,
        })
    }
}

fn classify_error(url: &Url, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Network {
            url: url.to_string(),
            source: error,
        }
    }
}

/// Returns true if the Content-Type header names an HTML media type
fn is_html(content_type: &str) -> bool {
    let essence = content_type.split(';').next().unwrap_or("").trim();
    HTML_TYPES
        .iter()
        .any(|html| essence.eq_ignore_ascii_case(html))
}

/// Extracts the `charset` parameter from a Content-Type header
fn charset(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        name.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"'))
    })
}

/// Decodes a response body, honouring a BOM first and the declared charset second
fn decode_body(bytes: &[u8], content_type: &str) -> String {
    let encoding = charset(content_type)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8);
    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}
