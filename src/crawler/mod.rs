//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with a per-request timeout
//! - HTML parsing for title, visible text and links
//! - Visited-set and depth-budget bookkeeping
//! - The depth-first crawl loop with periodic persistence

mod driver;
mod fetcher;
mod parser;
mod state;

pub use driver::Crawler;
pub use fetcher::{build_http_client, FetchedPage, PageFetcher};
pub use parser::{parse_html, ParsedPage};
pub use state::{CrawlState, PendingUrl};

use crate::config::CrawlerSettings;
use crate::output::CrawlSummary;
use crate::GleanError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Validate the settings
/// 2. Build the HTTP client and JSON writer
/// 3. Crawl depth-first from `seed`
/// 4. Write the results, never overwriting an existing file
///
/// # Arguments
///
/// * `settings` - The crawler settings
/// * `seed` - Absolute HTTP(S) URL to start from
pub async fn crawl(settings: CrawlerSettings, seed: &str) -> Result<CrawlSummary, GleanError> {
    let mut crawler = Crawler::from_settings(settings)?;
    crawler.crawl(seed).await
}
