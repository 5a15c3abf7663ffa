//! Crawl driver - the depth-first traversal loop
//!
//! This module contains the main crawl loop that coordinates:
//! - Popping URLs from the pending stack and deduplicating them
//! - Fetching, recording results and scheduling discovered links
//! - Keeping the crawl on the seed's host
//! - Periodic and final persistence of results

use crate::config::{validate, CrawlerSettings};
use crate::crawler::fetcher::PageFetcher;
use crate::crawler::state::CrawlState;
use crate::output::{CrawlResults, CrawlSummary, JsonResultWriter, PageRecord, ResultWriter};
use crate::url::{normalize_url, same_host};
use crate::{GleanError, SaveError};
use chrono::Utc;
use std::path::PathBuf;
use tracing::Span;
use url::Url;

/// Depth-bounded, single-threaded crawler
///
/// Owns the fetcher, the result writer and the logging span for its crawls.
/// Each call to [`Crawler::crawl`] starts from a clean state and claims a
/// fresh output file.
pub struct Crawler<W: ResultWriter = JsonResultWriter> {
    settings: CrawlerSettings,
    fetcher: PageFetcher,
    writer: W,
    span: Span,
    output_path: Option<PathBuf>,
}

impl Crawler<JsonResultWriter> {
    /// Builds a crawler with the JSON writer and a `crawl` span
    ///
    /// # Example
    ///
    /// ```no_run
    /// use page_gleaner::{Crawler, CrawlerSettings};
    ///
    /// # async fn example() -> Result<(), page_gleaner::GleanError> {
    /// let mut crawler = Crawler::from_settings(CrawlerSettings::default())?;
    /// let summary = crawler.crawl("https://example.com/").await?;
    /// println!("{} pages -> {}", summary.pages_visited, summary.output_path.display());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_settings(settings: CrawlerSettings) -> Result<Self, GleanError> {
        validate(&settings)?;
        let span = tracing::info_span!("crawl");
        let fetcher = PageFetcher::new(&settings, span.clone())?;
        let writer = JsonResultWriter::new(&settings.encoding)?;
        Ok(Self::new(settings, fetcher, writer, span))
    }
}

impl<W: ResultWriter> Crawler<W> {
    /// Creates a crawler from its parts
    pub fn new(settings: CrawlerSettings, fetcher: PageFetcher, writer: W, span: Span) -> Self {
        Self {
            settings,
            fetcher,
            writer,
            span,
            output_path: None,
        }
    }

    /// Runs the main crawl loop from `seed`
    ///
    /// This is the core crawling logic that:
    /// 1. Pops the next unvisited URL from the stack
    /// 2. Fetches it, skipping and counting failures
    /// 3. Records the page and, while depth remains, pushes its links
    /// 4. Persists results every `save_interval` pages and once at the end
    ///
    /// Fetch failures and periodic save failures never abort the crawl. A
    /// failure to write the final results does. Invalid settings are rejected
    /// before anything is fetched.
    pub async fn crawl(&mut self, seed: &str) -> Result<CrawlSummary, GleanError> {
        validate(&self.settings)?;
        let seed_url = normalize_url(seed)?;
        let max_depth = self.settings.max_depth;
        let started_at = Utc::now();
        self.output_path = None;

        tracing::info!(
            parent: &self.span,
            "Starting crawl at {} with max depth {}",
            seed_url,
            max_depth
        );

        let mut state = CrawlState::new(seed_url.clone(), max_depth);

        while let Some(pending) = state.next_unvisited() {
            let depth = state.depth_of(pending.remaining_depth);
            tracing::info!(
                parent: &self.span,
                "Crawling URL: {} (Depth: {}/{})",
                pending.url,
                depth,
                max_depth
            );

            let page = match self.fetcher.fetch(&pending.url).await {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!(parent: &self.span, "Skipping {}: {}", pending.url, e);
                    state.record_failure();
                    continue;
                }
            };

            state.record(PageRecord {
                url: pending.url.to_string(),
                title: page.title,
                text: page.text,
                depth,
            });

            if pending.remaining_depth > 0 {
                let links = self.in_scope(&seed_url, page.links);
                state.push_links(links, pending.remaining_depth - 1);
            }

            if state.pages_visited() % self.settings.save_interval == 0 {
                self.save_progress(state.results());
            }
        }

        let output_path = self.persist(state.results())?;
        let summary = CrawlSummary {
            pages_visited: state.pages_visited(),
            pages_failed: state.pages_failed(),
            output_path,
            started_at,
            finished_at: Utc::now(),
        };

        tracing::info!(
            parent: &self.span,
            "Crawl completed: {} pages saved, {} failed in {:.2}s; results in {}",
            summary.pages_visited,
            summary.pages_failed,
            summary.duration_seconds(),
            summary.output_path.display()
        );

        Ok(summary)
    }

    /// The writer this crawler persists through
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Drops links that leave the seed's host when the crawl is host-bound
    fn in_scope(&self, seed: &Url, links: Vec<Url>) -> Vec<Url> {
        if !self.settings.same_host_only {
            return links;
        }

        links
            .into_iter()
            .filter(|link| {
                let keep = same_host(seed, link);
                if !keep {
                    tracing::debug!(parent: &self.span, "Skipping off-site URL: {}", link);
                }
                keep
            })
            .collect()
    }

    /// Saves partial results, logging instead of failing
    ///
    /// A failed save is retried naturally at the next interval.
    fn save_progress(&mut self, results: &CrawlResults) {
        match self.persist(results) {
            Ok(path) => tracing::info!(
                parent: &self.span,
                "Progress saved to {} ({} pages)",
                path.display(),
                results.len()
            ),
            Err(e) => tracing::error!(parent: &self.span, "Failed to save progress: {}", e),
        }
    }

    /// Writes the results to this crawl's output file
    ///
    /// The first successful write claims a fresh file (never overwriting an
    /// existing one); later writes replace the claimed file in place.
    fn persist(&mut self, results: &CrawlResults) -> Result<PathBuf, SaveError> {
        if let Some(path) = &self.output_path {
            self.writer.replace(results, path)?;
            return Ok(path.clone());
        }

        let path = self.writer.write(results, &self.settings.output_path)?;
        self.output_path = Some(path.clone());
        Ok(path)
    }
}
