//! Result writer trait and crawl summary types
//!
//! This module defines the interface the crawler persists through, and the
//! summary it hands back when a crawl finishes.

use crate::output::records::CrawlResults;
use crate::SaveError;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// Result type for output operations
pub type OutputResult<T> = Result<T, SaveError>;

/// Destination for crawl results
///
/// Implementations must never overwrite a file that existed before the crawl
/// claimed it: `write` always creates a fresh file, and `replace` is only ever
/// called with a path previously returned by `write`.
pub trait ResultWriter {
    /// Persists `results` to a new file at `path` or its first free numbered
    /// variant, returning the path actually used
    fn write(&self, results: &CrawlResults, path: &Path) -> OutputResult<PathBuf>;

    /// Rewrites a file this writer created earlier with the latest results
    fn replace(&self, results: &CrawlResults, path: &Path) -> OutputResult<()>;
}

/// Outcome of a finished crawl
#[derive(Debug, Clone)]
pub struct CrawlSummary {
    /// Pages fetched and recorded successfully
    pub pages_visited: usize,

    /// Pages whose fetch failed (network, HTTP status, or non-HTML content)
    pub pages_failed: usize,

    /// Where the results were written (may differ from the requested path)
    pub output_path: PathBuf,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl CrawlSummary {
    /// Wall-clock duration of the crawl in seconds
    pub fn duration_seconds(&self) -> f64 {
        (self.finished_at - self.started_at).num_milliseconds() as f64 / 1000.0
    }

    /// Percentage of attempted pages that were fetched successfully
    pub fn success_rate(&self) -> f64 {
        let attempted = self.pages_visited + self.pages_failed;
        if attempted == 0 {
            return 0.0;
        }
        (self.pages_visited as f64 / attempted as f64) * 100.0
    }
}
