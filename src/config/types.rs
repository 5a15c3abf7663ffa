use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Default number of hops followed from the seed
pub const DEFAULT_MAX_DEPTH: u32 = 2;

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default number of successful fetches between periodic saves
pub const DEFAULT_SAVE_INTERVAL: usize = 10;

/// Default crawl output file
pub const DEFAULT_OUTPUT_PATH: &str = "crawl_results.json";

/// Default text encoding for everything written to disk
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Default User-Agent header sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("page-gleaner/", env!("CARGO_PKG_VERSION"));

/// Settings file layout
///
/// Every key is optional; anything left out falls back to the built-in
/// default or is supplied on the command line.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    #[serde(default)]
    pub crawler: CrawlerSection,
    #[serde(default)]
    pub output: OutputSection,
}

/// `[crawler]` table of the settings file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CrawlerSection {
    /// Maximum depth to crawl from the seed URL
    #[serde(rename = "max-depth")]
    pub max_depth: Option<u32>,

    /// Per-request timeout (seconds)
    pub timeout: Option<u64>,

    /// Successful fetches between periodic saves
    #[serde(rename = "save-interval")]
    pub save_interval: Option<usize>,

    /// Only follow links on the seed's host
    #[serde(rename = "same-host-only")]
    pub same_host_only: Option<bool>,

    /// User-Agent header value
    #[serde(rename = "user-agent")]
    pub user_agent: Option<String>,
}

/// `[output]` table of the settings file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Path of the JSON results file
    pub path: Option<PathBuf>,

    /// Encoding label used when writing results
    pub encoding: Option<String>,
}

/// Effective settings for one crawl
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlerSettings {
    /// Remaining depth budget given to the seed (0 = seed only)
    pub max_depth: u32,

    /// Hard per-request timeout (seconds, must be > 0)
    pub timeout_secs: u64,

    /// Successful fetches between periodic saves (must be >= 1)
    pub save_interval: usize,

    /// Drop discovered links whose host differs from the seed's
    pub same_host_only: bool,

    /// User-Agent header value
    pub user_agent: String,

    /// Requested output path; the actual path may carry a numeric suffix
    pub output_path: PathBuf,

    /// WHATWG encoding label for the output file
    pub encoding: String,
}

impl Default for CrawlerSettings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            save_interval: DEFAULT_SAVE_INTERVAL,
            same_host_only: true,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            encoding: DEFAULT_ENCODING.to_string(),
        }
    }
}

impl CrawlerSettings {
    /// Per-request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Overlays the values present in a settings file
    pub fn with_file(mut self, file: &FileSettings) -> Self {
        let crawler = &file.crawler;
        if let Some(max_depth) = crawler.max_depth {
            self.max_depth = max_depth;
        }
        if let Some(timeout) = crawler.timeout {
            self.timeout_secs = timeout;
        }
        if let Some(save_interval) = crawler.save_interval {
            self.save_interval = save_interval;
        }
        if let Some(same_host_only) = crawler.same_host_only {
            self.same_host_only = same_host_only;
        }
        if let Some(user_agent) = &crawler.user_agent {
            self.user_agent = user_agent.clone();
        }
        if let Some(path) = &file.output.path {
            self.output_path = path.clone();
        }
        if let Some(encoding) = &file.output.encoding {
            self.encoding = encoding.clone();
        }
        self
    }
}
