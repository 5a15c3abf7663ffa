//! Page Gleaner: a depth-bounded site crawler and a collision-safe file saver
//!
//! This crate fetches pages starting from a seed URL, extracts their titles and
//! visible text, and persists the results as JSON without ever clobbering an
//! existing file.

pub mod config;
pub mod crawler;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for Page Gleaner operations
#[derive(Debug, Error)]
pub enum GleanError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("Save error: {0}")]
    Save(#[from] SaveError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing domain in URL")]
    MissingDomain,
}

/// Per-URL fetch failures
///
/// The crawler treats every variant the same way: the URL is skipped and
/// counted as failed, and traversal continues.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Network error for {url}: {source}")]
    Network { url: String, source: reqwest::Error },

    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Expected HTML at {url}, got '{content_type}'")]
    NotHtml { url: String, content_type: String },

    #[error("HTML parse error for {url}: {message}")]
    Parse { url: String, message: String },
}

/// Errors raised while writing content to disk
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("Content cannot be empty")]
    EmptyContent,

    #[error("Unknown text encoding: {0}")]
    UnknownEncoding(String),

    #[error("Content cannot be represented in {0}")]
    Unmappable(String),

    #[error("Failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Page Gleaner operations
pub type Result<T> = std::result::Result<T, GleanError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::CrawlerSettings;
pub use crawler::{Crawler, PageFetcher};
pub use output::{
    CrawlResults, CrawlSummary, FileSaver, JsonResultWriter, PageRecord, ResultWriter,
};
pub use crate::url::normalize_url;
