//! Configuration module for Page Gleaner
//!
//! Settings are layered: built-in defaults, then an optional TOML settings
//! file, then explicit command-line flags. Validation runs on the result.
//!
//! # Example
//!
//! ```no_run
//! use page_gleaner::config::{load_settings, validate, CrawlerSettings};
//! use std::path::Path;
//!
//! let file = load_settings(Path::new("gleaner.toml")).unwrap();
//! let settings = CrawlerSettings::default().with_file(&file);
//! validate(&settings).unwrap();
//! println!("Crawler will use max depth: {}", settings.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    CrawlerSection, CrawlerSettings, FileSettings, OutputSection, DEFAULT_ENCODING,
    DEFAULT_MAX_DEPTH, DEFAULT_OUTPUT_PATH, DEFAULT_SAVE_INTERVAL, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};

// Re-export parser and validation functions
pub use parser::load_settings;
pub use validation::{validate, validate_seed};
