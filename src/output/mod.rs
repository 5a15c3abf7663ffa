//! Output module for persisting crawl results and saved content
//!
//! This module handles:
//! - The ordered URL -> page record mapping produced by a crawl
//! - Writing that mapping as JSON through the `ResultWriter` trait
//! - Collision-free file naming shared by the crawler and the file saver
//! - Text encodings for everything written to disk

pub mod encoding;
mod json;
pub mod naming;
mod records;
mod saver;
mod traits;

pub use json::JsonResultWriter;
pub use records::{CrawlResults, PageRecord};
pub use saver::{FileSaver, DEFAULT_FILENAME};
pub use traits::{CrawlSummary, OutputResult, ResultWriter};
