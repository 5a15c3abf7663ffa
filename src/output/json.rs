//! JSON file output for crawl results

use crate::config::DEFAULT_ENCODING;
use crate::output::encoding::{encode_text, lookup_encoding};
use crate::output::naming::{replace_file, write_unique};
use crate::output::records::CrawlResults;
use crate::output::traits::{OutputResult, ResultWriter};
use std::path::{Path, PathBuf};

/// Writes crawl results as a pretty-printed JSON object
#[derive(Debug, Clone)]
pub struct JsonResultWriter {
    encoding: String,
}

impl JsonResultWriter {
    /// Creates a writer that encodes output with the given label
    pub fn new(encoding: &str) -> OutputResult<Self> {
        lookup_encoding(encoding)?;
        Ok(Self {
            encoding: encoding.to_string(),
        })
    }

    fn render(&self, results: &CrawlResults) -> OutputResult<Vec<u8>> {
        let json = results.to_json()?;
        encode_text(&json, &self.encoding)
    }
}

impl Default for JsonResultWriter {
    fn default() -> Self {
        Self {
            encoding: DEFAULT_ENCODING.to_string(),
        }
    }
}

impl ResultWriter for JsonResultWriter {
    fn write(&self, results: &CrawlResults, path: &Path) -> OutputResult<PathBuf> {
        let bytes = self.render(results)?;
        Ok(write_unique(path, &bytes)?)
    }

    fn replace(&self, results: &CrawlResults, path: &Path) -> OutputResult<()> {
        let bytes = self.render(results)?;
        Ok(replace_file(path, &bytes)?)
    }
}
