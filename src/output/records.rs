//! Crawl result records and their JSON form

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::HashMap;

/// Content extracted from one successfully fetched page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRecord {
    /// Normalized URL the page was fetched from (the results key)
    #[serde(skip)]
    pub url: String,

    /// Page title, empty if the page has no `<title>`
    pub title: String,

    /// Visible text, whitespace-normalized
    pub text: String,

    /// Hops from the seed along the path that reached this page
    #[serde(skip)]
    pub depth: u32,
}

/// Ordered mapping from URL to the record fetched from it
///
/// Iteration and serialization follow insertion order, which for a crawl is
/// the depth-first visiting order.
#[derive(Debug, Clone, Default)]
pub struct CrawlResults {
    pages: Vec<PageRecord>,
    index: HashMap<String, usize>,
}

impl CrawlResults {
    /// Creates an empty result set
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record; returns false (keeping the original) if the URL is already present
    pub fn insert(&mut self, record: PageRecord) -> bool {
        if self.index.contains_key(&record.url) {
            return false;
        }
        self.index.insert(record.url.clone(), self.pages.len());
        self.pages.push(record);
        true
    }

    pub fn get(&self, url: &str) -> Option<&PageRecord> {
        self.index.get(url).map(|&i| &self.pages[i])
    }

    pub fn contains(&self, url: &str) -> bool {
        self.index.contains_key(url)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &PageRecord> {
        self.pages.iter()
    }

    /// URLs in insertion order
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(|p| p.url.as_str())
    }

    /// Renders the results as a JSON object indented with four spaces
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        // serde_json only ever emits valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl Serialize for CrawlResults {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.pages.len()))?;
        for page in &self.pages {
            map.serialize_entry(&page.url, page)?;
        }
        map.end()
    }
}
