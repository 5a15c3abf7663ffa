//! Mutable bookkeeping for one crawl
//!
//! The visited-set, the pending stack and the results all live here and are
//! owned by a single crawler for the duration of one crawl.

use crate::output::{CrawlResults, PageRecord};
use std::collections::HashSet;
use url::Url;

/// A URL waiting on the stack with the hops it may still follow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUrl {
    pub url: Url,
    pub remaining_depth: u32,
}

/// Traversal state of a depth-first crawl
#[derive(Debug)]
pub struct CrawlState {
    max_depth: u32,
    visited: HashSet<String>,
    pending: Vec<PendingUrl>,
    results: CrawlResults,
    failed: usize,
}

impl CrawlState {
    /// Starts a crawl with only the seed on the stack
    pub fn new(seed: Url, max_depth: u32) -> Self {
        Self {
            max_depth,
            visited: HashSet::new(),
            pending: vec![PendingUrl {
                url: seed,
                remaining_depth: max_depth,
            }],
            results: CrawlResults::new(),
            failed: 0,
        }
    }

    /// Pops the next unvisited URL and marks it visited
    ///
    /// Entries for URLs visited since they were pushed are discarded.
    pub fn next_unvisited(&mut self) -> Option<PendingUrl> {
        while let Some(pending) = self.pending.pop() {
            if self.visited.insert(pending.url.as_str().to_string()) {
                return Some(pending);
            }
        }
        None
    }

    /// Pushes links found on one page so the first link is popped first
    pub fn push_links(&mut self, links: Vec<Url>, remaining_depth: u32) {
        let fresh = links
            .into_iter()
            .rev()
            .filter(|url| !self.visited.contains(url.as_str()))
            .map(|url| PendingUrl {
                url,
                remaining_depth,
            })
            .collect::<Vec<_>>();
        self.pending.extend(fresh);
    }

    /// Hops from the seed for an entry with the given remaining budget
    pub fn depth_of(&self, remaining_depth: u32) -> u32 {
        self.max_depth - remaining_depth
    }

    pub fn record(&mut self, record: PageRecord) {
        self.results.insert(record);
    }

    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    pub fn results(&self) -> &CrawlResults {
        &self.results
    }

    pub fn pages_visited(&self) -> usize {
        self.results.len()
    }

    pub fn pages_failed(&self) -> usize {
        self.failed
    }
}
