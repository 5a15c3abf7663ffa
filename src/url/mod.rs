//! URL handling module for Page Gleaner
//!
//! This module provides URL normalization, href resolution and the host
//! comparison used to keep a crawl on the seed's site.

mod domain;
mod normalize;

// Re-export main functions
pub use domain::{extract_domain, same_host};
pub use normalize::{normalize_url, resolve_link};
