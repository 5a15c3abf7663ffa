//! HTML parser for extracting page content and links
//!
//! This module handles parsing HTML content to extract:
//! - The page title
//! - The visible text of the page
//! - Links to follow (from `<a href>` tags, in document order)

use crate::url::resolve_link;
use scraper::{Html, Node, Selector};
use url::Url;

/// Elements whose text never reaches the rendered page
const HIDDEN_ELEMENTS: &[&str] = &["head", "script", "style", "noscript", "template"];

/// Extracted information from an HTML page
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// The page title (from `<title>`), empty if absent
    pub title: String,

    /// Visible text with whitespace runs collapsed to single spaces
    pub text: String,

    /// Followable links found on the page (absolute, normalized, document order)
    pub links: Vec<Url>,
}

/// Parses HTML content and extracts the title, visible text and links
///
/// # Link Extraction Rules
///
/// **Include:**
/// - `<a href="...">` tags anywhere in the document
///
/// **Exclude:**
/// - `<a href="..." download>`
/// - `javascript:`, `mailto:`, `tel:` links
/// - Data URIs
/// - Fragment-only links
///
/// Relative hrefs resolve against `<base href>` when the document has one,
/// otherwise against `page_url`.
///
/// # Errors
///
/// Returns a message if the body is clearly not markup (it contains NUL
/// characters, which only appear when binary data is served as HTML).
///
/// # Example
///
/// ```
/// use page_gleaner::crawler::parse_html;
/// use url::Url;
///
/// let html = r#"<html><head><title>Test</title></head><body><a href="/page">Link</a></body></html>"#;
/// let base_url = Url::parse("https://example.com/").unwrap();
/// let parsed = parse_html(html, &base_url).unwrap();
/// assert_eq!(parsed.title, "Test");
/// assert_eq!(parsed.text, "Link");
/// assert_eq!(parsed.links[0].as_str(), "https://example.com/page");
/// ```
pub fn parse_html(html: &str, page_url: &Url) -> Result<ParsedPage, String> {
    if html.contains('\0') {
        return Err("document contains NUL characters; body is not text".to_string());
    }

    let document = Html::parse_document(html);

    let title = extract_title(&document);
    let text = extract_text(&document);
    let base_url = extract_base(&document, page_url);
    let links = extract_links(&document, &base_url);

    Ok(ParsedPage { title, text, links })
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> String {
    let Ok(title_selector) = Selector::parse("title") else {
        return String::new();
    };

    document
        .select(&title_selector)
        .next()
        .map(|element| collapse_whitespace(element.text()))
        .unwrap_or_default()
}

/// Concatenates every text node outside the hidden elements
fn extract_text(document: &Html) -> String {
    let visible = document.tree.root().descendants().filter_map(|node| {
        let Node::Text(text) = node.value() else {
            return None;
        };
        let hidden = node.ancestors().any(|ancestor| {
            matches!(ancestor.value(), Node::Element(el) if HIDDEN_ELEMENTS.contains(&el.name()))
        });
        (!hidden).then_some(&**text)
    });

    collapse_whitespace(visible)
}

fn collapse_whitespace<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Returns the document's `<base href>` resolved against the page URL
fn extract_base(document: &Html, page_url: &Url) -> Url {
    Selector::parse("base[href]")
        .ok()
        .and_then(|selector| {
            document
                .select(&selector)
                .next()
                .and_then(|element| element.value().attr("href"))
                .and_then(|href| page_url.join(href.trim()).ok())
        })
        .unwrap_or_else(|| page_url.clone())
}

/// Extracts all valid links from the HTML document
fn extract_links(document: &Html, base_url: &Url) -> Vec<Url> {
    let Ok(a_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&a_selector)
        // Skip if it has the download attribute
        .filter(|element| element.value().attr("download").is_none())
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_link(base_url, href))
        .collect()
}
