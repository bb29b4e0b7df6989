//! Parsed-document adapter
//!
//! Wraps a parsed HTML tree behind a small query interface: CSS selector
//! lookup in document order, first-match convenience accessors, and raw
//! text dumps for substring-based heuristics. Built once per extraction
//! and discarded after assembly.

use scraper::{ElementRef, Html, Selector};

/// Immutable, query-capable view of one fetched HTML document.
pub struct ParsedDocument {
    tree: Html,
    raw: String,
}

impl ParsedDocument {
    /// Parse raw HTML into a queryable document.
    pub fn parse(html: &str) -> Self {
        Self {
            tree: Html::parse_document(html),
            raw: html.to_string(),
        }
    }

    /// All elements matching a CSS selector, in document order.
    /// An invalid selector matches nothing.
    pub fn select(&self, selector: &str) -> Vec<ElementRef<'_>> {
        let selector = match Selector::parse(selector) {
            Ok(s) => s,
            Err(_) => return vec![],
        };
        self.tree.select(&selector).collect()
    }

    /// First element matching a CSS selector.
    pub fn first(&self, selector: &str) -> Option<ElementRef<'_>> {
        let selector = Selector::parse(selector).ok()?;
        self.tree.select(&selector).next()
    }

    /// Attribute value of the first element matching a selector.
    pub fn first_attr(&self, selector: &str, attr: &str) -> Option<String> {
        self.first(selector)
            .and_then(|el| el.value().attr(attr).map(String::from))
    }

    /// Trimmed text content of the first element matching a selector.
    pub fn first_text(&self, selector: &str) -> Option<String> {
        self.first(selector)
            .map(|el| el.text().collect::<String>().trim().to_string())
    }

    /// The raw HTML source the document was parsed from.
    pub fn raw_html(&self) -> &str {
        &self.raw
    }

    /// Concatenated text content of the document body.
    pub fn body_text(&self) -> String {
        match self.first("body") {
            Some(body) => body.text().collect::<String>(),
            None => String::new(),
        }
    }
}
