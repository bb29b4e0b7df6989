//! Metadata assembly
//!
//! Aggregates the field extractors into one `ProductMetadata` record and
//! applies the success policy: price is the only required field. A page
//! without an extractable price still yields whatever else was found,
//! with a fixed explanatory `error`; a page that could not be loaded
//! yields only `url` and the loader's failure message.

use serde::{Deserialize, Serialize};

use crate::document::ParsedDocument;
use crate::extractors::{
    extract_images, extract_price, extract_store_logo, extract_store_name, extract_title,
};
use crate::fetcher::Fetcher;
use crate::platform::detect_platform;

/// Error message when the document loaded but no price heuristic matched.
pub const PRICE_NOT_FOUND_MESSAGE: &str =
    "Price could not be determined from the page content.";

/// The extraction result. Absent optional fields serialize as `null`;
/// this shape is the wire contract of the surrounding HTTP layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMetadata {
    pub url: String,
    pub title: Option<String>,
    pub price: Option<String>,
    pub images: Vec<String>,
    pub store: Option<String>,
    pub store_logo: Option<String>,
    pub error: Option<String>,
}

impl ProductMetadata {
    /// Record for a page that could not be retrieved. No extractor ran,
    /// so every field other than `url` and `error` is absent.
    pub fn load_failure(url: &str, reason: String) -> Self {
        Self {
            url: url.to_string(),
            title: None,
            price: None,
            images: Vec::new(),
            store: None,
            store_logo: None,
            error: Some(reason),
        }
    }
}

/// Run all five extractors against already-fetched HTML.
pub fn extract_from_html(url: &str, html: &str) -> ProductMetadata {
    let doc = ParsedDocument::parse(html);
    let platform = detect_platform(&doc, url);

    let title = extract_title(&doc);
    let price = extract_price(&doc);
    let images = extract_images(&doc, platform);
    let store = extract_store_name(&doc, url);
    let store_logo = extract_store_logo(&doc, url);

    let error = if price.is_none() {
        Some(PRICE_NOT_FOUND_MESSAGE.to_string())
    } else {
        None
    };

    ProductMetadata {
        url: url.to_string(),
        title,
        price,
        images,
        store,
        store_logo,
        error,
    }
}

/// Fetch `url` and extract its product metadata. Never fails: every
/// failure mode is encoded in the returned record's `error` field.
pub async fn extract(fetcher: &Fetcher, url: &str) -> ProductMetadata {
    match fetcher.fetch(url).await {
        Ok(html) => extract_from_html(url, &html),
        Err(e) => ProductMetadata::load_failure(url, e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_record() {
        let html = r#"<html><head>
            <meta property="og:title" content="Widget">
            <meta property="og:site_name" content="MegaShop">
            <meta property="product:price:amount" content="9.99">
            <meta property="og:image" content="https://cdn.megashop.com/widget.jpg">
            <link rel="icon" href="/favicon.ico">
        </head><body></body></html>"#;

        let meta = extract_from_html("https://megashop.com/widget", html);
        assert_eq!(meta.title, Some("Widget".to_string()));
        assert_eq!(meta.price, Some("9.99".to_string()));
        assert_eq!(meta.images, vec!["https://cdn.megashop.com/widget.jpg"]);
        assert_eq!(meta.store, Some("MegaShop".to_string()));
        assert_eq!(
            meta.store_logo,
            Some("https://megashop.com/favicon.ico".to_string())
        );
        assert_eq!(meta.error, None);
    }

    #[test]
    fn test_missing_price_is_partial_result() {
        let html = r#"<html><head>
            <meta property="og:title" content="Widget">
        </head><body></body></html>"#;

        let meta = extract_from_html("https://megashop.com/widget", html);
        assert_eq!(meta.title, Some("Widget".to_string()));
        assert_eq!(meta.price, None);
        assert_eq!(meta.error, Some(PRICE_NOT_FOUND_MESSAGE.to_string()));
    }

    #[test]
    fn test_load_failure_record() {
        let meta = ProductMetadata::load_failure(
            "https://unreachable.example",
            "request failed: dns error".to_string(),
        );
        assert_eq!(meta.url, "https://unreachable.example");
        assert_eq!(meta.title, None);
        assert_eq!(meta.price, None);
        assert!(meta.images.is_empty());
        assert_eq!(meta.store, None);
        assert_eq!(meta.store_logo, None);
        assert_eq!(meta.error, Some("request failed: dns error".to_string()));
    }

    #[test]
    fn test_wire_shape_serializes_absent_as_null() {
        let meta = extract_from_html("https://shop.example/widget", "<html></html>");
        let json = serde_json::to_value(&meta).unwrap();

        assert_eq!(json["url"], "https://shop.example/widget");
        assert!(json["title"].is_null());
        assert!(json["price"].is_null());
        assert_eq!(json["images"], serde_json::json!([]));
        // camelCase on the wire.
        assert!(json.get("storeLogo").is_some());
        assert!(json["storeLogo"].is_null());
        assert_eq!(json["error"], PRICE_NOT_FOUND_MESSAGE);
    }

    #[test]
    fn test_idempotent_extraction() {
        let html = r#"<html><head>
            <meta property="og:title" content="Widget">
            <meta property="product:price:amount" content="9.99">
        </head></html>"#;

        let first = extract_from_html("https://shop.example/widget", html);
        let second = extract_from_html("https://shop.example/widget", html);
        assert_eq!(first, second);
    }
}
