//! E-commerce platform detection
//!
//! Classifies a document/URL pair into a known platform so the image
//! extractor can use selectors tuned to that platform's DOM. Detection is
//! best-effort and always yields a value; unknown sites are `Generic`.

use crate::document::ParsedDocument;

/// Known e-commerce platforms, derived per extraction call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Amazon,
    Ebay,
    Etsy,
    Walmart,
    Target,
    Shopify,
    WooCommerce,
    Magento,
    BigCommerce,
    Generic,
}

/// Hostname substrings checked first, in order.
const HOST_SIGNATURES: [(&str, Platform); 5] = [
    ("amazon.", Platform::Amazon),
    ("ebay.", Platform::Ebay),
    ("etsy.", Platform::Etsy),
    ("walmart.", Platform::Walmart),
    ("target.", Platform::Target),
];

/// Detect the platform for a document fetched from `url`.
///
/// Priority order: URL hostname match, then platform signatures in the
/// raw HTML (substrings or marker tags), then `Generic`.
pub fn detect_platform(doc: &ParsedDocument, url: &str) -> Platform {
    if let Ok(parsed) = url::Url::parse(url) {
        if let Some(host) = parsed.host_str() {
            let host = host.to_lowercase();
            for (needle, platform) in HOST_SIGNATURES {
                if host.contains(needle) {
                    return platform;
                }
            }
        }
    }

    let html = doc.raw_html().to_lowercase();

    if html.contains("shopify") || doc.first(r#"meta[name="shopify-checkout-api-token"]"#).is_some()
    {
        return Platform::Shopify;
    }
    if html.contains("woocommerce")
        || doc
            .first_attr(r#"meta[name="generator"]"#, "content")
            .is_some_and(|c| c.to_lowercase().contains("woocommerce"))
    {
        return Platform::WooCommerce;
    }
    if html.contains("magento") || doc.first(r#"script[src*="mage/"]"#).is_some() {
        return Platform::Magento;
    }
    if html.contains("bigcommerce") {
        return Platform::BigCommerce;
    }

    Platform::Generic
}
