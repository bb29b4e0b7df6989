//! Product price extraction
//!
//! Four-tier fallback: structured meta fields, price-like elements,
//! whole-body text, then absent. Each tier short-circuits on its first
//! hit, so a structured meta price always beats a styled `.price` div.

use regex::Regex;

use crate::document::ParsedDocument;

/// Price-bearing meta selectors, in priority order.
const PRICE_META_SELECTORS: [&str; 4] = [
    r#"meta[property="product:price:amount"]"#,
    r#"meta[itemprop="price"]"#,
    r#"meta[name="price"]"#,
    r#"meta[property="og:price:amount"]"#,
];

/// Currency-code meta selectors, parallel to the price list.
const CURRENCY_META_SELECTORS: [&str; 3] = [
    r#"meta[property="product:price:currency"]"#,
    r#"meta[property="og:price:currency"]"#,
    r#"meta[itemprop="priceCurrency"]"#,
];

/// Elements likely to carry a price in attributes or text.
const PRICE_ELEMENT_SELECTORS: [&str; 4] = [
    r#"[itemprop="price"]"#,
    r#"[class*="price"]"#,
    r#"[id*="price"]"#,
    "[data-price]",
];

/// Extract the product price, with a leading currency code when one is
/// advertised alongside a structured price.
pub fn extract_price(doc: &ParsedDocument) -> Option<String> {
    if let Some(price) = price_from_meta(doc) {
        return Some(price);
    }
    if let Some(price) = price_from_elements(doc) {
        return Some(price);
    }
    price_from_body(doc)
}

/// Tier 1: structured price metas, optionally prefixed with a currency
/// code from the parallel currency metas.
fn price_from_meta(doc: &ParsedDocument) -> Option<String> {
    let price = PRICE_META_SELECTORS.iter().find_map(|selector| {
        doc.first_attr(selector, "content")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    })?;

    let currency = CURRENCY_META_SELECTORS.iter().find_map(|selector| {
        doc.first_attr(selector, "content")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    });

    Some(match currency {
        Some(code) => format!("{} {}", code, price),
        None => price,
    })
}

/// Tier 2: scan price-like elements, reading content attr, data-price
/// attr, then rendered text. Symbol-prefixed amounts win over bare
/// numbers within each candidate.
fn price_from_elements(doc: &ParsedDocument) -> Option<String> {
    for selector in PRICE_ELEMENT_SELECTORS {
        for element in doc.select(selector) {
            let candidates = [
                element.value().attr("content").map(String::from),
                element.value().attr("data-price").map(String::from),
                Some(element.text().collect::<String>()),
            ];

            for candidate in candidates.into_iter().flatten() {
                let candidate = collapse_whitespace(&candidate);
                if let Some(price) =
                    match_symbol_price(&candidate).or_else(|| match_bare_price(&candidate))
                {
                    return Some(price);
                }
            }
        }
    }
    None
}

/// Tier 3: first symbol-prefixed amount anywhere in the body text.
fn price_from_body(doc: &ParsedDocument) -> Option<String> {
    let body = collapse_whitespace(&doc.body_text());
    match_symbol_price(&body)
}

/// Collapse whitespace runs to single spaces.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Match a currency-symbol-prefixed amount like `$1,299.00` or `€ 19,99`.
fn match_symbol_price(text: &str) -> Option<String> {
    let re = Regex::new(r"[€£$¥₹]\s?\d[\d,.\s]*").ok()?;
    re.find(text).map(|m| m.as_str().trim().to_string())
}

/// Match a bare numeric amount like `19.99`.
fn match_bare_price(text: &str) -> Option<String> {
    let re = Regex::new(r"\d[\d,.]*").ok()?;
    re.find(text).map(|m| m.as_str().to_string())
}
