//! Product metadata extraction for e-commerce pages
//!
//! Extracts structured product data from arbitrary storefront HTML:
//! - Title (Open Graph, Twitter Card, `<title>`)
//! - Price (structured metas, price-like elements, body text)
//! - Images (social-card metas, platform-tuned gallery selectors, schema.org)
//! - Store name and logo
//!
//! Pages are static HTML only; JavaScript-rendered content is not
//! evaluated. Extraction is best-effort: a missing price is reported in
//! the record's `error` field, everything else degrades silently.

pub mod document;
pub mod error;
pub mod extractors;
pub mod fetcher;
pub mod metadata;
pub mod platform;

pub use document::ParsedDocument;
pub use error::FetchError;
pub use fetcher::Fetcher;
pub use metadata::{extract, extract_from_html, ProductMetadata, PRICE_NOT_FOUND_MESSAGE};
pub use platform::{detect_platform, Platform};
