//! Product title extraction

use super::{first_probe, Probe};
use crate::document::ParsedDocument;

/// Extract the product title: Open Graph meta, then Twitter Card meta,
/// then the document `<title>`.
pub fn extract_title(doc: &ParsedDocument) -> Option<String> {
    first_probe(
        doc,
        &[
            Probe::Attr(r#"meta[property="og:title"]"#, "content"),
            Probe::Attr(r#"meta[name="twitter:title"]"#, "content"),
            Probe::Text("title"),
        ],
    )
}
