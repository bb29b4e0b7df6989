//! Field extractors
//!
//! Each module extracts one product field from a parsed document. All
//! extractors are pure functions: a miss yields `None` and never an error.

mod images;
mod price;
mod store;
mod title;

pub use images::extract_images;
pub use price::extract_price;
pub use store::{extract_store_logo, extract_store_name};
pub use title::extract_title;

use crate::document::ParsedDocument;

/// One step in a selector fallback chain.
pub(crate) enum Probe<'a> {
    /// Read a single attribute of the first matching element.
    Attr(&'a str, &'a str),
    /// Read the first present attribute, in priority order.
    AttrAny(&'a str, &'a [&'a str]),
    /// Read the text content of the first matching element.
    Text(&'a str),
}

/// Evaluate probes left to right, returning the first non-empty trimmed
/// value.
pub(crate) fn first_probe(doc: &ParsedDocument, probes: &[Probe]) -> Option<String> {
    probes.iter().find_map(|probe| {
        let value = match probe {
            Probe::Attr(selector, attr) => doc.first_attr(selector, attr),
            Probe::AttrAny(selector, attrs) => {
                let el = doc.first(selector)?;
                attrs
                    .iter()
                    .find_map(|attr| el.value().attr(attr).map(String::from))
            }
            Probe::Text(selector) => doc.first_text(selector),
        }?;
        let value = value.trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    })
}
