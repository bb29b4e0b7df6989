//! Store identity extraction
//!
//! Recovers who is selling: a display name from site metas or the
//! hostname, and a logo URL resolved absolute against the page URL.

use super::{first_probe, Probe};
use crate::document::ParsedDocument;

/// Attribute priority shared by all logo probes.
const LOGO_ATTRS: &[&str] = &["content", "href", "src"];

/// Extract the store's display name: og:site_name, then the
/// application-name meta, then the first hostname label capitalized.
pub fn extract_store_name(doc: &ParsedDocument, url: &str) -> Option<String> {
    first_probe(
        doc,
        &[
            Probe::Attr(r#"meta[property="og:site_name"]"#, "content"),
            Probe::Attr(r#"meta[name="application-name"]"#, "content"),
        ],
    )
    .or_else(|| name_from_hostname(url))
}

/// Derive a name from the hostname: drop `www.`, take the first dot
/// label, capitalize its first character.
fn name_from_hostname(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);
    let label = host.split('.').next().filter(|l| !l.is_empty())?;

    let mut chars = label.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().collect::<String>() + chars.as_str())
}

/// Extract the store logo URL, absolute against the page URL.
pub fn extract_store_logo(doc: &ParsedDocument, url: &str) -> Option<String> {
    let raw = first_probe(
        doc,
        &[
            Probe::AttrAny(r#"meta[property="og:logo"]"#, LOGO_ATTRS),
            Probe::AttrAny(r#"link[rel="icon"]"#, LOGO_ATTRS),
            Probe::AttrAny(r#"link[rel="shortcut icon"]"#, LOGO_ATTRS),
            Probe::AttrAny(r#"link[rel="apple-touch-icon"]"#, LOGO_ATTRS),
            Probe::AttrAny(r#"img[class*="logo"]"#, LOGO_ATTRS),
            Probe::AttrAny(r#"img[id*="logo"]"#, LOGO_ATTRS),
            Probe::AttrAny(".logo img", LOGO_ATTRS),
            Probe::AttrAny("#logo img", LOGO_ATTRS),
        ],
    )?;

    match url::Url::parse(url).ok().and_then(|base| base.join(&raw).ok()) {
        Some(absolute) => Some(absolute.to_string()),
        // Unresolvable: keep the value only if it already looks absolute.
        None if raw.starts_with("http") => Some(raw),
        None => None,
    }
}
