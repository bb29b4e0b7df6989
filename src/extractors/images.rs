//! Product image extraction
//!
//! Gathers candidate image URLs in three priority tiers: social-card
//! metas, platform-tuned gallery selectors, and schema.org markup. URLs
//! are kept exactly as found in the page (absolute or relative),
//! de-duplicated, and capped at ten.

use crate::document::ParsedDocument;
use crate::platform::Platform;

/// Hard cap on returned image URLs.
const MAX_IMAGES: usize = 10;

/// Social-card image metas, in trust order.
const OG_IMAGE_SELECTORS: [&str; 4] = [
    r#"meta[property="og:image"]"#,
    r#"meta[property="og:image:url"]"#,
    r#"meta[property="og:image:secure_url"]"#,
    r#"meta[name="twitter:image"]"#,
];

/// Attributes that may carry an image URL, in priority order.
const URL_ATTRS: [&str; 5] = ["src", "data-src", "data-lazy", "data-zoom-image", "data-image"];

/// URL substrings that mark small/decorative images. Applied only to the
/// platform-selector tier; meta and schema.org candidates are trusted.
const ICON_SUBSTRINGS: [&str; 15] = [
    "logo",
    "icon",
    "sprite",
    "badge",
    "banner",
    "button",
    "/icons/",
    "favicon",
    "thumbnail",
    "avatar",
    "1x1",
    "16x16",
    "32x32",
    "64x64",
    "spacer.gif",
];

/// Gallery selectors per platform. The match is exhaustive, so every
/// platform tag has an entry and `Generic` is the guaranteed fallback.
fn platform_selectors(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Amazon => &["#landingImage", "#imgBlkFront", ".a-dynamic-image"],
        Platform::Ebay => &["#icImg", ".ux-image-carousel-item img"],
        Platform::Etsy => &[".image-carousel-container img", ".listing-page-image"],
        Platform::Walmart => &[
            r#"[data-testid="hero-image"] img"#,
            ".prod-hero-image img",
        ],
        Platform::Target => &[
            r#"[data-test="image-gallery-item"] img"#,
            ".slideDeckPicture img",
        ],
        Platform::Shopify => &[
            ".product__media img",
            ".product-single__photo img",
            ".product-gallery img",
        ],
        Platform::WooCommerce => &[
            ".woocommerce-product-gallery__image img",
            "img.wp-post-image",
        ],
        Platform::Magento => &[".gallery-placeholder img", ".fotorama__img"],
        Platform::BigCommerce => &[
            ".productView-image img",
            ".productView-thumbnail img",
        ],
        Platform::Generic => &[
            r#"img[itemprop="image"]"#,
            ".product-image img",
            ".product-gallery img",
            r#"img[class*="product"]"#,
            r#"img[id*="product"]"#,
            ".gallery img",
        ],
    }
}

/// Extract candidate product image URLs for a page on `platform`.
pub fn extract_images(doc: &ParsedDocument, platform: Platform) -> Vec<String> {
    let mut images: Vec<String> = Vec::new();

    // Tier 1: social-card metas, trusted as primary images.
    for selector in OG_IMAGE_SELECTORS {
        for element in doc.select(selector) {
            if let Some(url) = element.value().attr("content") {
                push_unique(&mut images, url);
            }
        }
    }

    // Tier 2: platform gallery selectors, with the small-icon filter.
    'tier2: for selector in platform_selectors(platform) {
        for element in doc.select(selector) {
            if images.len() >= MAX_IMAGES {
                break 'tier2;
            }
            let candidate = URL_ATTRS
                .iter()
                .find_map(|attr| element.value().attr(attr).map(String::from))
                .or_else(|| {
                    if platform == Platform::Amazon {
                        dynamic_image_first_key(element.value().attr("data-a-dynamic-image"))
                    } else {
                        None
                    }
                });
            if let Some(url) = candidate {
                if !is_small_icon(&url) {
                    push_unique(&mut images, &url);
                }
            }
        }
    }

    // Tier 3: schema.org product images, src only, no filter.
    for element in doc.select(r#"[itemtype*="schema.org/Product"] [itemprop="image"]"#) {
        if images.len() >= MAX_IMAGES {
            break;
        }
        if let Some(url) = element.value().attr("src") {
            push_unique(&mut images, url);
        }
    }

    images
}

/// Append a URL unless it is already present or the cap is reached.
fn push_unique(images: &mut Vec<String>, url: &str) {
    if images.len() >= MAX_IMAGES {
        return;
    }
    if !images.iter().any(|existing| existing == url) {
        images.push(url.to_string());
    }
}

/// First key of Amazon's `data-a-dynamic-image` JSON map, which maps
/// candidate URLs to size descriptors. Malformed JSON is skipped.
fn dynamic_image_first_key(raw: Option<&str>) -> Option<String> {
    let map: serde_json::Value = serde_json::from_str(raw?).ok()?;
    map.as_object()?.keys().next().cloned()
}

/// Reject URLs that look like logos, icons, or other page furniture.
fn is_small_icon(url: &str) -> bool {
    let url = url.to_lowercase();
    ICON_SUBSTRINGS.iter().any(|needle| url.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_og_images_come_first() {
        let doc = ParsedDocument::parse(
            r#"<html><head>
                <meta property="og:image" content="https://cdn.example.com/main.jpg">
                <meta name="twitter:image" content="https://cdn.example.com/card.jpg">
            </head><body>
                <img class="product-image-main" src="/images/gallery-1.jpg">
            </body></html>"#,
        );
        let images = extract_images(&doc, Platform::Generic);
        assert_eq!(
            images,
            vec![
                "https://cdn.example.com/main.jpg",
                "https://cdn.example.com/card.jpg",
                "/images/gallery-1.jpg",
            ]
        );
    }

    #[test]
    fn test_duplicates_skipped() {
        let doc = ParsedDocument::parse(
            r#"<html><head>
                <meta property="og:image" content="https://cdn.example.com/main.jpg">
                <meta property="og:image:url" content="https://cdn.example.com/main.jpg">
            </head></html>"#,
        );
        let images = extract_images(&doc, Platform::Generic);
        assert_eq!(images, vec!["https://cdn.example.com/main.jpg"]);
    }

    #[test]
    fn test_cap_at_ten() {
        let mut html = String::from("<html><body>");
        for i in 0..20 {
            html.push_str(&format!(r#"<img class="product-shot" src="/img/{i}.jpg">"#));
        }
        html.push_str("</body></html>");

        let doc = ParsedDocument::parse(&html);
        let images = extract_images(&doc, Platform::Generic);
        assert_eq!(images.len(), 10);
        assert_eq!(images[0], "/img/0.jpg");
        assert_eq!(images[9], "/img/9.jpg");
    }

    #[test]
    fn test_icon_filter_only_in_platform_tier() {
        let doc = ParsedDocument::parse(
            r#"<html><head>
                <meta property="og:image" content="https://cdn.example.com/logo-sprite.png">
            </head><body>
                <img class="product-shot" src="https://cdn.example.com/logo-sprite.png">
                <img class="product-shot" src="https://cdn.example.com/real.jpg">
            </body></html>"#,
        );
        let images = extract_images(&doc, Platform::Generic);
        // The OG copy is trusted; the platform-tier copy is filtered out.
        assert_eq!(
            images,
            vec![
                "https://cdn.example.com/logo-sprite.png",
                "https://cdn.example.com/real.jpg",
            ]
        );
    }

    #[test]
    fn test_lazy_load_attributes() {
        let doc = ParsedDocument::parse(
            r#"<html><body>
                <img class="product-shot" data-src="/img/lazy.jpg">
                <img class="product-shot" data-zoom-image="/img/zoom.jpg">
            </body></html>"#,
        );
        let images = extract_images(&doc, Platform::Generic);
        assert_eq!(images, vec!["/img/lazy.jpg", "/img/zoom.jpg"]);
    }

    #[test]
    fn test_amazon_dynamic_image_map() {
        let doc = ParsedDocument::parse(
            r#"<html><body>
                <img id="landingImage"
                     data-a-dynamic-image='{"https://m.media.example/71x.jpg":[500,500],"https://m.media.example/82y.jpg":[1000,1000]}'>
            </body></html>"#,
        );
        let images = extract_images(&doc, Platform::Amazon);
        assert_eq!(images, vec!["https://m.media.example/71x.jpg"]);
    }

    #[test]
    fn test_amazon_malformed_dynamic_image_skipped() {
        let doc = ParsedDocument::parse(
            r#"<html><body>
                <img id="landingImage" data-a-dynamic-image="{not json">
            </body></html>"#,
        );
        assert!(extract_images(&doc, Platform::Amazon).is_empty());
    }

    #[test]
    fn test_schema_org_fallback() {
        let doc = ParsedDocument::parse(
            r#"<html><body>
                <div itemscope itemtype="https://schema.org/Product">
                    <img itemprop="image" src="/img/schema.jpg">
                </div>
            </body></html>"#,
        );
        let images = extract_images(&doc, Platform::Generic);
        assert_eq!(images, vec!["/img/schema.jpg"]);
    }
}
