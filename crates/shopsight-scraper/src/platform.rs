//! Shopify storefront detection.

use scraper::{Html, Selector};

/// Substrings that identify a Shopify-rendered page. Checked case-sensitively
/// against the raw markup, so theme JS globals (`Shopify.theme`), section
/// wrappers, and CDN asset hosts all count.
const SHOPIFY_MARKERS: &[&str] = &[
    "Shopify.theme",
    "shopify-section",
    "cdn.shopify.com",
    "myshopify.com",
];

/// Returns `true` when the page looks like a Shopify storefront: either a raw
/// markup marker or the checkout API token meta tag is present.
///
/// A negative result does not stop a scrape; the caller logs it and proceeds,
/// since most extractors work on any storefront HTML.
#[must_use]
pub fn is_shopify_store(html: &str, doc: &Html) -> bool {
    if SHOPIFY_MARKERS.iter().any(|marker| html.contains(marker)) {
        return true;
    }

    let token_meta = Selector::parse(r#"meta[name="shopify-checkout-api-token"]"#)
        .expect("valid checkout token selector");
    doc.select(&token_meta).next().is_some()
}
