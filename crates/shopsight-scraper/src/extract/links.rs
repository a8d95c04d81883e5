//! Utility-link discovery across homepage navigation.

use std::collections::HashSet;

use scraper::{Html, Selector};
use url::Url;

use shopsight_core::{ImportantLink, LinkCategory};

use super::element_text;

/// Category keyword taxonomy, matched case-insensitively against an anchor's
/// href or visible text.
const LINK_TAXONOMY: &[(LinkCategory, &[&str])] = &[
    (
        LinkCategory::OrderTracking,
        &["track", "tracking", "order-status", "track-order"],
    ),
    (LinkCategory::Blog, &["blog", "news", "articles"]),
    (LinkCategory::Support, &["support", "help", "customer-service"]),
    (LinkCategory::Shipping, &["shipping", "delivery"]),
    (LinkCategory::SizeGuide, &["size-guide", "sizing", "size-chart"]),
    (LinkCategory::GiftCards, &["gift-card", "gift-cards"]),
    (LinkCategory::Wholesale, &["wholesale", "trade", "bulk"]),
];

/// Finds one link per category. Candidates are anchors inside `nav`, `header`
/// and `footer` elements followed by every anchor on the page, so navigation
/// links win over body links for the same category. The final list is
/// de-duplicated by absolute URL, first seen kept.
#[must_use]
pub fn important_links(doc: &Html, base: &Url) -> Vec<ImportantLink> {
    let container_sel = Selector::parse("nav, header, footer").expect("valid container selector");
    let anchor_sel = Selector::parse("a[href]").expect("valid anchor selector");

    let mut candidates: Vec<(String, String)> = Vec::new();
    for container in doc.select(&container_sel) {
        for anchor in container.select(&anchor_sel) {
            if let Some(href) = anchor.value().attr("href") {
                candidates.push((href.to_string(), element_text(anchor)));
            }
        }
    }
    for anchor in doc.select(&anchor_sel) {
        if let Some(href) = anchor.value().attr("href") {
            candidates.push((href.to_string(), element_text(anchor)));
        }
    }

    let mut links = Vec::new();
    for (category, keywords) in LINK_TAXONOMY {
        let hit = candidates.iter().find(|(href, text)| {
            let href = href.to_lowercase();
            let text = text.to_lowercase();
            keywords
                .iter()
                .any(|keyword| href.contains(keyword) || text.contains(keyword))
        });
        if let Some((href, text)) = hit {
            let url = base
                .join(href)
                .map_or_else(|_| href.clone(), |joined| joined.to_string());
            links.push(ImportantLink {
                category: *category,
                title: text.clone(),
                url,
            });
        }
    }

    let mut seen = HashSet::new();
    links.retain(|link| seen.insert(link.url.clone()));
    links
}
