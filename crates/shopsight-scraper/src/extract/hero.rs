//! Featured ("hero") products lifted from the homepage.

use std::collections::HashSet;

use scraper::{Html, Selector};
use url::Url;

use shopsight_core::HeroProduct;

use super::{class_contains, descendant_elements, element_text};

/// Upper bound on featured products taken from a homepage.
const MAX_HERO_PRODUCTS: usize = 6;

/// Collects up to six featured products: the first distinct product-page
/// anchors in document order, each described by its visible text, its first
/// nested image, and the text of its first price-classed descendant.
///
/// Distinctness is judged on the raw `href`, so the same product linked from
/// two homepage sections is reported once. An anchor with neither text nor
/// an image yields nothing but still counts as one of the six links.
#[must_use]
pub fn hero_products(doc: &Html, base: &Url) -> Vec<HeroProduct> {
    let anchor_sel = Selector::parse("a[href]").expect("valid anchor selector");

    let mut seen: HashSet<&str> = HashSet::new();
    let mut heroes = Vec::new();
    for anchor in doc.select(&anchor_sel) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if !href.contains("/products/") || seen.contains(href) {
            continue;
        }
        if seen.len() == MAX_HERO_PRODUCTS {
            break;
        }
        seen.insert(href);

        let title = element_text(anchor);
        let image = descendant_elements(anchor)
            .find(|el| el.value().name() == "img")
            .and_then(|img| img.value().attr("src"))
            .unwrap_or_default()
            .to_string();
        let price = descendant_elements(anchor)
            .find(|el| class_contains(*el, "price"))
            .map(element_text)
            .unwrap_or_default();

        if title.is_empty() && image.is_empty() {
            continue;
        }
        let url = base
            .join(href)
            .map_or_else(|_| href.to_string(), |joined| joined.to_string());
        heroes.push(HeroProduct {
            title,
            url,
            image,
            price,
        });
    }
    heroes
}
