//! Catalog feed fetching and mapping.
//!
//! Shopify storefronts expose their catalog at `/products.json`. Observed
//! shape notes, since the endpoint is undocumented:
//!
//! - `tags` is a JSON array of strings on the current storefront API, but the
//!   legacy Liquid rendering served one comma-joined string. Both occur in
//!   the wild, so the field deserializes as an untagged union.
//! - `price` is a decimal string (`"12.99"`); `available` is per variant and
//!   sometimes absent, in which case the variant counts as unavailable.

use serde::Deserialize;
use tracing::{debug, info};
use url::Url;

use shopsight_core::{PriceRange, Product};

use crate::client::StoreClient;
use crate::error::ScrapeError;

#[derive(Debug, Deserialize)]
struct CatalogFeed {
    #[serde(default)]
    products: Vec<FeedProduct>,
}

#[derive(Debug, Deserialize)]
struct FeedProduct {
    id: i64,
    title: String,
    handle: String,
    #[serde(default)]
    vendor: Option<String>,
    #[serde(default)]
    product_type: Option<String>,
    #[serde(default)]
    tags: FeedTags,
    #[serde(default)]
    images: Vec<FeedImage>,
    #[serde(default)]
    variants: Vec<FeedVariant>,
}

/// String-or-array tag field; see the module notes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FeedTags {
    List(Vec<String>),
    Joined(String),
}

impl Default for FeedTags {
    fn default() -> Self {
        FeedTags::List(Vec::new())
    }
}

impl FeedTags {
    fn into_list(self) -> Vec<String> {
        match self {
            FeedTags::List(tags) => tags,
            FeedTags::Joined(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(ToString::to_string)
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct FeedVariant {
    #[serde(default)]
    price: Option<String>,
    #[serde(default)]
    available: bool,
}

#[derive(Debug, Deserialize)]
struct FeedImage {
    #[serde(default)]
    src: String,
}

/// Fetches the store's public catalog feed and maps it to [`Product`]s.
///
/// A missing feed (404 — the store is not on Shopify, or the feed is
/// disabled) resolves to an empty catalog.
///
/// # Errors
///
/// Returns `ScrapeError::Http` on transport failures,
/// `ScrapeError::UnexpectedStatus` on non-404 error statuses, and
/// `ScrapeError::Deserialize` when the body is not a valid feed.
pub async fn fetch_catalog(client: &StoreClient, base: &Url) -> Result<Vec<Product>, ScrapeError> {
    let url = base
        .join("/products.json")
        .map_err(|e| ScrapeError::InvalidUrl {
            url: base.to_string(),
            reason: e.to_string(),
        })?;

    let page = client.get_page(&url).await?;
    if page.status.as_u16() == 404 {
        debug!(url = %url, "catalog feed not found");
        return Ok(Vec::new());
    }
    if !page.is_success() {
        return Err(ScrapeError::UnexpectedStatus {
            status: page.status.as_u16(),
            url: url.to_string(),
        });
    }

    let feed: CatalogFeed =
        serde_json::from_str(&page.body).map_err(|source| ScrapeError::Deserialize {
            context: format!("catalog feed at {url}"),
            source,
        })?;

    let products: Vec<Product> = feed
        .products
        .into_iter()
        .map(|product| map_product(product, base))
        .collect();
    info!(url = %url, count = products.len(), "catalog feed parsed");
    Ok(products)
}

fn map_product(feed: FeedProduct, base: &Url) -> Product {
    let price_range = price_range_of(&feed.variants);
    let available = feed.variants.iter().any(|v| v.available);
    let product_path = format!("/products/{}", feed.handle);
    let url = base
        .join(&product_path)
        .map_or_else(|_| product_path.clone(), |u| u.to_string());

    Product {
        id: feed.id,
        title: feed.title,
        handle: feed.handle,
        vendor: feed.vendor,
        product_type: feed.product_type,
        tags: feed.tags.into_list(),
        price_range,
        available,
        images: feed
            .images
            .into_iter()
            .map(|image| image.src)
            .filter(|src| !src.is_empty())
            .collect(),
        url,
    }
}

/// Min/max over the variant prices that parse as numbers; `None` when no
/// variant carries a parseable price.
fn price_range_of(variants: &[FeedVariant]) -> Option<PriceRange> {
    let mut prices = variants
        .iter()
        .filter_map(|v| v.price.as_deref())
        .filter_map(|p| p.trim().parse::<f64>().ok());

    let first = prices.next()?;
    let (min_price, max_price) = prices.fold((first, first), |(lo, hi), price| {
        (lo.min(price), hi.max(price))
    });
    Some(PriceRange {
        min_price,
        max_price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_variant(price: Option<&str>, available: bool) -> FeedVariant {
        FeedVariant {
            price: price.map(ToString::to_string),
            available,
        }
    }

    fn make_feed_product(variants: Vec<FeedVariant>) -> FeedProduct {
        FeedProduct {
            id: 1001,
            title: "Linen Throw".to_string(),
            handle: "linen-throw".to_string(),
            vendor: Some("Acme Goods".to_string()),
            product_type: Some("Home".to_string()),
            tags: FeedTags::List(vec!["linen".to_string()]),
            images: vec![FeedImage {
                src: "https://cdn.example.com/linen.jpg".to_string(),
            }],
            variants,
        }
    }

    fn base() -> Url {
        Url::parse("https://acme-goods.com").expect("valid base url")
    }

    // -----------------------------------------------------------------------
    // price_range_of
    // -----------------------------------------------------------------------

    #[test]
    fn price_range_spans_min_and_max() {
        let variants = vec![
            make_variant(Some("10.00"), true),
            make_variant(Some("25.00"), true),
            make_variant(Some("10.00"), true),
        ];
        let range = price_range_of(&variants).expect("expected a price range");
        assert!((range.min_price - 10.0).abs() < f64::EPSILON);
        assert!((range.max_price - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn price_range_none_when_no_variant_has_a_price() {
        let variants = vec![make_variant(None, true), make_variant(Some(""), true)];
        assert!(price_range_of(&variants).is_none());
    }

    #[test]
    fn price_range_skips_unparseable_prices() {
        let variants = vec![
            make_variant(Some("not-a-price"), true),
            make_variant(Some("12.50"), true),
        ];
        let range = price_range_of(&variants).expect("expected a price range");
        assert!((range.min_price - 12.5).abs() < f64::EPSILON);
        assert!((range.max_price - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn price_range_single_variant_collapses_to_one_value() {
        let variants = vec![make_variant(Some("8.00"), false)];
        let range = price_range_of(&variants).expect("expected a price range");
        assert!((range.min_price - 8.0).abs() < f64::EPSILON);
        assert!((range.max_price - 8.0).abs() < f64::EPSILON);
    }

    // -----------------------------------------------------------------------
    // tags
    // -----------------------------------------------------------------------

    #[test]
    fn tags_array_passes_through() {
        let tags = FeedTags::List(vec!["linen".to_string(), "home".to_string()]);
        assert_eq!(tags.into_list(), vec!["linen", "home"]);
    }

    #[test]
    fn tags_comma_string_splits_and_trims() {
        let tags = FeedTags::Joined("linen, home , sale".to_string());
        assert_eq!(tags.into_list(), vec!["linen", "home", "sale"]);
    }

    #[test]
    fn tags_empty_string_yields_no_tags() {
        let tags = FeedTags::Joined(String::new());
        assert!(tags.into_list().is_empty());
    }

    #[test]
    fn tags_deserialize_from_both_shapes() {
        let from_array: FeedProduct = serde_json::from_value(serde_json::json!({
            "id": 1, "title": "A", "handle": "a", "tags": ["x", "y"]
        }))
        .expect("array tags should deserialize");
        assert_eq!(from_array.tags.into_list(), vec!["x", "y"]);

        let from_string: FeedProduct = serde_json::from_value(serde_json::json!({
            "id": 2, "title": "B", "handle": "b", "tags": "x, y"
        }))
        .expect("string tags should deserialize");
        assert_eq!(from_string.tags.into_list(), vec!["x", "y"]);
    }

    // -----------------------------------------------------------------------
    // map_product
    // -----------------------------------------------------------------------

    #[test]
    fn map_product_builds_absolute_product_url() {
        let product = map_product(make_feed_product(vec![]), &base());
        assert_eq!(product.url, "https://acme-goods.com/products/linen-throw");
    }

    #[test]
    fn map_product_available_when_any_variant_is() {
        let product = map_product(
            make_feed_product(vec![
                make_variant(Some("10.00"), false),
                make_variant(Some("12.00"), true),
            ]),
            &base(),
        );
        assert!(product.available);
    }

    #[test]
    fn map_product_unavailable_when_no_variant_is() {
        let product = map_product(
            make_feed_product(vec![make_variant(Some("10.00"), false)]),
            &base(),
        );
        assert!(!product.available);
    }

    #[test]
    fn map_product_without_variants_has_no_price_range() {
        let product = map_product(make_feed_product(vec![]), &base());
        assert!(product.price_range.is_none());
        assert!(!product.available);
    }

    #[test]
    fn map_product_collects_image_sources() {
        let product = map_product(make_feed_product(vec![]), &base());
        assert_eq!(product.images, vec!["https://cdn.example.com/linen.jpg"]);
    }

    #[test]
    fn missing_variant_available_defaults_to_unavailable() {
        let variant: FeedVariant =
            serde_json::from_value(serde_json::json!({ "price": "9.99" }))
                .expect("variant without available should deserialize");
        assert!(!variant.available);
    }
}
