//! The structured profile produced by scraping a storefront.
//!
//! Every top-level field of [`StoreProfile`] is always present in serialized
//! output. Extraction is best-effort: a field whose extractor found nothing
//! holds its empty value (empty string, empty list, empty map) rather than
//! being omitted, so consumers never need existence checks.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Complete profile of a single storefront.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreProfile {
    /// Display name of the store. Never empty: the domain fallback in the
    /// name extractor guarantees a value.
    pub store_name: String,
    /// The scraped URL after normalization (scheme-prefixed input).
    pub website_url: String,
    /// Catalog products from the storefront's public feed.
    pub products: Vec<Product>,
    /// Products featured on the homepage.
    pub hero_products: Vec<HeroProduct>,
    /// Main text of the privacy policy page, empty when not found.
    pub privacy_policy: String,
    /// Main text of the return/refund policy page, empty when not found.
    pub return_policy: String,
    pub faqs: Vec<Faq>,
    /// Social profiles keyed by platform name (`"instagram"`, `"facebook"`, ...).
    pub social_handles: BTreeMap<String, SocialLink>,
    pub contact_details: ContactDetails,
    /// Main text of the about/our-story page, empty when not found.
    pub brand_context: String,
    pub important_links: Vec<ImportantLink>,
}

/// A catalog product mapped from the storefront's `products.json` feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Shopify numeric product ID.
    pub id: i64,
    pub title: String,
    /// URL slug, e.g. `"linen-throw-natural"`.
    pub handle: String,
    pub vendor: Option<String>,
    pub product_type: Option<String>,
    pub tags: Vec<String>,
    /// Min/max over the variant prices that parsed as numbers; `None` when
    /// no variant carried a parseable price.
    pub price_range: Option<PriceRange>,
    /// `true` if any variant reports itself available for purchase.
    pub available: bool,
    /// Image source URLs, in feed order.
    pub images: Vec<String>,
    /// Absolute product page URL under the store origin.
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min_price: f64,
    pub max_price: f64,
}

/// A product link featured on the homepage.
///
/// Fields other than `url` may be empty, but a hero product with both
/// `title` and `image` empty is never emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroProduct {
    pub title: String,
    /// Absolute URL resolved against the store origin.
    pub url: String,
    /// `src` of the first image nested inside the product link.
    pub image: String,
    /// Text of the first price-classed element inside the link.
    pub price: String,
}

/// A question/answer pair lifted from an FAQ-style page.
///
/// Both sides are non-empty; questions without a qualifying answer are
/// dropped at extraction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// A social profile discovered on the homepage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Platform-local account name, e.g. `"acmegoods"`.
    pub handle: String,
    /// The matched link href verbatim, or a synthesized profile URL when the
    /// handle was found in page text rather than a link.
    pub url: String,
}

/// Contact channels found on the homepage and the contact page.
///
/// Keys found empty are omitted from serialized output; the struct itself is
/// always present on the profile (serializing to `{}` when nothing was found).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactDetails {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contact_page_emails: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contact_page_phones: Vec<String>,
}

impl ContactDetails {
    /// Returns `true` when no channel of any kind was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
            && self.phones.is_empty()
            && self.address.is_none()
            && self.contact_page_emails.is_empty()
            && self.contact_page_phones.is_empty()
    }
}

/// Category taxonomy for store utility links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkCategory {
    OrderTracking,
    Blog,
    Support,
    Shipping,
    SizeGuide,
    GiftCards,
    Wholesale,
}

impl std::fmt::Display for LinkCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkCategory::OrderTracking => write!(f, "order_tracking"),
            LinkCategory::Blog => write!(f, "blog"),
            LinkCategory::Support => write!(f, "support"),
            LinkCategory::Shipping => write!(f, "shipping"),
            LinkCategory::SizeGuide => write!(f, "size_guide"),
            LinkCategory::GiftCards => write!(f, "gift_cards"),
            LinkCategory::Wholesale => write!(f, "wholesale"),
        }
    }
}

/// A categorized utility link (order tracking, blog, support, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportantLink {
    pub category: LinkCategory,
    /// The anchor's visible text, trimmed.
    pub title: String,
    /// Absolute URL resolved against the store origin.
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_profile() -> StoreProfile {
        StoreProfile {
            store_name: "Acme Goods".to_string(),
            website_url: "https://acme-goods.com".to_string(),
            products: vec![],
            hero_products: vec![],
            privacy_policy: String::new(),
            return_policy: String::new(),
            faqs: vec![],
            social_handles: BTreeMap::new(),
            contact_details: ContactDetails::default(),
            brand_context: String::new(),
            important_links: vec![],
        }
    }

    #[test]
    fn empty_profile_serializes_with_every_top_level_key() {
        let json = serde_json::to_value(make_profile()).expect("serialization failed");
        let obj = json.as_object().expect("expected a JSON object");
        for key in [
            "store_name",
            "website_url",
            "products",
            "hero_products",
            "privacy_policy",
            "return_policy",
            "faqs",
            "social_handles",
            "contact_details",
            "brand_context",
            "important_links",
        ] {
            assert!(obj.contains_key(key), "missing top-level key: {key}");
        }
    }

    #[test]
    fn empty_contact_details_serialize_to_empty_object() {
        let json = serde_json::to_value(ContactDetails::default()).expect("serialization failed");
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn contact_details_omit_empty_keys_only() {
        let details = ContactDetails {
            emails: vec!["hello@acme-goods.com".to_string()],
            ..ContactDetails::default()
        };
        let json = serde_json::to_value(&details).expect("serialization failed");
        assert_eq!(
            json,
            serde_json::json!({ "emails": ["hello@acme-goods.com"] })
        );
    }

    #[test]
    fn contact_details_is_empty_reflects_all_channels() {
        assert!(ContactDetails::default().is_empty());
        let details = ContactDetails {
            address: Some("12 Harbor St, Portland".to_string()),
            ..ContactDetails::default()
        };
        assert!(!details.is_empty());
    }

    #[test]
    fn link_category_serializes_snake_case() {
        let json = serde_json::to_value(LinkCategory::OrderTracking).expect("serialization failed");
        assert_eq!(json, serde_json::json!("order_tracking"));
        let json = serde_json::to_value(LinkCategory::SizeGuide).expect("serialization failed");
        assert_eq!(json, serde_json::json!("size_guide"));
    }

    #[test]
    fn link_category_display_matches_serde_form() {
        assert_eq!(LinkCategory::GiftCards.to_string(), "gift_cards");
        assert_eq!(LinkCategory::Blog.to_string(), "blog");
    }

    #[test]
    fn absent_price_range_serializes_as_null() {
        let product = Product {
            id: 1,
            title: "Linen Throw".to_string(),
            handle: "linen-throw".to_string(),
            vendor: None,
            product_type: None,
            tags: vec![],
            price_range: None,
            available: false,
            images: vec![],
            url: "https://acme-goods.com/products/linen-throw".to_string(),
        };
        let json = serde_json::to_value(&product).expect("serialization failed");
        assert_eq!(json["price_range"], serde_json::Value::Null);
    }

    #[test]
    fn serde_roundtrip_profile() {
        let mut profile = make_profile();
        profile.faqs.push(Faq {
            question: "Do you ship internationally?".to_string(),
            answer: "Yes, to most countries.".to_string(),
        });
        profile.social_handles.insert(
            "instagram".to_string(),
            SocialLink {
                handle: "acmegoods".to_string(),
                url: "https://instagram.com/acmegoods".to_string(),
            },
        );

        let json = serde_json::to_string(&profile).expect("serialization failed");
        let decoded: StoreProfile = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(decoded.store_name, profile.store_name);
        assert_eq!(decoded.faqs, profile.faqs);
        assert_eq!(
            decoded.social_handles.get("instagram"),
            profile.social_handles.get("instagram")
        );
    }
}
