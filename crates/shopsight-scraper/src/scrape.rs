//! Scrape orchestration: one storefront URL in, one profile out.

use std::future::Future;

use scraper::Html;
use tracing::{info, warn};

use shopsight_core::StoreProfile;

use crate::catalog;
use crate::client::{normalize_store_url, StoreClient, StoreUrl};
use crate::error::ScrapeError;
use crate::extract::contact::{contact_page_details, homepage_contact};
use crate::extract::faq::extract_faqs;
use crate::extract::hero::hero_products;
use crate::extract::links::important_links;
use crate::extract::social::social_handles;
use crate::extract::store_name::extract_store_name;
use crate::platform;
use crate::probe;

/// Outcome of a scrape attempt.
///
/// An unreachable storefront is an answer, not an error: `Err(ScrapeError)`
/// is reserved for failures of the scraper itself.
#[derive(Debug)]
pub enum ScrapeOutcome {
    /// The storefront responded and a full profile was assembled.
    Profile(Box<StoreProfile>),
    /// The homepage could not be fetched. `status` carries the HTTP status
    /// of a non-2xx response; `None` means a network-level failure or a URL
    /// that would not parse.
    Unreachable { status: Option<u16> },
}

/// Profiles storefronts. Holds the shared HTTP client, so one instance
/// serves any number of concurrent scrapes.
pub struct StoreScraper {
    client: StoreClient,
}

impl StoreScraper {
    /// # Errors
    /// Returns [`ScrapeError::Http`] when the underlying HTTP client cannot
    /// be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScrapeError> {
        Ok(Self {
            client: StoreClient::new(timeout_secs, user_agent)?,
        })
    }

    /// Fetches the storefront at `website_url` and assembles its profile.
    ///
    /// Field extraction is best-effort: any single field failing or finding
    /// nothing resolves to that field's empty value and the scrape carries
    /// on. The profile shape is therefore always complete.
    ///
    /// # Errors
    /// Reserved for failures of the scraper itself. Reachability problems
    /// are answers, reported through [`ScrapeOutcome::Unreachable`] rather
    /// than as errors.
    pub async fn scrape(&self, website_url: &str) -> Result<ScrapeOutcome, ScrapeError> {
        let store = match normalize_store_url(website_url) {
            Ok(store) => store,
            Err(err) => {
                warn!(website_url, error = %err, "store url does not parse");
                return Ok(ScrapeOutcome::Unreachable { status: None });
            }
        };

        let page = match self.client.get_page(&store.parsed).await {
            Ok(page) => page,
            Err(err) => {
                warn!(url = %store.parsed, error = %err, "homepage fetch failed");
                return Ok(ScrapeOutcome::Unreachable { status: None });
            }
        };
        if !page.is_success() {
            warn!(
                url = %store.parsed,
                status = page.status.as_u16(),
                "homepage returned an error status"
            );
            return Ok(ScrapeOutcome::Unreachable {
                status: Some(page.status.as_u16()),
            });
        }

        info!(url = %store.parsed, "profiling storefront");
        let mut profile = homepage_profile(&page.body, &store);

        let base = &store.parsed;
        profile.products = or_empty("products", catalog::fetch_catalog(&self.client, base)).await;
        profile.privacy_policy = probe::privacy_policy(&self.client, base).await;
        profile.return_policy = probe::return_policy(&self.client, base).await;
        profile.faqs = extract_faqs(&self.client, base).await;
        profile.brand_context = probe::brand_context(&self.client, base).await;

        let (emails, phones) = contact_page_details(&self.client, base).await;
        profile.contact_details.contact_page_emails = emails;
        profile.contact_details.contact_page_phones = phones;

        info!(
            url = %store.parsed,
            products = profile.products.len(),
            hero_products = profile.hero_products.len(),
            faqs = profile.faqs.len(),
            social = profile.social_handles.len(),
            links = profile.important_links.len(),
            "storefront profile assembled"
        );
        Ok(ScrapeOutcome::Profile(Box::new(profile)))
    }
}

/// One pass over the parsed homepage. Every DOM-backed extractor runs here,
/// so the document is parsed exactly once and dropped before the first
/// await; the parsed tree is not `Send` and must not cross one.
fn homepage_profile(html: &str, store: &StoreUrl) -> StoreProfile {
    let doc = Html::parse_document(html);
    let base = &store.parsed;

    if !platform::is_shopify_store(html, &doc) {
        warn!(url = %base, "no storefront platform markers found, extraction may be sparse");
    }

    StoreProfile {
        store_name: extract_store_name(&doc, base),
        website_url: store.normalized.clone(),
        products: Vec::new(),
        hero_products: hero_products(&doc, base),
        privacy_policy: String::new(),
        return_policy: String::new(),
        faqs: Vec::new(),
        social_handles: social_handles(&doc),
        contact_details: homepage_contact(&doc),
        brand_context: String::new(),
        important_links: important_links(&doc, base),
    }
}

/// Runs a fallible extractor and absorbs its error into the field's empty
/// value. A failed field costs that field alone, never the scrape.
async fn or_empty<T, F>(field: &'static str, fut: F) -> T
where
    T: Default,
    F: Future<Output = Result<T, ScrapeError>>,
{
    match fut.await {
        Ok(value) => value,
        Err(err) => {
            warn!(field, error = %err, "field extraction failed, using empty value");
            T::default()
        }
    }
}
