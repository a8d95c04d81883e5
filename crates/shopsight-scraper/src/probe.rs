//! Well-known path probing under a store origin.
//!
//! Storefronts put policy and about pages at a handful of conventional
//! locations. The prober walks a fixed list of relative paths, takes the
//! first page whose readability-extracted text qualifies, and treats every
//! failure along the way as a miss rather than an error.

use tracing::debug;
use url::Url;

use crate::client::StoreClient;
use crate::text;

/// Paths tried, in order, for the privacy policy page.
pub(crate) const PRIVACY_PATHS: &[&str] =
    &["privacy", "privacy-policy", "policies/privacy-policy"];

/// Paths tried, in order, for the return/refund policy page.
pub(crate) const RETURN_PATHS: &[&str] = &[
    "return",
    "refund",
    "returns",
    "refunds",
    "shipping-returns",
    "policies/refund-policy",
];

/// Paths tried, in order, for the brand/about page.
pub(crate) const ABOUT_PATHS: &[&str] = &[
    "about",
    "about-us",
    "pages/about",
    "pages/about-us",
    "our-story",
    "pages/our-story",
];

/// Paths tried, in order, for the contact page.
pub(crate) const CONTACT_PATHS: &[&str] =
    &["contact", "contact-us", "pages/contact", "pages/contact-us"];

/// Paths tried, in order, for FAQ-style pages.
pub(crate) const FAQ_PATHS: &[&str] = &["faq", "faqs", "help", "support", "pages/faq"];

/// Minimum extracted-text length for policy and about pages. Anything shorter
/// is navigation shell or a soft 404, not page content.
pub(crate) const MIN_POLICY_TEXT_LEN: usize = 100;

/// Probes `paths` root-relative under the store origin and returns the first
/// extracted main text longer than `min_len`.
///
/// Fetch failures and non-2xx responses skip to the next path; when every
/// path misses, the result is an empty string.
pub(crate) async fn probe_text(
    client: &StoreClient,
    base: &Url,
    paths: &[&str],
    min_len: usize,
) -> String {
    for path in paths {
        let Ok(url) = base.join(&format!("/{path}")) else {
            continue;
        };
        let page = match client.get_page(&url).await {
            Ok(page) if page.is_success() => page,
            Ok(page) => {
                debug!(url = %url, status = page.status.as_u16(), "probe path miss");
                continue;
            }
            Err(e) => {
                debug!(url = %url, error = %e, "probe path fetch failed");
                continue;
            }
        };

        if let Some(extracted) = text::extract_main_text(&page.body, &url) {
            if extracted.len() > min_len {
                debug!(url = %url, chars = extracted.len(), "probe path hit");
                return extracted;
            }
        }
    }
    String::new()
}

/// Extracts the privacy policy text, or empty when no path qualifies.
pub async fn privacy_policy(client: &StoreClient, base: &Url) -> String {
    probe_text(client, base, PRIVACY_PATHS, MIN_POLICY_TEXT_LEN).await
}

/// Extracts the return/refund policy text, or empty when no path qualifies.
pub async fn return_policy(client: &StoreClient, base: &Url) -> String {
    probe_text(client, base, RETURN_PATHS, MIN_POLICY_TEXT_LEN).await
}

/// Extracts the about/our-story text used as brand context, or empty when no
/// path qualifies.
pub async fn brand_context(client: &StoreClient, base: &Url) -> String {
    probe_text(client, base, ABOUT_PATHS, MIN_POLICY_TEXT_LEN).await
}
