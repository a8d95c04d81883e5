//! HTTP client shared by every fetch of a single scrape.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use url::Url;

use crate::error::ScrapeError;

/// A fetched page: the response status plus the full body.
///
/// Non-2xx statuses are carried here rather than raised so callers can decide
/// what a miss means (the homepage treats it as unreachable, a path probe
/// just moves on to the next candidate).
#[derive(Debug)]
pub struct FetchedPage {
    pub status: StatusCode,
    pub body: String,
}

impl FetchedPage {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// A user-supplied store URL after normalization.
#[derive(Debug, Clone)]
pub struct StoreUrl {
    /// Scheme-prefixed form of the input, recorded on the profile verbatim.
    pub normalized: String,
    /// Parsed form used to resolve relative paths under the store origin.
    pub parsed: Url,
}

/// Prefixes `https://` when the input carries no scheme, then parses.
///
/// # Errors
///
/// Returns `ScrapeError::InvalidUrl` when the result is not a parseable URL.
pub fn normalize_store_url(raw: &str) -> Result<StoreUrl, ScrapeError> {
    let trimmed = raw.trim();
    let normalized = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };
    let parsed = Url::parse(&normalized).map_err(|e| ScrapeError::InvalidUrl {
        url: normalized.clone(),
        reason: e.to_string(),
    })?;
    Ok(StoreUrl { normalized, parsed })
}

/// HTTP client presenting a browser-like identity.
///
/// One instance is shared across every request of a scrape so connections are
/// reused. The timeout applies per request, connect and total. There are no
/// retries: a failed request is immediately a miss.
pub struct StoreClient {
    client: Client,
}

impl StoreClient {
    /// Builds the underlying `reqwest` client.
    ///
    /// # Errors
    ///
    /// Returns `ScrapeError::Http` if the client cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches `url` and reads the whole body.
    ///
    /// # Errors
    ///
    /// Returns `ScrapeError::Http` on connect, timeout, or body-read failures.
    /// A non-2xx status is not an error here; see [`FetchedPage`].
    pub async fn get_page(&self, url: &Url) -> Result<FetchedPage, ScrapeError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok(FetchedPage { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_prefixes_https_when_scheme_missing() {
        let store = normalize_store_url("acme-goods.com").expect("expected a valid URL");
        assert_eq!(store.normalized, "https://acme-goods.com");
        assert_eq!(store.parsed.host_str(), Some("acme-goods.com"));
    }

    #[test]
    fn normalize_keeps_existing_http_scheme() {
        let store = normalize_store_url("http://acme-goods.com/shop").expect("expected a valid URL");
        assert_eq!(store.normalized, "http://acme-goods.com/shop");
        assert_eq!(store.parsed.scheme(), "http");
    }

    #[test]
    fn normalize_trims_surrounding_whitespace() {
        let store = normalize_store_url("  acme-goods.com  ").expect("expected a valid URL");
        assert_eq!(store.normalized, "https://acme-goods.com");
    }

    #[test]
    fn normalize_rejects_unparseable_input() {
        let result = normalize_store_url("");
        assert!(
            matches!(result, Err(ScrapeError::InvalidUrl { .. })),
            "expected InvalidUrl, got: {result:?}"
        );
    }

    #[test]
    fn normalized_base_joins_paths_at_the_origin() {
        let store = normalize_store_url("acme-goods.com/collections/all").expect("valid URL");
        let joined = store.parsed.join("/products.json").expect("join failed");
        assert_eq!(joined.as_str(), "https://acme-goods.com/products.json");
    }
}
