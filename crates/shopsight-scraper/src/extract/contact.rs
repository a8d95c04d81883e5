//! Contact-channel extraction, from the homepage and the contact page.

use std::collections::HashSet;

use regex::Regex;
use scraper::{ElementRef, Html};
use url::Url;

use shopsight_core::ContactDetails;

use crate::client::StoreClient;
use crate::probe::{self, CONTACT_PATHS};

use super::{element_text, page_text};

const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

/// North-American phone shapes: optional `+1`, optional area-code parens,
/// dot/dash/space separators.
const PHONE_PATTERN: &str = r"(?:\+?1?[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}";

/// Role-account markers; homepage emails containing one are dropped.
const EXCLUDED_EMAIL_MARKERS: &[&str] = &["noreply", "no-reply", "admin", "webmaster"];

/// Keywords that flag a text node as the start of an address block.
const ADDRESS_KEYWORDS: &[&str] = &["address", "location", "office", "store location"];

/// Minimum length for an address block's parent text. Shorter hits are bare
/// labels ("Our location"), not addresses.
const MIN_ADDRESS_LEN: usize = 20;

/// Pulls emails, phone numbers, and a best-effort street address out of the
/// homepage. Role accounts (noreply and friends) are excluded here; the
/// dedicated contact page keeps everything.
#[must_use]
pub fn homepage_contact(doc: &Html) -> ContactDetails {
    let text = page_text(doc);
    ContactDetails {
        emails: find_emails(&text, true),
        phones: find_phones(&text),
        address: find_address(doc),
        ..ContactDetails::default()
    }
}

/// Probes the contact page and returns its `(emails, phones)`.
pub async fn contact_page_details(client: &StoreClient, base: &Url) -> (Vec<String>, Vec<String>) {
    let text = probe::probe_text(client, base, CONTACT_PATHS, 0).await;
    if text.is_empty() {
        return (Vec::new(), Vec::new());
    }
    (find_emails(&text, false), find_phones(&text))
}

fn find_emails(text: &str, filter_role_accounts: bool) -> Vec<String> {
    let re = Regex::new(EMAIL_PATTERN).expect("valid email regex");
    let mut seen = HashSet::new();
    re.find_iter(text)
        .map(|m| m.as_str().to_string())
        .filter(|email| {
            if !filter_role_accounts {
                return true;
            }
            let lower = email.to_lowercase();
            !EXCLUDED_EMAIL_MARKERS
                .iter()
                .any(|marker| lower.contains(marker))
        })
        .filter(|email| seen.insert(email.clone()))
        .collect()
}

fn find_phones(text: &str) -> Vec<String> {
    let re = Regex::new(PHONE_PATTERN).expect("valid phone regex");
    let mut seen = HashSet::new();
    re.find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        .filter(|phone| seen.insert(phone.clone()))
        .collect()
}

/// First text node mentioning an address keyword decides the address: its
/// parent element's full text qualifies when longer than [`MIN_ADDRESS_LEN`],
/// otherwise there is no address. Later keyword hits are not considered.
fn find_address(doc: &Html) -> Option<String> {
    for node in doc.root_element().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let lower = text.to_lowercase();
        if !ADDRESS_KEYWORDS.iter().any(|keyword| lower.contains(keyword)) {
            continue;
        }
        let parent = node.parent().and_then(ElementRef::wrap)?;
        let full = element_text(parent);
        return (full.len() > MIN_ADDRESS_LEN).then_some(full);
    }
    None
}
