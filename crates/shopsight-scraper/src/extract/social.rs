//! Social profile discovery on the homepage.

use std::collections::BTreeMap;

use regex::Regex;
use scraper::{Html, Selector};

use shopsight_core::SocialLink;

use super::page_text;

/// Capture patterns per platform, tried in order. Anchor hrefs are searched
/// before page text for each pattern; the first capture wins the platform
/// outright. Instagram gets a bare `@handle` backup pattern, and twitter
/// also answers to its x.com rename.
const PLATFORM_PATTERNS: &[(&str, &[&str])] = &[
    ("instagram", &[r#"instagram\.com/([^/\s"']+)"#, r"@([a-zA-Z0-9_.]+)"]),
    ("facebook", &[r#"facebook\.com/([^/\s"']+)"#]),
    ("twitter", &[r#"twitter\.com/([^/\s"']+)"#, r#"x\.com/([^/\s"']+)"#]),
    ("tiktok", &[r#"tiktok\.com/@([^/\s"']+)"#]),
    ("youtube", &[r#"youtube\.com/([^/\s"']+)"#]),
    ("linkedin", &[r#"linkedin\.com/([^/\s"']+)"#]),
];

/// Finds at most one profile per platform. A link-based match keeps the
/// anchor's href verbatim as the URL; a page-text match synthesizes
/// `https://{platform}.com/{handle}`.
#[must_use]
pub fn social_handles(doc: &Html) -> BTreeMap<String, SocialLink> {
    let anchor_sel = Selector::parse("a[href]").expect("valid anchor selector");
    let hrefs: Vec<&str> = doc
        .select(&anchor_sel)
        .filter_map(|anchor| anchor.value().attr("href"))
        .collect();
    let text = page_text(doc);

    let mut handles = BTreeMap::new();
    for (platform, patterns) in PLATFORM_PATTERNS {
        'platform: for pattern in *patterns {
            let re = Regex::new(&format!("(?i){pattern}")).expect("valid platform pattern");
            for href in &hrefs {
                if let Some(handle) = first_capture(&re, href) {
                    handles.insert(
                        (*platform).to_string(),
                        SocialLink {
                            handle,
                            url: (*href).to_string(),
                        },
                    );
                    break 'platform;
                }
            }
            if let Some(handle) = first_capture(&re, &text) {
                let url = format!("https://{platform}.com/{handle}");
                handles.insert((*platform).to_string(), SocialLink { handle, url });
                break 'platform;
            }
        }
    }
    handles
}

fn first_capture(re: &Regex, haystack: &str) -> Option<String> {
    re.captures(haystack)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
