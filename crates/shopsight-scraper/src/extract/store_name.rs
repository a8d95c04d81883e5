//! Store display-name extraction.

use regex::Regex;
use scraper::{Html, Selector};
use url::Url;

use super::element_text;

/// Alt texts too generic to name a store.
const GENERIC_ALTS: &[&str] = &["logo", "image"];

/// Extracts a display name through a fallback chain: the cleaned `<title>`,
/// then `og:site_name`, then the first meaningful image alt, then the domain
/// itself. The domain step always produces a value for a URL with a host.
#[must_use]
pub fn extract_store_name(doc: &Html, base: &Url) -> String {
    from_title(doc)
        .or_else(|| from_og_site_name(doc))
        .or_else(|| from_logo_alt(doc))
        .unwrap_or_else(|| from_domain(base))
}

/// `<title>` with any trailing commerce suffix (`- Shop ...`, `| Store ...`,
/// an en dash works too) stripped off.
fn from_title(doc: &Html) -> Option<String> {
    let title_sel = Selector::parse("title").expect("valid title selector");
    let raw = element_text(doc.select(&title_sel).next()?);
    let suffix =
        Regex::new(r"(?i)\s*[-–|]\s*(?:Shop|Store|Online|eCommerce).*$").expect("valid suffix regex");
    let cleaned = suffix.replace(&raw, "").trim().to_string();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

fn from_og_site_name(doc: &Html) -> Option<String> {
    let og_sel =
        Selector::parse(r#"meta[property="og:site_name"]"#).expect("valid og:site_name selector");
    let content = doc.select(&og_sel).next()?.value().attr("content")?;
    let trimmed = content.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Alt text of the first image that has any. A generic alt ("logo", "image")
/// disqualifies the whole strategy rather than moving to the next image.
fn from_logo_alt(doc: &Html) -> Option<String> {
    let img_sel = Selector::parse("img[alt]").expect("valid img selector");
    let alt = doc.select(&img_sel).find_map(|img| {
        let alt = img.value().attr("alt")?.trim();
        if alt.is_empty() {
            None
        } else {
            Some(alt.to_string())
        }
    })?;
    if GENERIC_ALTS.contains(&alt.to_lowercase().as_str()) {
        None
    } else {
        Some(alt)
    }
}

/// Last-resort name: the host without its `www.` prefix, with `.com` and
/// `.myshopify.com` removed as substrings, title-cased.
fn from_domain(base: &Url) -> String {
    let host = base.host_str().unwrap_or_default();
    let host = host.strip_prefix("www.").unwrap_or(host);
    let stripped = host.replace(".com", "").replace(".myshopify.com", "");
    title_case(&stripped)
}

/// Uppercases the first letter of every alphabetic run and lowercases the
/// rest, so `acme-goods` becomes `Acme-Goods`.
fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_alpha = false;
    for c in raw.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
