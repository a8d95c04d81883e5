//! Boilerplate-stripping main-text extraction.

use readability::extractor;
use url::Url;

/// Runs a readability pass over raw HTML and returns the main article text,
/// stripped of navigation, chrome, and script content.
///
/// Returns `None` when the document has no extractable main content.
#[must_use]
pub fn extract_main_text(html: &str, url: &Url) -> Option<String> {
    if html.trim().is_empty() {
        return None;
    }
    let product = extractor::extract(&mut html.as_bytes(), url).ok()?;
    let text = product.text.trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Collapses all whitespace runs to single spaces and trims the ends.
#[must_use]
pub fn collapse_ws(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
