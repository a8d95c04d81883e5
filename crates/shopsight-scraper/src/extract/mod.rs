//! Field extractors over the parsed homepage DOM.
//!
//! Every extractor here is a pure function over a parsed document (plus the
//! store URL for resolving hrefs). They inspect the DOM and return owned
//! data, so the document is parsed once per page and never crosses an await
//! point. The only extractor that fetches on its own is the FAQ walk, which
//! parses the sub-pages it probes.

pub mod contact;
pub mod faq;
pub mod hero;
pub mod links;
pub mod social;
pub mod store_name;

use scraper::{ElementRef, Html};

use crate::text::collapse_ws;

/// Visible text of an element subtree, whitespace-collapsed. Text nodes are
/// joined with single spaces so words never fuse across tags.
pub(crate) fn element_text(el: ElementRef<'_>) -> String {
    collapse_ws(&el.text().collect::<Vec<_>>().join(" "))
}

/// Full visible text of a document, assembled like [`element_text`].
pub(crate) fn page_text(doc: &Html) -> String {
    collapse_ws(
        &doc.root_element()
            .text()
            .collect::<Vec<_>>()
            .join(" "),
    )
}

/// Descendant elements of `el` in document order, excluding `el` itself.
pub(crate) fn descendant_elements(el: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    el.descendants().skip(1).filter_map(ElementRef::wrap)
}

/// `true` when any class on `el` contains `needle` (pre-lowercased)
/// case-insensitively.
pub(crate) fn class_contains(el: ElementRef<'_>, needle: &str) -> bool {
    el.value()
        .classes()
        .any(|class| class.to_ascii_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use scraper::Selector;

    use super::*;

    #[test]
    fn element_text_joins_across_nested_tags() {
        let doc = Html::parse_fragment("<a><span>Linen</span><span>Throw</span></a>");
        let sel = Selector::parse("a").expect("valid selector");
        let anchor = doc.select(&sel).next().expect("expected an anchor");
        assert_eq!(element_text(anchor), "Linen Throw");
    }

    #[test]
    fn class_contains_matches_any_class_case_insensitively() {
        let doc = Html::parse_fragment(r#"<div class="Card Product-Price large"></div>"#);
        let sel = Selector::parse("div").expect("valid selector");
        let div = doc.select(&sel).next().expect("expected a div");
        assert!(class_contains(div, "price"));
        assert!(!class_contains(div, "banner"));
    }

    #[test]
    fn descendant_elements_excludes_the_root() {
        let doc = Html::parse_fragment("<div><p><b>x</b></p></div>");
        let sel = Selector::parse("div").expect("valid selector");
        let div = doc.select(&sel).next().expect("expected a div");
        let names: Vec<&str> = descendant_elements(div)
            .map(|el| el.value().name())
            .collect();
        assert_eq!(names, vec!["p", "b"]);
    }
}
