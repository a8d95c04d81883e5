//! FAQ extraction from probed help pages.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

use shopsight_core::Faq;

use crate::client::StoreClient;
use crate::probe::FAQ_PATHS;

use super::{class_contains, element_text};

/// Class fragments that mark an element as an FAQ container.
const FAQ_CLASS_MARKERS: &[&str] = &["faq", "question", "accordion"];

/// Tries the FAQ path list in order and returns the pairs from the first
/// page that yields any. A page that responds but carries no recognizable
/// FAQ markup falls through to the next path.
pub async fn extract_faqs(client: &StoreClient, base: &Url) -> Vec<Faq> {
    for path in FAQ_PATHS {
        let Ok(url) = base.join(&format!("/{path}")) else {
            continue;
        };
        let page = match client.get_page(&url).await {
            Ok(page) if page.is_success() => page,
            Ok(page) => {
                debug!(url = %url, status = page.status.as_u16(), "faq path miss");
                continue;
            }
            Err(err) => {
                debug!(url = %url, error = %err, "faq path fetch failed");
                continue;
            }
        };
        let faqs = faqs_from_html(&page.body);
        if !faqs.is_empty() {
            debug!(url = %url, count = faqs.len(), "faq page parsed");
            return faqs;
        }
    }
    Vec::new()
}

/// Walks FAQ-classed `div`/`section` containers. A heading (`h1`-`h6`, `dt`)
/// whose text contains `?` is a question; its answer is the first following
/// sibling `p`, `div`, or `dd`. Questions without such a sibling, or whose
/// answer text is empty, are dropped.
#[must_use]
pub fn faqs_from_html(html: &str) -> Vec<Faq> {
    let doc = Html::parse_document(html);
    let container_sel = Selector::parse("div, section").expect("valid container selector");
    let heading_sel =
        Selector::parse("h1, h2, h3, h4, h5, h6, dt").expect("valid heading selector");

    let mut faqs = Vec::new();
    for container in doc.select(&container_sel) {
        if !FAQ_CLASS_MARKERS
            .iter()
            .any(|marker| class_contains(container, marker))
        {
            continue;
        }
        for heading in container.select(&heading_sel) {
            let question = element_text(heading);
            if !question.contains('?') {
                continue;
            }
            let Some(answer_el) = next_answer_sibling(heading) else {
                continue;
            };
            let answer = element_text(answer_el);
            if answer.is_empty() {
                continue;
            }
            faqs.push(Faq { question, answer });
        }
    }
    faqs
}

/// First following element sibling able to hold an answer.
fn next_answer_sibling(heading: ElementRef<'_>) -> Option<ElementRef<'_>> {
    heading
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sibling| matches!(sibling.value().name(), "p" | "div" | "dd"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_headings_with_following_answers() {
        let html = r#"<html><body><section class="faq-section">
            <h3>Do you ship internationally?</h3>
            <div>Yes, we ship to most countries worldwide.</div>
            <h3>What is your returns window?</h3>
            <p>You have 30 days from delivery.</p>
        </section></body></html>"#;

        let faqs = faqs_from_html(html);
        assert_eq!(faqs.len(), 2);
        assert_eq!(faqs[0].question, "Do you ship internationally?");
        assert_eq!(faqs[0].answer, "Yes, we ship to most countries worldwide.");
        assert_eq!(faqs[1].answer, "You have 30 days from delivery.");
    }

    #[test]
    fn question_without_answer_sibling_is_dropped() {
        let html = r#"<html><body><div class="faq">
            <h2>Where is my order?</h2>
        </div></body></html>"#;

        assert!(faqs_from_html(html).is_empty());
    }

    #[test]
    fn heading_without_question_mark_is_skipped() {
        let html = r#"<html><body><div class="accordion">
            <h2>Shipping information</h2>
            <p>We ship worldwide within five business days.</p>
        </div></body></html>"#;

        assert!(faqs_from_html(html).is_empty());
    }

    #[test]
    fn definition_lists_work_as_questions_and_answers() {
        let html = r#"<html><body><div class="questions"><dl>
            <dt>Can I change my order?</dt>
            <dd>Only before it ships; contact support right away.</dd>
        </dl></body></html>"#;

        let faqs = faqs_from_html(html);
        assert_eq!(faqs.len(), 1);
        assert_eq!(faqs[0].question, "Can I change my order?");
        assert_eq!(faqs[0].answer, "Only before it ships; contact support right away.");
    }

    #[test]
    fn unclassed_containers_are_ignored() {
        let html = r#"<html><body><div>
            <h2>Is this a question?</h2>
            <p>It is, but the container has no FAQ class.</p>
        </div></body></html>"#;

        assert!(faqs_from_html(html).is_empty());
    }

    #[test]
    fn answer_skips_intervening_non_answer_siblings() {
        let html = r#"<html><body><section class="faq">
            <h3>Do you offer gift wrap?</h3>
            <span>seasonal</span>
            <p>Yes, at checkout during the holidays.</p>
        </section></body></html>"#;

        let faqs = faqs_from_html(html);
        assert_eq!(faqs.len(), 1);
        assert_eq!(faqs[0].answer, "Yes, at checkout during the holidays.");
    }
}
