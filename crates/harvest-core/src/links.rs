//! Link extraction from the listing page.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("static anchor selector"));

/// Returns the `href` of every anchor whose value ends with `suffix`, in document order.
///
/// The match is case-sensitive and duplicates are kept. Parsing is lenient:
/// malformed markup yields fewer matches, never an error.
pub fn extract_links(html: &[u8], suffix: &str) -> Vec<String> {
    let text = String::from_utf8_lossy(html);
    let document = Html::parse_document(&text);
    document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|el| el.value().attr("href"))
        .filter(|href| href.ends_with(suffix))
        .map(str::to_string)
        .collect()
}

/// Number of anchors with an `href`, matching or not.
pub fn count_anchors(html: &[u8]) -> usize {
    let text = String::from_utf8_lossy(html);
    Html::parse_document(&text).select(&ANCHOR_SELECTOR).count()
}
