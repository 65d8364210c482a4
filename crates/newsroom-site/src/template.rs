//! News listing template handling.
//!
//! The listing template (`NEWS.html`) doubles as the source of the site
//! chrome: its `<header>` and `<footer>` blocks are lifted out verbatim
//! and reused on every generated article page. Generated cards land
//! between the `START:NEWS-LIST` / `END:NEWS-LIST` comment markers, so
//! re-running the build replaces the previous list instead of appending.

use std::sync::LazyLock;

use regex::Regex;

/// Marker opening the generated news list region.
pub const LIST_START_MARKER: &str = "<!-- START:NEWS-LIST -->";
/// Marker closing the generated news list region.
pub const LIST_END_MARKER: &str = "<!-- END:NEWS-LIST -->";

static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<header[\s\S]*?</header>").expect("invalid header regex")
});

static FOOTER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<footer[\s\S]*?</footer>").expect("invalid footer regex")
});

static LIST_REGION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(<!-- START:NEWS-LIST -->)(.*?)(<!-- END:NEWS-LIST -->)")
        .expect("invalid news list region regex")
});

/// A loaded news listing template.
#[derive(Debug, Clone)]
pub struct NewsTemplate {
    source: String,
}

impl NewsTemplate {
    #[must_use]
    pub fn new(source: String) -> Self {
        Self { source }
    }

    /// The template's `<header>…</header>` block, empty when absent.
    #[must_use]
    pub fn header(&self) -> &str {
        HEADER_PATTERN
            .find(&self.source)
            .map_or("", |m| m.as_str())
    }

    /// The template's `<footer>…</footer>` block, empty when absent.
    #[must_use]
    pub fn footer(&self) -> &str {
        FOOTER_PATTERN
            .find(&self.source)
            .map_or("", |m| m.as_str())
    }

    /// Replace the marked news list region with the given cards.
    ///
    /// Returns `None` when the template carries no marker pair; the
    /// previous region content (including earlier generated cards) is
    /// discarded, which keeps the injection idempotent across rebuilds.
    #[must_use]
    pub fn inject_news_list(&self, cards: &str) -> Option<String> {
        if !LIST_REGION_PATTERN.is_match(&self.source) {
            return None;
        }
        let replacement = format!("{LIST_START_MARKER}\n{cards}\n{LIST_END_MARKER}");
        // NoExpand keeps `$` sequences in card content literal.
        Some(
            LIST_REGION_PATTERN
                .replace(&self.source, regex::NoExpand(replacement.as_str()))
                .into_owned(),
        )
    }
}
