//! JSON-LD structured data for article pages.

use serde_json::json;

use crate::article::Article;
use crate::date::rfc3339_date;

/// Serialize a `NewsArticle` JSON-LD object for an article.
///
/// `datePublished`/`dateModified` are omitted entirely when the entry has
/// no usable date; search engines treat an empty date as malformed.
#[must_use]
pub fn news_article_json_ld(article: &Article, organization: &str) -> String {
    let mut value = json!({
        "@context": "https://schema.org",
        "@type": "NewsArticle",
        "headline": article.headline(),
        "image": article.image_url.as_ref().map(|url| vec![url.clone()]).unwrap_or_default(),
        "author": {"@type": "Organization", "name": organization},
        "publisher": {"@type": "Organization", "name": organization},
    });
    if let Some(date) = article.date {
        let iso = rfc3339_date(date);
        value["datePublished"] = json!(iso);
        value["dateModified"] = json!(iso);
    }
    value.to_string()
}
