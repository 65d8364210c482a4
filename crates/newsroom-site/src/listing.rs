//! News listing cards.

use std::fmt::Write;

use newsroom_richtext::{AssetIndex, escape_html, render_html};

use crate::article::Article;

/// Render all listing cards, one per article, newline separated.
#[must_use]
pub fn render_news_list(articles: &[Article], assets: &AssetIndex) -> String {
    let cards: Vec<String> = articles.iter().map(|article| news_card(article, assets)).collect();
    cards.join("\n")
}

/// Render one listing card.
///
/// The card links to the article page and collapses the full body behind
/// a native `<details>` disclosure, so the listing stays scannable
/// without any script.
#[must_use]
pub fn news_card(article: &Article, assets: &AssetIndex) -> String {
    let mut html = String::with_capacity(1024);
    html.push_str("<article class=\"news-item\">\n");
    let _ = writeln!(
        html,
        "  <a href=\"{}\"><h2 class=\"news-title\">{}</h2></a>",
        article.url_path(),
        escape_html(article.headline()),
    );
    let _ = writeln!(html, "  <p class=\"news-date\">{}</p>", article.short_date());
    if let Some(image_url) = &article.image_url {
        let _ = writeln!(
            html,
            "  <img src=\"{}\" alt=\"{}\" class=\"news-image\">",
            image_url,
            escape_html(article.title.unwrap_or("")),
        );
    }
    html.push_str("  <details class=\"news-body\">\n");
    html.push_str("    <summary>Read more</summary>\n");
    let _ = writeln!(html, "    {}", render_html(article.body, assets));
    html.push_str("  </details>\n");
    if let Some(link) = article.link {
        let _ = writeln!(
            html,
            "  <a class=\"news-link\" href=\"{}\" target=\"_blank\" rel=\"noopener\">External source</a>",
            escape_html(link),
        );
    }
    html.push_str("</article>");
    html
}
