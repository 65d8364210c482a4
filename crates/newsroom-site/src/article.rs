//! Article view model and article page rendering.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use newsroom_contentful::Entry;
use newsroom_richtext::{AssetIndex, Node, escape_html, plain_text_excerpt, render_html};
use tracing::warn;

use crate::date::{parse_date, short_date};
use crate::jsonld::news_article_json_ld;
use crate::slug::slugify;

/// Character cap for the meta description excerpt.
pub const META_DESCRIPTION_CHARS: usize = 155;

/// One news entry, resolved for page generation.
///
/// Borrowing view over an [`Entry`]: slugs, dates and image URLs are
/// resolved up front so listing cards, article pages, JSON-LD and the
/// sitemap all agree on them.
#[derive(Debug)]
pub struct Article<'a> {
    /// Headline, absent on half-filled entries.
    pub title: Option<&'a str>,
    /// URL path segment under `/news/`.
    pub slug: String,
    /// Publication date, if present and parseable.
    pub date: Option<DateTime<Utc>>,
    /// Resolved lead image URL.
    pub image_url: Option<String>,
    /// External source URL.
    pub link: Option<&'a str>,
    /// Rich text body.
    pub body: Option<&'a Node>,
}

impl<'a> Article<'a> {
    /// Resolve an entry against the feed's asset index.
    #[must_use]
    pub fn from_entry(entry: &'a Entry, assets: &AssetIndex) -> Self {
        let fields = &entry.fields;

        // Editor slug wins; otherwise the title, otherwise the entry id.
        let mut slug = match fields.slug.as_deref().filter(|s| !s.trim().is_empty()) {
            Some(editor_slug) => slugify(editor_slug),
            None => {
                let source = fields
                    .title
                    .as_deref()
                    .filter(|t| !t.trim().is_empty())
                    .unwrap_or(&entry.sys.id);
                slugify(source)
            }
        };
        if slug.is_empty() {
            // Symbol-only titles slugify to nothing; the id always works.
            slug = slugify(&entry.sys.id);
        }

        let image_url = fields.image.as_ref().and_then(|link| {
            let resolved = assets
                .get(&link.sys.id)
                .filter(|asset| !asset.url.is_empty())
                .map(|asset| asset.url.clone());
            if resolved.is_none() {
                warn!("Entry {} links unresolvable image asset '{}'", entry.sys.id, link.sys.id);
            }
            resolved
        });

        Self {
            title: fields.title.as_deref(),
            slug,
            date: fields.date.as_deref().and_then(parse_date),
            image_url,
            link: fields.link.as_deref().filter(|l| !l.is_empty()),
            body: fields.body.as_ref(),
        }
    }

    /// Headline with the display fallback for untitled entries.
    #[must_use]
    pub fn headline(&self) -> &str {
        self.title.unwrap_or("Untitled")
    }

    /// Site-relative path of the article page.
    #[must_use]
    pub fn url_path(&self) -> String {
        format!("/news/{}/", self.slug)
    }

    /// Visible date in `YYYY-MM-DD` form, empty when unknown.
    #[must_use]
    pub fn short_date(&self) -> String {
        self.date.map(short_date).unwrap_or_default()
    }
}

/// Shared context for rendering article pages.
pub struct ArticlePageContext<'a> {
    /// `<header>` block lifted from the listing template.
    pub header: &'a str,
    /// `<footer>` block lifted from the listing template.
    pub footer: &'a str,
    /// Canonical site origin, no trailing slash.
    pub base_url: &'a str,
    /// Organization credited in titles and structured data.
    pub organization: &'a str,
}

/// Render a complete standalone article page.
pub fn render_article_page(
    article: &Article,
    assets: &AssetIndex,
    ctx: &ArticlePageContext,
) -> String {
    let mut html = String::with_capacity(8192);
    let meta_description = plain_text_excerpt(article.body, META_DESCRIPTION_CHARS);

    // Head
    html.push_str("<!doctype html><html lang=\"en\"><head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    let _ = writeln!(
        html,
        "<title>{} — {}</title>",
        escape_html(article.title.unwrap_or("News")),
        escape_html(ctx.organization),
    );
    let _ = writeln!(
        html,
        "<link rel=\"canonical\" href=\"{}{}\">",
        ctx.base_url,
        article.url_path(),
    );
    let _ = writeln!(html, "<meta name=\"description\" content=\"{meta_description}\">");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    for stylesheet in ["/nicepage.css", "/index.css", "/FAQstyles.css", "/news.css"] {
        let _ = writeln!(html, "<link rel=\"stylesheet\" href=\"{stylesheet}\">");
    }
    let _ = writeln!(
        html,
        "<script type=\"application/ld+json\">{}</script>",
        news_article_json_ld(article, ctx.organization),
    );
    html.push_str("</head><body>\n");

    // Body: site chrome around the article
    if !ctx.header.is_empty() {
        html.push_str(ctx.header);
        html.push('\n');
    }
    html.push_str("<main class=\"article\">\n");
    let _ = writeln!(html, "  <h1>{}</h1>", escape_html(article.headline()));
    let _ = writeln!(html, "  <p class=\"news-date\">{}</p>", article.short_date());
    if let Some(image_url) = &article.image_url {
        let _ = writeln!(
            html,
            "  <img class=\"news-image\" src=\"{}\" alt=\"{}\">",
            image_url,
            escape_html(article.title.unwrap_or("")),
        );
    }
    let _ = writeln!(
        html,
        "  <article class=\"news-body\">{}</article>",
        render_html(article.body, assets),
    );
    if let Some(link) = article.link {
        let _ = writeln!(
            html,
            "  <p><a class=\"news-link\" href=\"{}\" target=\"_blank\" rel=\"noopener\">Source</a></p>",
            escape_html(link),
        );
    }
    html.push_str("</main>\n");
    if !ctx.footer.is_empty() {
        html.push_str(ctx.footer);
        html.push('\n');
    }
    html.push_str("<script src=\"/FAQscript.js\"></script>\n</body></html>");
    html
}
