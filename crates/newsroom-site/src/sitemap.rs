//! Sitemap generation.

use std::fmt::Write;

/// Sitemaps protocol namespace.
const URLSET_XMLNS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Serialize a sitemap for the given page URLs.
///
/// Every `<url>` carries the same `lastmod` (the build date): the whole
/// section is regenerated on each build, so per-page modification dates
/// would be fiction.
#[must_use]
pub fn render_sitemap(urls: &[String], lastmod: &str) -> String {
    let mut out = String::with_capacity(256 + urls.len() * 96);
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(out, "<urlset xmlns=\"{URLSET_XMLNS}\">");
    for url in urls {
        let _ = writeln!(
            out,
            "<url><loc>{}</loc><lastmod>{}</lastmod></url>",
            escape_xml(url),
            escape_xml(lastmod),
        );
    }
    out.push_str("</urlset>");
    out
}

/// Escape XML special characters in text content.
fn escape_xml(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&apos;"),
            _ => result.push(c),
        }
    }
    result
}
