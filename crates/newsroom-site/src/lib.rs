//! Static news section generation.
//!
//! Turns a fetched Contentful news feed into the site's news section:
//! listing cards injected into the `NEWS.html` template, one standalone
//! page per article (with JSON-LD structured data and a meta description
//! excerpt), a sitemap, and the FAQ accordion script the pages load.
//!
//! [`SiteBuilder`] is the entry point; the other modules are the pure
//! rendering steps it sequences and are exported for direct use in tests
//! and tooling.

mod article;
mod builder;
mod date;
mod jsonld;
mod listing;
mod sitemap;
mod slug;
mod template;

pub use article::{Article, ArticlePageContext, META_DESCRIPTION_CHARS, render_article_page};
pub use builder::{BuildError, BuildReport, SiteBuildConfig, SiteBuilder};
pub use date::{parse_date, rfc3339_date, short_date, today_short};
pub use jsonld::news_article_json_ld;
pub use listing::{news_card, render_news_list};
pub use sitemap::render_sitemap;
pub use slug::slugify;
pub use template::{LIST_END_MARKER, LIST_START_MARKER, NewsTemplate};
