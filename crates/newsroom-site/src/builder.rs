//! Build pipeline for the news section.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use newsroom_contentful::EntriesResponse;
use tracing::info;

use crate::article::{Article, ArticlePageContext, render_article_page};
use crate::date::today_short;
use crate::listing::render_news_list;
use crate::sitemap::render_sitemap;
use crate::template::NewsTemplate;

/// Filename of the generated listing page.
const LISTING_FILENAME: &str = "NEWS.html";

/// Filename of the FAQ accordion script shipped with the site.
const FAQ_SCRIPT_FILENAME: &str = "FAQscript.js";

/// Built-in copy of the FAQ accordion script, written when the site
/// assets don't already provide one.
const DEFAULT_FAQ_SCRIPT: &str = include_str!("../assets/FAQscript.js");

/// Configuration for a site build.
pub struct SiteBuildConfig {
    /// Canonical site origin, no trailing slash.
    pub base_url: String,
    /// Organization credited in titles and structured data.
    pub organization: String,
    /// Path to the news listing template.
    pub template: PathBuf,
    /// Directory generated files are written into.
    pub output_dir: PathBuf,
}

/// Error returned by the site builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(
        "Template {} has no news list markers \
         (<!-- START:NEWS-LIST --> ... <!-- END:NEWS-LIST -->)",
        .0.display()
    )]
    TemplateMarkers(PathBuf),
}

/// Result summary of a completed build.
#[derive(Debug)]
pub struct BuildReport {
    /// Number of article pages written.
    pub articles: usize,
}

/// Builds the static news section from a fetched entries feed.
///
/// Sequential pipeline: listing cards are injected into the template,
/// one page per article is written under `news/{slug}/`, then the
/// sitemap and the FAQ script. The asset index is built once up front
/// and shared read-only by every render call.
pub struct SiteBuilder {
    config: SiteBuildConfig,
}

impl SiteBuilder {
    #[must_use]
    pub fn new(config: SiteBuildConfig) -> Self {
        Self { config }
    }

    /// Run the full build over a fetched feed.
    ///
    /// Per-article rendering cannot fail; only file I/O and a template
    /// without list markers abort the build.
    pub fn build(&self, feed: &EntriesResponse) -> Result<BuildReport, BuildError> {
        let template_source = fs::read_to_string(&self.config.template)?;
        let template = NewsTemplate::new(template_source);

        let assets = feed.asset_index();
        let articles: Vec<Article> =
            feed.items.iter().map(|entry| Article::from_entry(entry, &assets)).collect();
        info!("Rendering {} articles ({} linked assets)", articles.len(), assets.len());

        fs::create_dir_all(&self.config.output_dir)?;

        // Listing page
        let cards = render_news_list(&articles, &assets);
        let listing = template
            .inject_news_list(&cards)
            .ok_or_else(|| BuildError::TemplateMarkers(self.config.template.clone()))?;
        fs::write(self.config.output_dir.join(LISTING_FILENAME), listing)?;

        // Article pages, reusing the template's chrome
        let ctx = ArticlePageContext {
            header: template.header(),
            footer: template.footer(),
            base_url: &self.config.base_url,
            organization: &self.config.organization,
        };
        for article in &articles {
            let dir = self.config.output_dir.join("news").join(&article.slug);
            fs::create_dir_all(&dir)?;
            fs::write(dir.join("index.html"), render_article_page(article, &assets, &ctx))?;
            info!("Wrote news/{}/index.html", article.slug);
        }

        self.write_sitemap(&articles)?;
        self.write_faq_script()?;

        Ok(BuildReport { articles: articles.len() })
    }

    fn write_sitemap(&self, articles: &[Article]) -> Result<(), io::Error> {
        let mut urls = vec![format!("{}/{LISTING_FILENAME}", self.config.base_url)];
        urls.extend(
            articles
                .iter()
                .map(|article| format!("{}{}", self.config.base_url, article.url_path())),
        );
        let sitemap = render_sitemap(&urls, &today_short());
        fs::write(self.config.output_dir.join("sitemap.xml"), sitemap)
    }

    /// Ship the FAQ accordion script article pages reference.
    ///
    /// A copy maintained next to the template wins; otherwise the
    /// built-in one is written, without clobbering an existing file in
    /// the output directory.
    fn write_faq_script(&self) -> Result<(), io::Error> {
        let dest = self.config.output_dir.join(FAQ_SCRIPT_FILENAME);
        let site_copy = self
            .config
            .template
            .parent()
            .map(|dir| dir.join(FAQ_SCRIPT_FILENAME))
            .filter(|path| path.is_file());

        match site_copy {
            Some(source) if source != dest => {
                fs::copy(&source, &dest)?;
            }
            Some(_) => {} // Output dir is the template dir; already in place.
            None if !dest.exists() => fs::write(&dest, DEFAULT_FAQ_SCRIPT)?,
            None => {}
        }
        Ok(())
    }
}

/// Convenience wrapper used by tests and callers that already hold paths.
impl SiteBuildConfig {
    #[must_use]
    pub fn new(base_url: &str, organization: &str, template: &Path, output_dir: &Path) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            organization: organization.to_owned(),
            template: template.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "<!doctype html><html><body>\n\
        <header><nav>menu</nav></header>\n\
        <!-- START:NEWS-LIST -->\n<!-- END:NEWS-LIST -->\n\
        <footer><p>contact</p></footer>\n\
        </body></html>";

    const FEED: &str = r#"{
        "items": [
            {
                "sys": {"id": "entry1"},
                "fields": {
                    "title": "Launch Day",
                    "slug": "launch-day",
                    "date": "2024-05-01T10:00:00Z",
                    "image": {"sys": {"id": "asset1"}},
                    "body": {
                        "nodeType": "document",
                        "content": [
                            {"nodeType": "paragraph", "content": [
                                {"nodeType": "text", "value": "We are live."}
                            ]}
                        ]
                    }
                }
            },
            {"sys": {"id": "entry2"}, "fields": {"title": "Second Post"}}
        ],
        "includes": {
            "Asset": [
                {
                    "sys": {"id": "asset1"},
                    "fields": {
                        "title": "Banner",
                        "file": {"url": "//images.ctfassets.net/space/banner.png"}
                    }
                }
            ]
        }
    }"#;

    fn feed() -> EntriesResponse {
        serde_json::from_str(FEED).unwrap()
    }

    fn build_in(dir: &Path) -> BuildReport {
        let template_path = dir.join("NEWS.html");
        fs::write(&template_path, TEMPLATE).unwrap();
        let out = dir.join("public");
        let builder = SiteBuilder::new(SiteBuildConfig::new(
            "https://esegames.com",
            "ĚSĚGAMES",
            &template_path,
            &out,
        ));
        builder.build(&feed()).unwrap()
    }

    #[test]
    fn build_writes_listing_articles_sitemap_and_script() {
        let dir = tempfile::tempdir().unwrap();
        let report = build_in(dir.path());
        assert_eq!(report.articles, 2);

        let out = dir.path().join("public");
        let listing = fs::read_to_string(out.join("NEWS.html")).unwrap();
        assert!(listing.contains("Launch Day"));
        assert!(listing.contains("Second Post"));
        assert!(listing.contains("https://images.ctfassets.net/space/banner.png"));

        let article = fs::read_to_string(out.join("news/launch-day/index.html")).unwrap();
        assert!(article.contains("<h1>Launch Day</h1>"));
        assert!(article.contains("<header><nav>menu</nav></header>"));
        assert!(article.contains("<footer><p>contact</p></footer>"));

        let second = out.join("news/second-post/index.html");
        assert!(second.is_file());

        let sitemap = fs::read_to_string(out.join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("https://esegames.com/NEWS.html"));
        assert!(sitemap.contains("https://esegames.com/news/launch-day/"));
        assert!(sitemap.contains("https://esegames.com/news/second-post/"));

        let script = fs::read_to_string(out.join("FAQscript.js")).unwrap();
        assert!(script.contains("faq-item"));
    }

    #[test]
    fn rebuild_is_idempotent_over_its_own_output() {
        let dir = tempfile::tempdir().unwrap();
        build_in(dir.path());

        let out = dir.path().join("public");
        let first = fs::read_to_string(out.join("NEWS.html")).unwrap();

        // Second build uses the generated listing as its template, the way
        // a deployed site rebuilds in place.
        let builder = SiteBuilder::new(SiteBuildConfig::new(
            "https://esegames.com",
            "ĚSĚGAMES",
            &out.join("NEWS.html"),
            &out,
        ));
        builder.build(&feed()).unwrap();
        let second = fs::read_to_string(out.join("NEWS.html")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn template_without_markers_fails() {
        let dir = tempfile::tempdir().unwrap();
        let template_path = dir.path().join("NEWS.html");
        fs::write(&template_path, "<html><body>no markers</body></html>").unwrap();
        let builder = SiteBuilder::new(SiteBuildConfig::new(
            "https://esegames.com",
            "ĚSĚGAMES",
            &template_path,
            dir.path(),
        ));
        let err = builder.build(&feed()).unwrap_err();
        assert!(matches!(err, BuildError::TemplateMarkers(_)));
    }

    #[test]
    fn missing_template_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let builder = SiteBuilder::new(SiteBuildConfig::new(
            "https://esegames.com",
            "ĚSĚGAMES",
            &dir.path().join("nope.html"),
            dir.path(),
        ));
        assert!(matches!(builder.build(&feed()).unwrap_err(), BuildError::Io(_)));
    }

    #[test]
    fn site_faq_script_next_to_template_wins() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("NEWS.html"), TEMPLATE).unwrap();
        fs::write(dir.path().join("FAQscript.js"), "// site copy\n").unwrap();
        let out = dir.path().join("public");
        let builder = SiteBuilder::new(SiteBuildConfig::new(
            "https://esegames.com",
            "ĚSĚGAMES",
            &dir.path().join("NEWS.html"),
            &out,
        ));
        builder.build(&feed()).unwrap();
        let script = fs::read_to_string(out.join("FAQscript.js")).unwrap();
        assert_eq!(script, "// site copy\n");
    }

    #[test]
    fn empty_feed_builds_empty_listing() {
        let dir = tempfile::tempdir().unwrap();
        let template_path = dir.path().join("NEWS.html");
        fs::write(&template_path, TEMPLATE).unwrap();
        let builder = SiteBuilder::new(SiteBuildConfig::new(
            "https://esegames.com",
            "ĚSĚGAMES",
            &template_path,
            dir.path(),
        ));
        let report = builder.build(&EntriesResponse::default()).unwrap();
        assert_eq!(report.articles, 0);

        let sitemap = fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("https://esegames.com/NEWS.html"));
        assert_eq!(sitemap.matches("<url>").count(), 1);
    }
}
