//! `newsroom build` command implementation.

use std::path::PathBuf;

use clap::Args;
use newsroom_config::{CliSettings, Config};
use newsroom_contentful::ContentfulClient;
use newsroom_site::{SiteBuildConfig, SiteBuilder};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover newsroom.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// News listing template (overrides config).
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Output directory for the generated section (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Maximum number of entries to fetch (overrides config).
    #[arg(short, long)]
    limit: Option<u32>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            template: self.template.clone(),
            output_dir: self.output_dir.clone(),
            limit: self.limit,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let contentful = config.require_contentful()?;

        output.info(&format!("Template: {}", config.site_resolved.template.display()));
        output.info(&format!("Output: {}", config.site_resolved.output_dir.display()));

        let client = ContentfulClient::new(
            &contentful.space_id,
            &contentful.environment,
            &contentful.access_token,
        );
        let feed = client.fetch_entries(&contentful.content_type, contentful.limit)?;

        let builder = SiteBuilder::new(SiteBuildConfig {
            base_url: config.site_resolved.base_url.clone(),
            organization: config.site_resolved.organization.clone(),
            template: config.site_resolved.template.clone(),
            output_dir: config.site_resolved.output_dir.clone(),
        });
        let report = builder.build(&feed)?;

        output.success(&format!("News built: {} articles", report.articles));
        Ok(())
    }
}
