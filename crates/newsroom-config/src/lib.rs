//! Configuration management for newsroom.
//!
//! Parses `newsroom.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set and non-empty, otherwise
//!   uses default
//!
//! Expanded fields:
//! - `contentful.space_id`
//! - `contentful.access_token`
//! - `contentful.environment`
//! - `site.base_url`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the news listing template path.
    pub template: Option<PathBuf>,
    /// Override the output directory.
    pub output_dir: Option<PathBuf>,
    /// Override the entry fetch limit.
    pub limit: Option<u32>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "newsroom.toml";

/// Canonical origin the site has always been published under.
const DEFAULT_BASE_URL: &str = "https://esegames.com";

/// Organization credited in structured data.
const DEFAULT_ORGANIZATION: &str = "ĚSĚGAMES";

/// Entries above this are never served in one page by the delivery API.
const MAX_LIMIT: u32 = 1000;

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Contentful delivery API configuration (optional section).
    /// Required by commands that fetch the feed.
    pub contentful: Option<ContentfulConfig>,
    /// Site configuration (paths are relative strings from TOML).
    site: SiteConfigRaw,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Contentful delivery API configuration.
#[derive(Debug, Deserialize)]
pub struct ContentfulConfig {
    /// Space identifier.
    pub space_id: String,
    /// Content Delivery API token (read-only).
    pub access_token: String,
    /// Environment within the space.
    #[serde(default = "default_environment")]
    pub environment: String,
    /// Content type of news entries.
    #[serde(default = "default_content_type")]
    pub content_type: String,
    /// Maximum number of entries fetched per build.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl ContentfulConfig {
    /// Validate that all required fields are properly set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any field is empty or out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.space_id, "contentful.space_id")?;
        require_non_empty(&self.access_token, "contentful.access_token")?;
        require_non_empty(&self.environment, "contentful.environment")?;
        require_non_empty(&self.content_type, "contentful.content_type")?;
        if self.limit == 0 {
            return Err(ConfigError::Validation(
                "contentful.limit must be greater than 0".to_owned(),
            ));
        }
        if self.limit > MAX_LIMIT {
            return Err(ConfigError::Validation(format!(
                "contentful.limit cannot exceed {MAX_LIMIT}"
            )));
        }
        Ok(())
    }
}

fn default_environment() -> String {
    "master".to_owned()
}

fn default_content_type() -> String {
    "newsBlog".to_owned()
}

fn default_limit() -> u32 {
    MAX_LIMIT
}

/// Raw site configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    base_url: Option<String>,
    organization: Option<String>,
    template: Option<String>,
    output_dir: Option<String>,
}

/// Resolved site configuration with absolute paths.
#[derive(Debug, Default)]
pub struct SiteConfig {
    /// Canonical site origin, without a trailing slash.
    pub base_url: String,
    /// Organization credited as author and publisher in structured data.
    pub organization: String,
    /// News listing template; also receives the generated list.
    pub template: PathBuf,
    /// Directory the generated pages are written into.
    pub output_dir: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`contentful.access_token`").
        field: String,
        /// Error message (e.g., "${`CONTENTFUL_CDA_TOKEN`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `newsroom.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(template) = &settings.template {
            self.site_resolved.template.clone_from(template);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.site_resolved.output_dir.clone_from(output_dir);
        }
        if let Some(limit) = settings.limit
            && let Some(contentful) = &mut self.contentful
        {
            contentful.limit = limit;
        }
    }

    /// Get validated Contentful configuration.
    ///
    /// Returns the Contentful config if the `[contentful]` section is present
    /// and all fields are valid. Use this instead of accessing the `contentful`
    /// field directly when the command requires the delivery API.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the section is missing or invalid.
    pub fn require_contentful(&self) -> Result<&ContentfulConfig, ConfigError> {
        let contentful = self.contentful.as_ref().ok_or_else(|| {
            ConfigError::Validation("[contentful] section required in config".into())
        })?;
        contentful.validate()?;
        Ok(contentful)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            contentful: None,
            site: SiteConfigRaw::default(),
            site_resolved: SiteConfig {
                base_url: DEFAULT_BASE_URL.to_owned(),
                organization: DEFAULT_ORGANIZATION.to_owned(),
                template: base.join("NEWS.html"),
                output_dir: base.to_path_buf(),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading and resolution
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks the site section; the `[contentful]` section is validated
    /// lazily by [`Config::require_contentful`] so that commands which never
    /// touch the API work without credentials.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site_resolved.base_url, "site.base_url")?;
        require_http_url(&self.site_resolved.base_url, "site.base_url")?;
        require_non_empty(&self.site_resolved.organization, "site.organization")?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        // Contentful config (if present)
        if let Some(ref mut contentful) = self.contentful {
            contentful.space_id = expand::expand_env(&contentful.space_id, "contentful.space_id")?;
            contentful.access_token =
                expand::expand_env(&contentful.access_token, "contentful.access_token")?;
            contentful.environment =
                expand::expand_env(&contentful.environment, "contentful.environment")?;
        }

        // Site config
        if let Some(ref base_url) = self.site.base_url {
            self.site.base_url = Some(expand::expand_env(base_url, "site.base_url")?);
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.site_resolved = SiteConfig {
            base_url: self
                .site
                .base_url
                .as_deref()
                .unwrap_or(DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_owned(),
            organization: self
                .site
                .organization
                .clone()
                .unwrap_or_else(|| DEFAULT_ORGANIZATION.to_owned()),
            template: config_dir.join(self.site.template.as_deref().unwrap_or("NEWS.html")),
            output_dir: match self.site.output_dir.as_deref() {
                Some(dir) => config_dir.join(dir),
                None => config_dir.to_path_buf(),
            },
        };
    }
}
