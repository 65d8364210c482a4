//! CLI error types.

use newsroom_config::ConfigError;
use newsroom_contentful::ContentfulError;
use newsroom_site::BuildError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Contentful(#[from] ContentfulError),

    #[error("{0}")]
    Build(#[from] BuildError),
}
