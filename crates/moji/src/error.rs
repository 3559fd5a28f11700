//! CLI error types.

use moji_config::ConfigError;
use moji_embed::{MalformedLinkError, ShorthandError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Shorthand(#[from] ShorthandError),

    #[error("{0}")]
    MalformedLink(#[from] MalformedLinkError),

    #[error("no embedder registered for {0}")]
    UnknownEmoji(String),
}
