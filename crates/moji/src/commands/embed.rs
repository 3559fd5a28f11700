//! `moji embed` command implementation.

use std::path::PathBuf;

use clap::Args;
use moji_config::{CliSettings, Config};
use moji_embed::{EmbedAttributes, EmbedRegistry, EmbedRequest};

use crate::error::CliError;
use crate::output::write_stdout;

/// Arguments for the embed command.
#[derive(Args)]
pub(crate) struct EmbedArgs {
    /// Trigger emoji (see `moji list`).
    emoji: String,

    /// Link to the post.
    link: String,

    /// Label text (iframe title for LinkedIn, link text for Instagram).
    #[arg(short, long, default_value = "")]
    label: String,

    /// Extra attributes, e.g. `#id .class width=500`.
    #[arg(short, long, default_value = "")]
    attrs: String,

    /// HTML-escape the label, link and attribute values.
    #[arg(long)]
    escape: bool,

    /// Do not print the embed's script tags.
    #[arg(long)]
    no_assets: bool,

    /// Path to configuration file (default: auto-discover moji.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl EmbedArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            escape_html: self.escape.then_some(true),
            inject_assets: self.no_assets.then_some(false),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let registry = config.registry();

        let request = EmbedRequest::new(self.emoji, self.link)
            .with_label(self.label)
            .with_attributes(EmbedAttributes::parse(&self.attrs));

        let html = embed(&registry, &request, &config)?;
        write_stdout(&html)?;
        Ok(())
    }
}

/// Render one request, followed by its assets when enabled.
fn embed(
    registry: &EmbedRegistry,
    request: &EmbedRequest,
    config: &Config,
) -> Result<String, CliError> {
    let embedder = registry
        .resolve(request.emoji())
        .ok_or_else(|| CliError::UnknownEmoji(request.emoji().to_owned()))?;

    let result = if config.render.escape_html {
        embedder.render(&request.escaped())?
    } else {
        embedder.render(request)?
    };

    let mut out = result.html;
    if config.render.inject_assets {
        for asset in &result.required_assets {
            out.push('\n');
            out.push_str(asset);
        }
    }
    Ok(out)
}
