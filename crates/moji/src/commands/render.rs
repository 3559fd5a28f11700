//! `moji render` command implementation.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use moji_config::{CliSettings, Config};
use moji_embed::ShorthandProcessor;
use pulldown_cmark::{Options, Parser, html};

use crate::error::CliError;
use crate::output::{Output, write_stdout};

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to render (default: stdin).
    input: Option<PathBuf>,

    /// Write the result to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover moji.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// HTML-escape labels, links and attribute values.
    #[arg(long)]
    escape: bool,

    /// Do not append the embeds' script tags.
    #[arg(long)]
    no_assets: bool,

    /// Only expand shorthand, leave the rest of the document as markdown.
    #[arg(long)]
    raw: bool,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            escape_html: self.escape.then_some(true),
            inject_assets: self.no_assets.then_some(false),
            markdown: self.raw.then_some(false),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        tracing::info!(
            config = ?config.config_path,
            platforms = config.platforms.len(),
            markdown = config.render.markdown,
            "Rendering document"
        );

        if config.platforms.is_empty() {
            output.warning("No platforms enabled in configuration");
        }

        let source = read_input(self.input.as_deref())?;
        let rendered = render_document(&source, &config)?;

        if let Some(path) = &self.output {
            std::fs::write(path, &rendered.html)?;
            output.info(&format!("Embeds: {}", rendered.embeds));
            output.success(&format!("Rendered to {}", path.display()));
        } else {
            write_stdout(&rendered.html)?;
        }

        Ok(())
    }
}

/// A rendered document.
#[derive(Debug)]
pub(crate) struct RenderedDocument {
    pub(crate) html: String,
    pub(crate) embeds: usize,
}

/// Expand shorthand, optionally render markdown, and append assets.
pub(crate) fn render_document(source: &str, config: &Config) -> Result<RenderedDocument, CliError> {
    let registry = config.registry();
    let mut processor =
        ShorthandProcessor::new(&registry).with_escaping(config.render.escape_html);

    let expanded = processor.process(source)?;
    let mut html = if config.render.markdown {
        markdown_to_html(&expanded)
    } else {
        expanded
    };

    if config.render.inject_assets {
        processor.inject_assets(&mut html);
    }

    Ok(RenderedDocument {
        html,
        embeds: processor.rendered_count(),
    })
}

fn markdown_to_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(markdown, options);

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    if let Some(path) = path {
        return Ok(std::fs::read_to_string(path)?);
    }
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    Ok(input)
}
