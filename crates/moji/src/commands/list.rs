//! `moji list` command implementation.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::Args;
use moji_config::Config;
use moji_embed::EmbedRegistry;

use crate::error::CliError;
use crate::output::write_stdout;

/// Arguments for the list command.
#[derive(Args)]
pub(crate) struct ListArgs {
    /// Show the example shorthand for each embedder.
    #[arg(short, long)]
    examples: bool,

    /// Path to configuration file (default: auto-discover moji.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ListArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = Config::load(self.config.as_deref(), None)?;
        write_stdout(&format_listing(&config.registry(), self.examples))?;
        Ok(())
    }
}

/// One line per embedder: emoji, platform and asset count.
fn format_listing(registry: &EmbedRegistry, examples: bool) -> String {
    let mut out = String::new();
    for embedder in registry.iter() {
        let meta = embedder.meta();
        let _ = write!(out, "{}  {:<10}", meta.emoji, meta.platform.name());
        match meta.required_assets.len() {
            0 => out.push_str("no assets"),
            1 => out.push_str("1 asset"),
            n => {
                let _ = write!(out, "{n} assets");
            }
        }
        out.push('\n');
        if examples {
            let _ = writeln!(out, "    {}", meta.example);
        }
    }
    out
}
