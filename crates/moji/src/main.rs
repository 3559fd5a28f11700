//! moji CLI - social post embeds from emoji shorthand.
//!
//! Provides commands for:
//! - `render`: Expand shorthand in a markdown document and render it to HTML
//! - `embed`: Render a single emoji + link pair
//! - `list`: Show the registered embedders

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{EmbedArgs, ListArgs, RenderArgs};
use output::Output;

/// moji - social post embeds from emoji shorthand.
#[derive(Parser)]
#[command(name = "moji", version, about)]
struct Cli {
    /// Enable info-level logging (otherwise RUST_LOG is used).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand shorthand in a markdown document.
    Render(RenderArgs),
    /// Render a single shorthand.
    Embed(EmbedArgs),
    /// List registered embedders.
    List(ListArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Embed(args) => args.execute(),
        Commands::List(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
