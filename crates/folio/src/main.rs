//! folio CLI - portfolio CMS content tool.
//!
//! Provides commands for:
//! - `render`: Render a rich-text JSON document to HTML
//! - `articles list`: List blog articles from the CMS
//! - `articles show`: Show one article by id
//! - `articles latest`: Show the newest article

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ArticlesCommand, RenderArgs};
use output::Output;

/// folio - portfolio CMS content tool.
#[derive(Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    /// Enable info-level logging (otherwise RUST_LOG applies).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a rich-text JSON document.
    Render(RenderArgs),
    /// Blog article commands.
    #[command(subcommand)]
    Articles(ArticlesCommand),
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
        Commands::Articles(cmd) => cmd.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
