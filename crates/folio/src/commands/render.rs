//! `folio render` command implementation.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use folio_config::{CliSettings, Config};
use folio_richtext::RichTextRenderer;
use serde_json::Value;
use tracing::debug;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Path to the JSON document (stdin when omitted or "-").
    input: Option<PathBuf>,

    /// Also render bare nodes that have no `doc` root.
    #[arg(long)]
    lenient: bool,

    /// HTML-escape text and attribute values.
    #[arg(long)]
    escape: bool,

    /// Output plain text instead of HTML.
    #[arg(long)]
    text: bool,

    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or is not JSON.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            lenient_root: self.lenient.then_some(true),
            escape_html: self.escape.then_some(true),
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let renderer = RichTextRenderer::new()
            .with_lenient_root(config.render.lenient_root)
            .with_escaping(config.render.escape_html);

        let source = read_input(self.input.as_deref())?;
        debug!("Read {} bytes of input", source.len());
        let rendered = render_source(&source, &renderer, self.text)?;

        if rendered.is_empty() {
            output.warning("Document rendered to nothing (no `doc` root?)");
        }
        output.print(&rendered);
        Ok(())
    }
}

/// Read the document from a file, or stdin for `None` / `-`.
fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

/// Parse a JSON document and render it.
fn render_source(source: &str, renderer: &RichTextRenderer, text: bool) -> Result<String, CliError> {
    let value: Value = serde_json::from_str(source)?;
    Ok(if text {
        renderer.render_text(&value)
    } else {
        renderer.render(&value)
    })
}
