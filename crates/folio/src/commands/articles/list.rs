//! `folio articles list` command implementation.

use std::num::NonZeroUsize;

use clap::Args;
use folio_cms::{Article, DEFAULT_PREVIEW_CHARS};

use super::CmsArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the articles list command.
#[derive(Args)]
pub(crate) struct ListArgs {
    #[command(flatten)]
    cms: CmsArgs,

    /// Print articles as JSON.
    #[arg(long)]
    json: bool,

    /// Print the first CHARS characters of each article body (default 300).
    #[arg(long, value_name = "CHARS")]
    preview: Option<Option<NonZeroUsize>>,
}

impl ListArgs {
    /// Execute the list command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (client, options) = self.cms.connect(&output)?;

        let articles = client.fetch_articles(&options)?;

        if self.json {
            output.print(&serde_json::to_string_pretty(&articles)?);
            return Ok(());
        }

        output.highlight(&format!(
            "Found {} article{}",
            articles.len(),
            if articles.len() == 1 { "" } else { "s" }
        ));
        let preview = self.preview_chars();
        for article in &articles {
            output.print(&summary_line(article));
            if let Some(chars) = preview {
                output.print(&format!("    {}", article.preview(chars)));
            }
        }
        Ok(())
    }

    /// Preview length requested with `--preview`, if any.
    fn preview_chars(&self) -> Option<usize> {
        self.preview
            .map(|chars| chars.map_or(DEFAULT_PREVIEW_CHARS, NonZeroUsize::get))
    }
}

/// One-line listing entry: id, date, reading time, title.
fn summary_line(article: &Article) -> String {
    format!(
        "{}  {}  {} min  {}",
        article.id,
        article.publish_date.as_deref().unwrap_or("-"),
        article.reading_time,
        article.title
    )
}
