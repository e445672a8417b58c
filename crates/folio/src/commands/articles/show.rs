//! `folio articles show` and `folio articles latest` command implementations.

use clap::Args;
use folio_cms::{Article, CmsError};

use super::CmsArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the articles show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    /// Content item id of the article.
    id: String,

    #[command(flatten)]
    cms: CmsArgs,
}

impl ShowArgs {
    /// Execute the show command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (client, options) = self.cms.connect(&output)?;

        match client.find_article(&self.id, &options) {
            Ok(article) => {
                print_article(&output, &article);
                Ok(())
            }
            Err(err) => Err(fallback(&output, err)),
        }
    }
}

/// Arguments for the articles latest command.
#[derive(Args)]
pub(crate) struct LatestArgs {
    #[command(flatten)]
    cms: CmsArgs,
}

impl LatestArgs {
    /// Execute the latest command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (client, options) = self.cms.connect(&output)?;

        match client.latest_article(&options) {
            Ok(Some(article)) => {
                print_article(&output, &article);
                Ok(())
            }
            Ok(None) => {
                output.warning(&format!(
                    "No articles found in the '{}' content type.",
                    client.content_type_name()
                ));
                Ok(())
            }
            Err(err) => Err(fallback(&output, err)),
        }
    }
}

/// Print header details to stderr and the article body to stdout.
fn print_article(output: &Output, article: &Article) {
    output.highlight(&article.title);
    for line in header_lines(article) {
        output.detail(&line);
    }
    if !article.excerpt.is_empty() {
        output.info(&article.excerpt);
    }
    output.print(&article.content);
}

/// Metadata lines shown under the title.
fn header_lines(article: &Article) -> Vec<String> {
    let mut lines = vec![format!("By {}", article.author)];
    if let Some(date) = &article.publish_date {
        lines.push(format!("Published {date}"));
    }
    lines.push(format!(
        "{} min read, {} words",
        article.reading_time, article.word_count
    ));
    if !article.tags.is_empty() {
        lines.push(format!("Tags: {}", article.tags.join(", ")));
    }
    lines
}

/// Print a load failure with setup hints, then hand the error back.
fn fallback(output: &Output, err: CmsError) -> CliError {
    output.warning(&format!("Failed to load article: {err}"));
    if err.status().is_some() {
        output.info("Please check that:");
        output.info("  - the app exists in the CMS");
        output.info("  - the content type (schema) is created");
        output.info("  - the client credentials are correct");
        output.info("  - the API is accessible");
    }
    CliError::Cms(err)
}
