//! `folio articles` commands.

mod list;
mod show;

use std::path::PathBuf;

use clap::{Args, Subcommand};
use folio_cms::{ArticleOptions, CmsClient};
use folio_config::{CliSettings, Config};
use folio_richtext::RichTextRenderer;
use tracing::info;

use crate::error::CliError;
use crate::output::Output;

pub(crate) use list::ListArgs;
pub(crate) use show::{LatestArgs, ShowArgs};

/// Blog article subcommands.
#[derive(Subcommand)]
pub(crate) enum ArticlesCommand {
    /// List all articles.
    List(ListArgs),
    /// Show one article by id.
    Show(ShowArgs),
    /// Show the newest article.
    Latest(LatestArgs),
}

impl ArticlesCommand {
    /// Execute the articles subcommand.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        match self {
            Self::List(args) => args.execute(),
            Self::Show(args) => args.execute(),
            Self::Latest(args) => args.execute(),
        }
    }
}

/// CMS connection arguments shared by the article commands.
#[derive(Args)]
pub(crate) struct CmsArgs {
    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// CMS base URL (overrides config).
    #[arg(long, env = "FOLIO_CMS_URL")]
    endpoint_url: Option<String>,

    /// Content type to read (overrides config).
    #[arg(long)]
    content_type: Option<String>,
}

impl CmsArgs {
    /// Load config and build the client and article options from it.
    fn connect(&self, output: &Output) -> Result<(CmsClient, ArticleOptions), CliError> {
        let cli_settings = CliSettings {
            endpoint_url: self.endpoint_url.clone(),
            content_type_name: self.content_type.clone(),
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            info!("Using config {}", path.display());
        }

        if config.cms.is_none() {
            output.error("Error: cms configuration required in folio.toml");
            output.info("\nAdd the following to your folio.toml:");
            output.info("\n[cms]");
            output.info(r#"endpoint_url = "https://cms.example.com""#);
            output.info(r#"app_name = "your-app""#);
            output.info(r#"client_id = "your-app:client""#);
            output.info(r#"client_secret = "${FOLIO_CMS_CLIENT_SECRET}""#);
            return Err(CliError::Validation("cms configuration required".to_owned()));
        }
        let cms = config.require_cms()?;

        let options = ArticleOptions {
            renderer: RichTextRenderer::new()
                .with_lenient_root(config.render.lenient_root)
                .with_escaping(config.render.escape_html),
            words_per_minute: config.render.words_per_minute,
        };
        Ok((CmsClient::from_config(&cms), options))
    }
}
