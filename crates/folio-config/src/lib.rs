//! Configuration management for folio.
//!
//! Parses `folio.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String values in the `[cms]` section support environment variable
//! expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `cms.endpoint_url`
//! - `cms.app_name`
//! - `cms.client_id`
//! - `cms.client_secret`
//! - `cms.content_type_name`
//! - `cms.scope`
//!
//! Expansion happens in [`Config::require_cms`], so a config whose `[cms]`
//! variables are unset still loads for commands that never reach the CMS.

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override CMS endpoint URL.
    pub endpoint_url: Option<String>,
    /// Override content type (schema) name.
    pub content_type_name: Option<String>,
    /// Override lenient root rendering.
    pub lenient_root: Option<bool>,
    /// Override HTML escaping.
    pub escape_html: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "folio.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// CMS connection (optional section, required by article commands).
    pub cms: Option<CmsConfig>,
    /// Rich-text rendering configuration.
    pub render: RenderConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Headless CMS connection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CmsConfig {
    /// CMS base URL; identity and content endpoints hang off it.
    pub endpoint_url: String,
    /// CMS app the content belongs to.
    pub app_name: String,
    /// OAuth2 client id.
    pub client_id: String,
    /// OAuth2 client secret.
    pub client_secret: String,
    /// Content type (schema) to list.
    #[serde(default = "default_content_type_name")]
    pub content_type_name: String,
    /// OAuth2 scope requested in the token exchange.
    #[serde(default = "default_scope")]
    pub scope: String,
    /// HTTP timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl CmsConfig {
    /// Validate that all required fields are properly set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any field is empty or has invalid format.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.endpoint_url, "cms.endpoint_url")?;
        require_http_url(&self.endpoint_url, "cms.endpoint_url")?;
        require_non_empty(&self.app_name, "cms.app_name")?;
        require_non_empty(&self.client_id, "cms.client_id")?;
        require_non_empty(&self.client_secret, "cms.client_secret")?;
        require_non_empty(&self.content_type_name, "cms.content_type_name")?;
        require_non_empty(&self.scope, "cms.scope")?;
        if self.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "cms.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Copy with environment variable references expanded in every string field.
    fn expanded(&self) -> Result<Self, ConfigError> {
        Ok(Self {
            endpoint_url: expand::expand_env(&self.endpoint_url, "cms.endpoint_url")?,
            app_name: expand::expand_env(&self.app_name, "cms.app_name")?,
            client_id: expand::expand_env(&self.client_id, "cms.client_id")?,
            client_secret: expand::expand_env(&self.client_secret, "cms.client_secret")?,
            content_type_name: expand::expand_env(
                &self.content_type_name,
                "cms.content_type_name",
            )?,
            scope: expand::expand_env(&self.scope, "cms.scope")?,
            timeout_secs: self.timeout_secs,
        })
    }

    /// HTTP timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_content_type_name() -> String {
    "blog".to_owned()
}

fn default_scope() -> String {
    "squidex-api".to_owned()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Rich-text rendering configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Render bare nodes that lack a `doc` root.
    pub lenient_root: bool,
    /// HTML-escape text and attribute values.
    pub escape_html: bool,
    /// Reading speed for reading-time estimates.
    pub words_per_minute: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            lenient_root: false,
            escape_html: false,
            words_per_minute: 200,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`cms.client_secret`").
        field: String,
        /// Error message (e.g., "${`FOLIO_CMS_SECRET`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `folio.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_config(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(cms) = &mut self.cms {
            if let Some(endpoint_url) = &settings.endpoint_url {
                cms.endpoint_url.clone_from(endpoint_url);
            }
            if let Some(content_type_name) = &settings.content_type_name {
                cms.content_type_name.clone_from(content_type_name);
            }
        }
        if let Some(lenient_root) = settings.lenient_root {
            self.render.lenient_root = lenient_root;
        }
        if let Some(escape_html) = settings.escape_html {
            self.render.escape_html = escape_html;
        }
    }

    /// Get expanded and validated CMS configuration.
    ///
    /// Returns the CMS config if the `[cms]` section is present, its
    /// environment references resolve, and all fields are valid. Use this
    /// instead of accessing the `cms` field directly when the command
    /// requires the CMS.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EnvVar` if a referenced variable is unset, or
    /// `ConfigError::Validation` if the section is missing or invalid.
    pub fn require_cms(&self) -> Result<CmsConfig, ConfigError> {
        let cms = self
            .cms
            .as_ref()
            .ok_or_else(|| ConfigError::Validation("[cms] section required in config".into()))?
            .expanded()?;
        cms.validate()?;
        Ok(cms)
    }

    /// Search for config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// The `[cms]` section is only checked by [`require_cms`](Self::require_cms),
    /// so commands that never talk to the CMS work with an incomplete section.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        const MAX_WPM: u32 = 10_000;

        let wpm = self.render.words_per_minute;
        if wpm == 0 {
            return Err(ConfigError::Validation(
                "render.words_per_minute must be greater than 0".to_owned(),
            ));
        }
        if wpm > MAX_WPM {
            return Err(ConfigError::Validation(format!(
                "render.words_per_minute cannot exceed {MAX_WPM}"
            )));
        }
        Ok(())
    }

}
